//! 工具函数模块
//!
//! 提供随机数、文件名提取等通用工具函数

pub mod helpers;

pub use helpers::ClientHelper;

use std::path::Path;

use rand::Rng;
use rand::rngs::OsRng;

/// 从操作系统随机源在闭区间 `[low, high]` 内均匀取值
///
/// 不使用统计型伪随机数生成器，骰子的越界降级依赖该函数。
pub fn rand_in_range(low: u32, high: u32) -> u32 {
    OsRng.gen_range(low..=high)
}

/// 获取路径的文件名部分，无法识别时返回空字符串
///
/// # 示例
/// ```
/// use flare_im_message::utils::file_base_name;
///
/// assert_eq!(file_base_name("/tmp/report.pdf"), "report.pdf");
/// assert_eq!(file_base_name("notes.txt"), "notes.txt");
/// ```
pub fn file_base_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
