//! 辅助工具函数模块
//!
//! 提供配置加载、日志初始化等启动辅助函数

use anyhow::{Context, Result};

use crate::config::MessageConfig;
use crate::message::thumb::warm_up_default_thumb;

/// 客户端启动辅助函数
pub struct ClientHelper;

impl ClientHelper {
    /// 加载配置并验证
    ///
    /// # 参数
    /// * `config_path` - 配置路径
    /// * `strict` - 是否严格验证配置
    ///
    /// # 返回
    /// 返回加载的配置实例
    pub fn load_config(config_path: Option<&str>, strict: bool) -> Result<&'static MessageConfig> {
        let config = crate::config::load_config(config_path);

        if strict {
            config
                .validate()
                .with_context(|| "configuration validation failed")?;
            return Ok(config);
        }

        // 非严格模式下，即使验证失败也继续运行，只记录警告日志
        if let Err(e) = config.validate() {
            tracing::warn!("configuration validation failed: {}", e);
        }

        Ok(config)
    }

    /// 进程启动时调用：加载配置、初始化日志、解码默认缩略图
    ///
    /// 默认缩略图在任何构造函数运行之前完成解码，之后只读。
    pub fn bootstrap(config_path: Option<&str>, strict: bool) -> Result<&'static MessageConfig> {
        let config = Self::load_config(config_path, strict)?;
        crate::tracing::init_tracing_from_config(Some(&config.logging));

        let thumb_len = warm_up_default_thumb();
        tracing::debug!(thumb_len, "default thumbnail decoded");

        Ok(config)
    }
}
