//! Flare IM 消息元素配置模块
//!
//! 该模块提供了消息元素库的配置管理功能，包括：
//! - 配置文件加载和解析
//! - 环境特定配置覆盖
//! - 日志与媒体探测配置定义

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use toml::{Table, Value};
use tracing::warn;

// 导入配置管理器模块
mod manager;
pub use manager::ConfigManager;

/// 全局配置实例，使用 OnceLock 确保只初始化一次
static MESSAGE_CONFIG: OnceLock<MessageConfig> = OnceLock::new();

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别（RUST_LOG 未设置时生效）
    pub level: String,
    /// 是否输出 target
    pub with_target: bool,
    /// 是否输出线程 ID
    pub with_thread_ids: bool,
    /// 是否输出文件名
    pub with_file: bool,
    /// 是否输出行号
    pub with_line_number: bool,
    /// 以 JSON 格式输出
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
            with_thread_ids: false,
            with_file: false,
            with_line_number: false,
            json: false,
        }
    }
}

/// 媒体元素构造配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// 是否探测语音时长，关闭时直接使用内容长度作为时长
    pub audio_probe: bool,
    /// 是否探测视频封面尺寸，关闭时直接使用 1920x1080
    pub image_probe: bool,
    /// 探测降级时是否输出告警日志
    pub report_degraded: bool,
    /// 摘要计算的读取块大小（字节）
    pub digest_chunk_size: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            audio_probe: true,
            image_probe: true,
            report_degraded: true,
            digest_chunk_size: flare_media::DEFAULT_CHUNK_SIZE,
        }
    }
}

/// 消息元素库配置主结构体
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MessageConfig {
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 媒体配置
    #[serde(default)]
    pub media: MediaConfig,
}

impl MessageConfig {
    /// 校验配置取值
    pub fn validate(&self) -> Result<()> {
        if self.media.digest_chunk_size == 0 {
            return Err(anyhow!("media.digest_chunk_size must be greater than zero"));
        }
        if self.media.digest_chunk_size > flare_media::MAX_CHUNK_SIZE {
            return Err(anyhow!(
                "media.digest_chunk_size must not exceed {} bytes",
                flare_media::MAX_CHUNK_SIZE
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(anyhow!("logging.level must not be empty"));
        }
        Ok(())
    }

    /// 从 TOML 文本解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let cfg: MessageConfig = toml::from_str(content).context("invalid config format")?;
        Ok(cfg)
    }
}

/// 加载配置
///
/// 路径优先级：参数 > 环境变量 FLARE_MESSAGE_CONFIG > config/message.toml > message.toml。
/// 所有来源都失败时使用默认配置。
pub fn load_config(path: Option<&str>) -> &'static MessageConfig {
    let candidates: Vec<PathBuf> = match path
        .map(str::to_string)
        .or_else(ConfigManager::config_path_from_env)
    {
        Some(p) => vec![PathBuf::from(p)],
        None => vec![
            PathBuf::from("config/message.toml"),
            PathBuf::from("message.toml"),
        ],
    };

    MESSAGE_CONFIG.get_or_init(|| load_with_fallback(&candidates))
}

/// 已加载的配置，尚未调用 [`load_config`] 时为 None
pub fn loaded_config() -> Option<&'static MessageConfig> {
    MESSAGE_CONFIG.get()
}

/// 使用备选方案加载配置
fn load_with_fallback(candidates: &[PathBuf]) -> MessageConfig {
    for path in candidates {
        match load_config_from_file(path) {
            Ok(cfg) => return cfg,
            Err(err) => {
                warn!("failed to load config from {}: {err:#}", path.display());
            }
        }
    }

    warn!("no configuration source succeeded, falling back to defaults");
    MessageConfig::default()
}

/// 从文件加载配置，并合并当前环境的覆盖配置
fn load_config_from_file(path: &Path) -> Result<MessageConfig> {
    if !path.exists() {
        return Err(anyhow!(
            "configuration path {} does not exist",
            path.display()
        ));
    }

    let mut merged = load_toml_value(path)?;
    match ConfigManager::load_environment_overlay() {
        Ok(Some(overlay)) => merge_value(&mut merged, overlay),
        Ok(None) => {}
        Err(e) => warn!("failed to load environment config: {e:#}"),
    }

    let cfg: MessageConfig = merged
        .try_into()
        .with_context(|| format!("invalid config format: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config values: {}", path.display()))?;
    Ok(cfg)
}

/// 加载 TOML 值
fn load_toml_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("unable to read config file: {}", path.display()))?;
    let table: Table = toml::from_str(&content)
        .with_context(|| format!("invalid TOML content in {}", path.display()))?;
    Ok(Value::Table(table))
}

/// 合并值
fn merge_value(base: &mut Value, overlay: Value) {
    match overlay {
        Value::Table(overlay_table) => {
            if let Value::Table(base_table) = base {
                for (key, overlay_value) in overlay_table.into_iter() {
                    match base_table.get_mut(&key) {
                        Some(base_value) => merge_value(base_value, overlay_value),
                        None => {
                            base_table.insert(key, overlay_value);
                        }
                    }
                }
            } else {
                *base = Value::Table(overlay_table);
            }
        }
        other => {
            *base = other;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = MessageConfig::default();
        assert!(cfg.media.audio_probe);
        assert!(cfg.media.image_probe);
        assert!(cfg.media.report_degraded);
        assert_eq!(cfg.media.digest_chunk_size, 64 * 1024);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let cfg = MessageConfig::from_toml_str(
            r#"
            [media]
            audio_probe = false
            "#,
        )
        .unwrap();
        assert!(!cfg.media.audio_probe);
        assert!(cfg.media.image_probe);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(MessageConfig::from_toml_str("[media\naudio_probe = ").is_err());
    }

    #[test]
    fn test_zero_chunk_size_fails_validation() {
        let cfg = MessageConfig::from_toml_str("[media]\ndigest_chunk_size = 0\n").unwrap();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_oversized_chunk_size_fails_validation() {
        let cfg =
            MessageConfig::from_toml_str("[media]\ndigest_chunk_size = 9223372036854775807\n")
                .unwrap();
        assert!(cfg.validate().is_err());

        let at_limit = MessageConfig::from_toml_str(&format!(
            "[media]\ndigest_chunk_size = {}\n",
            flare_media::MAX_CHUNK_SIZE
        ))
        .unwrap();
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("message.toml");
        fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        let cfg = load_config_from_file(&path).unwrap();
        assert_eq!(cfg.logging.level, "debug");
        assert!(load_config_from_file(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_merge_value_overlays_nested_tables() {
        let base: Table = toml::from_str("[media]\naudio_probe = true\nimage_probe = true\n").unwrap();
        let overlay: Table =
            toml::from_str("[media]\nimage_probe = false\n[logging]\nlevel = \"warn\"\n").unwrap();

        let mut base = Value::Table(base);

        merge_value(&mut base, Value::Table(overlay));
        let cfg: MessageConfig = base.try_into().unwrap();
        assert!(cfg.media.audio_probe);
        assert!(!cfg.media.image_probe);
        assert_eq!(cfg.logging.level, "warn");
    }
}
