//! 配置管理器 - 负责处理不同环境下的配置选择和覆盖
//!
//! 该模块提供了配置管理功能，包括：
//! - 根据环境变量选择配置文件
//! - 加载环境特定配置

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use toml::{Table, Value};

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "FLARE_MESSAGE_CONFIG";
/// 指定运行环境的环境变量
pub const ENVIRONMENT_ENV: &str = "FLARE_ENV";

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 从环境变量 FLARE_MESSAGE_CONFIG 获取配置文件路径，空值视为未设置
    pub fn config_path_from_env() -> Option<String> {
        env::var(CONFIG_PATH_ENV)
            .ok()
            .filter(|path| !path.trim().is_empty())
    }

    /// 获取当前环境名称
    ///
    /// 从环境变量 FLARE_ENV 获取当前环境名称，
    /// 如果未设置则默认为 "development"
    pub fn get_environment() -> String {
        env::var(ENVIRONMENT_ENV).unwrap_or_else(|_| "development".to_string())
    }

    /// 环境覆盖配置文件路径：config/environments/{environment}.toml
    pub fn environment_config_path(environment: &str) -> PathBuf {
        Path::new("config")
            .join("environments")
            .join(format!("{environment}.toml"))
    }

    /// 加载当前环境的覆盖配置
    ///
    /// # 返回
    /// 文件不存在时返回 Ok(None)，读取或解析失败时返回错误
    pub fn load_environment_overlay() -> Result<Option<Value>> {
        let path = Self::environment_config_path(&Self::get_environment());
        Self::load_overlay_from(&path)
    }

    fn load_overlay_from(path: &Path) -> Result<Option<Value>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("无法读取环境配置文件: {}", path.display()))?;
        let table: Table = toml::from_str(&content)
            .with_context(|| format!("无效的环境配置格式: {}", path.display()))?;
        Ok(Some(Value::Table(table)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_config_path() {
        let path = ConfigManager::environment_config_path("production");
        assert_eq!(path, Path::new("config/environments/production.toml"));
    }

    #[test]
    fn test_missing_overlay_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let overlay = ConfigManager::load_overlay_from(&dir.path().join("staging.toml")).unwrap();
        assert!(overlay.is_none());
    }

    #[test]
    fn test_overlay_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staging.toml");
        fs::write(&path, "[media]\nreport_degraded = false\n").unwrap();

        let overlay = ConfigManager::load_overlay_from(&path).unwrap().unwrap();
        assert_eq!(
            overlay
                .get("media")
                .and_then(|m| m.get("report_degraded"))
                .and_then(Value::as_bool),
            Some(false)
        );
    }

    #[test]
    fn test_broken_overlay_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[media\n").unwrap();
        assert!(ConfigManager::load_overlay_from(&path).is_err());
    }
}
