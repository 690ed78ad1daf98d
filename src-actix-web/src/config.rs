//! 配置模块
//!
//! 从 TOML 文件加载配置，文件不存在时使用默认值

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// 配置文件路径环境变量
pub const CONFIG_ENV: &str = "DNET_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 0 表示使用 CPU 核数
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9877,
            workers: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// 覆盖内置 CDN 定义的 JSON 文件
    pub cdn_definitions: Option<PathBuf>,
    /// 覆盖内置 DNS 定义的 JSON 文件
    pub dns_definitions: Option<PathBuf>,
    /// 任一服务商校验失败即终止启动
    pub strict: bool,
}

impl AppConfig {
    /// 加载配置（`DNET_CONFIG` 指定路径，默认 `config.toml`）
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!("配置文件 {} 不存在，使用默认配置", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_file() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9877");
        assert_eq!(config.server.workers, 0);
        assert!(!config.registry.strict);
        assert!(config.registry.cdn_definitions.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 8080

            [registry]
            strict = true
            cdn_definitions = "/etc/dnet/cdn.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.registry.strict);
        assert_eq!(
            config.registry.cdn_definitions.as_deref(),
            Some(Path::new("/etc/dnet/cdn.json"))
        );
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/dnet/config.toml")).unwrap();
        assert_eq!(config.server.port, 9877);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(AppConfig::from_toml("[server\nport = 1").is_err());
    }
}
