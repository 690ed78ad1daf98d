//! 应用状态

use std::path::Path;
use std::sync::Arc;

use dnet_registry_core::{CdnRegistry, DnsRegistry, ProviderMetadataService, RegistryError};

use crate::config::RegistryConfig;

/// 应用状态（注册表只读，clone 开销为 Arc 复制）
#[derive(Clone)]
pub struct AppState {
    pub providers: ProviderMetadataService,
}

impl AppState {
    pub fn new(providers: ProviderMetadataService) -> Self {
        Self { providers }
    }

    /// 按配置构建注册表并记录被排除的服务商
    pub fn from_config(config: &RegistryConfig) -> anyhow::Result<Self> {
        let cdn = match &config.cdn_definitions {
            Some(path) => CdnRegistry::from_json(&read_definitions(path)?)?,
            None => CdnRegistry::builtin()?,
        };
        let dns = match &config.dns_definitions {
            Some(path) => DnsRegistry::from_json(&read_definitions(path)?)?,
            None => DnsRegistry::builtin()?,
        };

        let rejected: Vec<&RegistryError> = cdn.rejected().iter().chain(dns.rejected()).collect();
        for error in &rejected {
            tracing::warn!("服务商定义校验失败，已排除: {error}");
        }
        if config.strict && !rejected.is_empty() {
            anyhow::bail!("{} 个服务商定义校验失败（strict 模式）", rejected.len());
        }

        tracing::info!(
            "注册表加载完成: CDN {} 个, DNS {} 个",
            cdn.list_vendors().len(),
            dns.list_vendors().len()
        );

        Ok(Self::new(ProviderMetadataService::new(
            Arc::new(cdn),
            Arc::new(dns),
        )))
    }
}

fn read_definitions(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("读取定义文件 {} 失败: {e}", path.display()))
}
