//! Provider 元数据服务
//!
//! 面向表单渲染层的统一查询入口（按服务类别分发，无状态）

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::RegistryResult;
use crate::registry::{CdnRegistry, DnsRegistry};
use crate::types::{CdnVendor, DnsVendor, TypeCapability, VendorKey};

/// 服务类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceFamily {
    Cdn,
    Dns,
}

impl fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cdn => write!(f, "cdn"),
            Self::Dns => write!(f, "dns"),
        }
    }
}

/// 表单渲染所需的服务商元数据（字段形态与前端一致）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    pub key: VendorKey,
    pub name: String,
    pub id_label: String,
    pub secret_label: String,
    pub id_help_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_select: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sources: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_tip_html: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_help_html: Option<String>,
}

impl From<&CdnVendor> for ProviderMetadata {
    fn from(vendor: &CdnVendor) -> Self {
        Self {
            key: vendor.key.clone(),
            name: vendor.name.clone(),
            id_label: vendor.credential.id_label.clone(),
            secret_label: vendor.credential.secret_label.clone(),
            id_help_html: vendor.credential.id_help_html.clone(),
            type_select: Some(vendor.type_select().into_iter().map(String::from).collect()),
            max_sources: Some(vendor.max_sources()),
            protocol_tip_html: Some(
                vendor
                    .protocol_tips()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ),
            type_help_html: Some(vendor.type_help_html()),
        }
    }
}

impl From<&DnsVendor> for ProviderMetadata {
    fn from(vendor: &DnsVendor) -> Self {
        Self {
            key: vendor.key.clone(),
            name: vendor.name.clone(),
            id_label: vendor.credential.id_label.clone(),
            secret_label: vendor.credential.secret_label.clone(),
            id_help_html: vendor.credential.id_help_html.clone(),
            type_select: None,
            max_sources: None,
            protocol_tip_html: None,
            type_help_html: None,
        }
    }
}

/// Provider 元数据服务
///
/// 注册表在启动时构建并注入，测试中可替换为自定义注册表。
#[derive(Clone)]
pub struct ProviderMetadataService {
    cdn: Arc<CdnRegistry>,
    dns: Arc<DnsRegistry>,
}

impl ProviderMetadataService {
    /// 创建 Provider 元数据服务实例
    #[must_use]
    pub fn new(cdn: Arc<CdnRegistry>, dns: Arc<DnsRegistry>) -> Self {
        Self { cdn, dns }
    }

    /// 使用内置定义创建
    pub fn builtin() -> RegistryResult<Self> {
        Ok(Self::new(
            Arc::new(CdnRegistry::builtin()?),
            Arc::new(DnsRegistry::builtin()?),
        ))
    }

    pub fn cdn(&self) -> &CdnRegistry {
        &self.cdn
    }

    pub fn dns(&self) -> &DnsRegistry {
        &self.dns
    }

    /// 按定义顺序列出服务商 key
    pub fn list_vendors(&self, family: ServiceFamily) -> Vec<VendorKey> {
        let keys = match family {
            ServiceFamily::Cdn => self.cdn.list_vendors(),
            ServiceFamily::Dns => self.dns.list_vendors(),
        };
        keys.into_iter().cloned().collect()
    }

    /// 获取所有支持的提供商列表
    pub fn list_providers(&self, family: ServiceFamily) -> Vec<ProviderMetadata> {
        match family {
            ServiceFamily::Cdn => self.cdn.vendors().map(ProviderMetadata::from).collect(),
            ServiceFamily::Dns => self.dns.vendors().map(ProviderMetadata::from).collect(),
        }
    }

    pub fn get_vendor(&self, family: ServiceFamily, key: &str) -> RegistryResult<ProviderMetadata> {
        match family {
            ServiceFamily::Cdn => self.cdn.get_vendor(key).map(ProviderMetadata::from),
            ServiceFamily::Dns => self.dns.get_vendor(key).map(ProviderMetadata::from),
        }
    }

    pub fn get_type_capability(&self, key: &str, type_name: &str) -> RegistryResult<TypeCapability> {
        self.cdn.get_type_capability(key, type_name)
    }

    pub fn validate_source_count(&self, key: &str, type_name: &str, count: i64) -> RegistryResult<()> {
        self.cdn.validate_source_count(key, type_name, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegistryError;

    #[test]
    fn test_cdn_metadata_shape() {
        let service = ProviderMetadataService::builtin().unwrap();
        let aliyun = service.get_vendor(ServiceFamily::Cdn, "aliyun").unwrap();
        let value = serde_json::to_value(&aliyun).unwrap();

        assert_eq!(value["idLabel"], "AccessKey ID：");
        assert_eq!(value["typeSelect"], serde_json::json!(["ESA", "CDN", "DCDN"]));
        assert_eq!(value["maxSources"], serde_json::json!([1, 20, 5]));
        assert_eq!(value["protocolTipHtml"].as_array().map(Vec::len), Some(3));
        assert!(value["typeHelpHtml"]
            .as_str()
            .is_some_and(|html| html.contains("https://dcdn.console.aliyun.com/")));
    }

    #[test]
    fn test_dns_metadata_has_no_type_fields() {
        let service = ProviderMetadataService::builtin().unwrap();
        let value = serde_json::to_value(service.get_vendor(ServiceFamily::Dns, "tencent").unwrap())
            .unwrap();
        assert_eq!(value["secretLabel"], "SecretKey：");
        assert!(value.get("typeSelect").is_none());
        assert!(value.get("typeHelpHtml").is_none());
    }

    #[test]
    fn test_unknown_vendor_both_families() {
        let service = ProviderMetadataService::builtin().unwrap();
        for family in [ServiceFamily::Cdn, ServiceFamily::Dns] {
            assert_eq!(
                service.get_vendor(family, "nonexistent-key").unwrap_err(),
                RegistryError::UnknownVendor("nonexistent-key".to_string())
            );
        }
    }

    #[test]
    fn test_family_serde() {
        let family: ServiceFamily = serde_json::from_str("\"dns\"").unwrap();
        assert_eq!(family, ServiceFamily::Dns);
        assert_eq!(ServiceFamily::Cdn.to_string(), "cdn");
    }
}
