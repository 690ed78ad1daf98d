//! CDN 服务商注册表

use crate::builtin;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::table::{self, VendorTable};
use crate::types::{CdnVendor, CdnVendorDefinition, DefinitionFile, TypeCapability, VendorKey};

/// CDN 服务商注册表（启动时构建一次，之后只读）
#[derive(Debug, Clone)]
pub struct CdnRegistry {
    vendors: VendorTable<CdnVendor>,
    rejected: Vec<RegistryError>,
}

impl CdnRegistry {
    /// 从定义构建，未通过校验的服务商被排除并记录在 [`Self::rejected`]
    pub fn from_definitions(definitions: &[CdnVendorDefinition]) -> RegistryResult<Self> {
        let (vendors, rejected) = table::build(definitions, CdnVendorDefinition::validate);
        if vendors.is_empty() {
            return Err(RegistryError::NoVendors("CDN"));
        }
        log::debug!(
            "CDN registry loaded: {} vendors, {} rejected",
            definitions.len() - rejected.len(),
            rejected.len()
        );
        Ok(Self { vendors, rejected })
    }

    /// 从 JSON 定义文档构建
    pub fn from_json(content: &str) -> RegistryResult<Self> {
        let file = DefinitionFile::<CdnVendorDefinition>::from_json(content)?;
        Self::from_definitions(&file.vendors)
    }

    /// 使用内置定义构建
    pub fn builtin() -> RegistryResult<Self> {
        Self::from_json(builtin::CDN_DEFINITIONS)
    }

    /// 对全部定义执行加载时校验，不构建注册表
    pub fn load_time_validate(definitions: &[CdnVendorDefinition]) -> Result<(), Vec<RegistryError>> {
        let (_, rejected) = table::build(definitions, CdnVendorDefinition::validate);
        if rejected.is_empty() {
            Ok(())
        } else {
            Err(rejected)
        }
    }

    /// 加载时被排除的服务商
    pub fn rejected(&self) -> &[RegistryError] {
        &self.rejected
    }

    /// 按定义顺序列出服务商
    pub fn list_vendors(&self) -> Vec<&VendorKey> {
        self.vendors.keys()
    }

    pub fn vendors(&self) -> impl Iterator<Item = &CdnVendor> {
        self.vendors.iter()
    }

    pub fn get_vendor(&self, key: &str) -> RegistryResult<&CdnVendor> {
        self.vendors
            .get(key)
            .ok_or_else(|| RegistryError::UnknownVendor(key.to_string()))
    }

    /// 按类型名（区分大小写）查询限制
    pub fn get_type_capability(&self, key: &str, type_name: &str) -> RegistryResult<TypeCapability> {
        let vendor = self.get_vendor(key)?;
        let (index, record_type) =
            vendor
                .find_type(type_name)
                .ok_or_else(|| RegistryError::UnknownType {
                    vendor: key.to_string(),
                    type_name: type_name.to_string(),
                })?;

        Ok(TypeCapability {
            index,
            max_sources: record_type.max_sources,
            protocol_tip: record_type.protocol_tip.clone(),
        })
    }

    /// 按下标查询限制
    pub fn get_type_capability_at(&self, key: &str, index: usize) -> RegistryResult<TypeCapability> {
        let vendor = self.get_vendor(key)?;
        let record_type = vendor.record_types.get(index).ok_or_else(|| {
            RegistryError::InvalidArgument(format!(
                "type index {index} out of range for vendor '{key}'"
            ))
        })?;

        Ok(TypeCapability {
            index,
            max_sources: record_type.max_sources,
            protocol_tip: record_type.protocol_tip.clone(),
        })
    }

    /// 校验源站数量，上限本身合法
    ///
    /// `count` 来自表单提交，负数返回 `InvalidArgument`。
    pub fn validate_source_count(&self, key: &str, type_name: &str, count: i64) -> RegistryResult<()> {
        let capability = self.get_type_capability(key, type_name)?;
        if count < 0 {
            return Err(RegistryError::InvalidArgument(format!(
                "source count must be non-negative, got {count}"
            )));
        }
        if count > i64::from(capability.max_sources) {
            return Err(RegistryError::SourceLimitExceeded {
                limit: capability.max_sources,
            });
        }
        Ok(())
    }
}
