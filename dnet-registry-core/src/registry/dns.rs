//! DNS 服务商注册表

use crate::builtin;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::table::{self, VendorTable};
use crate::types::{CredentialFieldSpec, DefinitionFile, DnsVendor, DnsVendorDefinition, VendorKey};

/// DNS 服务商注册表（启动时构建一次，之后只读）
#[derive(Debug, Clone)]
pub struct DnsRegistry {
    vendors: VendorTable<DnsVendor>,
    rejected: Vec<RegistryError>,
}

impl DnsRegistry {
    pub fn from_definitions(definitions: &[DnsVendorDefinition]) -> RegistryResult<Self> {
        let (vendors, rejected) = table::build(definitions, DnsVendorDefinition::validate);
        if vendors.is_empty() {
            return Err(RegistryError::NoVendors("DNS"));
        }
        Ok(Self { vendors, rejected })
    }

    pub fn from_json(content: &str) -> RegistryResult<Self> {
        let file = DefinitionFile::<DnsVendorDefinition>::from_json(content)?;
        Self::from_definitions(&file.vendors)
    }

    pub fn builtin() -> RegistryResult<Self> {
        Self::from_json(builtin::DNS_DEFINITIONS)
    }

    pub fn rejected(&self) -> &[RegistryError] {
        &self.rejected
    }

    pub fn list_vendors(&self) -> Vec<&VendorKey> {
        self.vendors.keys()
    }

    pub fn vendors(&self) -> impl Iterator<Item = &DnsVendor> {
        self.vendors.iter()
    }

    pub fn get_vendor(&self, key: &str) -> RegistryResult<&DnsVendor> {
        self.vendors
            .get(key)
            .ok_or_else(|| RegistryError::UnknownVendor(key.to_string()))
    }

    pub fn get_credential_spec(&self, key: &str) -> RegistryResult<&CredentialFieldSpec> {
        self.get_vendor(key).map(|vendor| &vendor.credential)
    }
}
