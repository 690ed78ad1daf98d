//! 类型定义模块

mod definition;
mod vendor;

pub use definition::{CdnVendorDefinition, DefinitionFile, DnsVendorDefinition};
pub use vendor::{
    CdnVendor, CredentialFieldSpec, DnsVendor, HelpLink, RecordType, TypeCapability, VendorKey,
};
