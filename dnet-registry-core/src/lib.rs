//! DNet 服务商元数据注册表
//!
//! 描述控制台如何为各 CDN / DNS 服务商渲染凭证表单，以及 CDN 各记录类型的
//! 源站数量上限与协议提示。注册表在启动时从静态定义构建一次，之后只读，
//! 可被任意数量的读者并发访问。
//!
//! # Example
//!
//! ```rust
//! use dnet_registry_core::{CdnRegistry, RegistryError};
//!
//! let registry = CdnRegistry::builtin()?;
//! let capability = registry.get_type_capability("aliyun", "DCDN")?;
//! assert_eq!(capability.max_sources, 5);
//!
//! assert_eq!(
//!     registry.validate_source_count("aliyun", "DCDN", 6),
//!     Err(RegistryError::SourceLimitExceeded { limit: 5 })
//! );
//! # Ok::<(), RegistryError>(())
//! ```

pub mod builtin;
mod error;
pub mod help_text;
mod registry;
mod services;
mod types;

pub use error::{RegistryError, RegistryResult};
pub use registry::{CdnRegistry, DnsRegistry, Keyed};
pub use services::{ProviderMetadata, ProviderMetadataService, ServiceFamily};
pub use types::{
    CdnVendor, CdnVendorDefinition, CredentialFieldSpec, DefinitionFile, DnsVendor,
    DnsVendorDefinition, HelpLink, RecordType, TypeCapability, VendorKey,
};
