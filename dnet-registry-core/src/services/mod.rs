//! 服务层模块

mod provider_metadata_service;

pub use provider_metadata_service::{ProviderMetadata, ProviderMetadataService, ServiceFamily};
