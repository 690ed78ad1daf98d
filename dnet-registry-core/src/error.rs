//! 错误类型定义

use thiserror::Error;

/// 注册表错误类型
///
/// 查询类错误（`UnknownVendor` / `UnknownType` / `InvalidArgument` / `SourceLimitExceeded`）
/// 都是本地可恢复的，调用方展示兜底 UI 即可。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown vendor: {0}")]
    UnknownVendor(String),

    #[error("Unknown record type '{type_name}' for vendor '{vendor}'")]
    UnknownType { vendor: String, type_name: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Source count exceeds limit of {limit}")]
    SourceLimitExceeded { limit: u32 },

    /// 加载时校验失败，该服务商会被排除
    #[error("Schema error in vendor '{vendor}': {reason}")]
    Schema { vendor: String, reason: String },

    #[error("Malformed composite help text: expected {expected} fragments, found {found}")]
    MalformedCompositeHelp { expected: usize, found: usize },

    /// 所有服务商均未通过校验
    #[error("No valid {0} vendors defined")]
    NoVendors(&'static str),

    /// 定义文档本身无法解析
    #[error("Definition error: {0}")]
    Definition(String),
}

impl RegistryError {
    pub(crate) fn schema(vendor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            vendor: vendor.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Definition(err.to_string())
    }
}

/// Registry 操作结果类型
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
