//! 错误处理模块

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use dnet_registry_core::RegistryError;
use serde::Serialize;

/// API 错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("服务商未找到: {0}")]
    VendorNotFound(String),

    #[error("记录类型未找到: {0}")]
    TypeNotFound(String),

    #[error("源站数量超出上限: {limit}")]
    SourceLimitExceeded { limit: u32 },

    #[error("请求参数错误: {0}")]
    BadRequest(String),

    #[error("未知命令: {0}")]
    UnknownCommand(String),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    /// 附带在错误响应中的上限值
    fn limit(&self) -> Option<u32> {
        match self {
            Self::SourceLimitExceeded { limit } => Some(*limit),
            _ => None,
        }
    }
}

/// API 响应包装
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            limit: None,
        }
    }

    pub fn error(message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
            limit: None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::VendorNotFound(_) | Self::TypeNotFound(_) => StatusCode::NOT_FOUND,
            Self::SourceLimitExceeded { .. } | Self::BadRequest(_) | Self::UnknownCommand(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = ApiResponse::<()>::error(self.to_string());
        body.limit = self.limit();
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownVendor(key) => Self::VendorNotFound(key),
            RegistryError::UnknownType { vendor, type_name } => {
                Self::TypeNotFound(format!("{vendor}/{type_name}"))
            }
            RegistryError::SourceLimitExceeded { limit } => Self::SourceLimitExceeded { limit },
            RegistryError::InvalidArgument(msg) => Self::BadRequest(msg),
            other => Self::Internal(other.to_string()),
        }
    }
}
