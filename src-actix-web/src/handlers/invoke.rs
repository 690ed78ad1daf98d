//! RPC 风格的统一调用入口
//!
//! 所有前端请求都通过 POST /api/invoke 进行

use actix_web::{web, HttpResponse, ResponseError};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResponse};
use crate::state::AppState;

use super::provider;

/// RPC 请求
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub command: String,
    #[serde(default)]
    pub args: Value,
}

/// 统一调用入口
pub async fn invoke_handler(
    state: web::Data<AppState>,
    req: web::Json<InvokeRequest>,
) -> HttpResponse {
    tracing::debug!("收到 RPC 请求: {} {:?}", req.command, req.args);

    let result = dispatch_command(&state, &req.command, req.args.clone());

    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => {
            tracing::error!("命令 {} 执行失败: {}", req.command, e);
            e.error_response()
        }
    }
}

/// 命令分发
fn dispatch_command(state: &AppState, command: &str, args: Value) -> Result<Value, ApiError> {
    match command {
        "list_vendors" => {
            let req: provider::FamilyArgs = serde_json::from_value(args)?;
            let result = provider::list_vendors(state, &req);
            Ok(serde_json::to_value(ApiResponse::success(result))?)
        }
        "list_providers" => {
            let req: provider::FamilyArgs = serde_json::from_value(args)?;
            let result = provider::list_providers(state, &req);
            Ok(serde_json::to_value(ApiResponse::success(result))?)
        }
        "get_vendor" => {
            let req: provider::GetVendorArgs = serde_json::from_value(args)?;
            let result = provider::get_vendor(state, &req)?;
            Ok(serde_json::to_value(ApiResponse::success(result))?)
        }
        "get_type_capability" => {
            let req: provider::TypeCapabilityArgs = serde_json::from_value(args)?;
            let result = provider::get_type_capability(state, &req)?;
            Ok(serde_json::to_value(ApiResponse::success(result))?)
        }
        "validate_source_count" => {
            let req: provider::ValidateSourceCountArgs = serde_json::from_value(args)?;
            provider::validate_source_count(state, &req)?;
            Ok(serde_json::to_value(ApiResponse::success(()))?)
        }

        // 不支持的命令
        _ => Err(ApiError::UnknownCommand(command.to_string())),
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(format!("JSON 解析错误: {err}"))
    }
}
