//! Provider 元数据处理模块

use dnet_registry_core::{ProviderMetadata, ServiceFamily, TypeCapability, VendorKey};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

// ============ 请求参数类型 ============

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyArgs {
    pub family: ServiceFamily,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVendorArgs {
    pub family: ServiceFamily,
    pub key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCapabilityArgs {
    pub key: String,
    pub type_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSourceCountArgs {
    pub key: String,
    pub type_name: String,
    /// 保留原始 JSON，非整数由校验逻辑报告
    pub count: Value,
}

// ============ 处理函数 ============

pub fn list_vendors(state: &AppState, args: &FamilyArgs) -> Vec<VendorKey> {
    state.providers.list_vendors(args.family)
}

pub fn list_providers(state: &AppState, args: &FamilyArgs) -> Vec<ProviderMetadata> {
    state.providers.list_providers(args.family)
}

pub fn get_vendor(state: &AppState, args: &GetVendorArgs) -> Result<ProviderMetadata, ApiError> {
    Ok(state.providers.get_vendor(args.family, &args.key)?)
}

pub fn get_type_capability(
    state: &AppState,
    args: &TypeCapabilityArgs,
) -> Result<TypeCapability, ApiError> {
    Ok(state
        .providers
        .get_type_capability(&args.key, &args.type_name)?)
}

pub fn validate_source_count(
    state: &AppState,
    args: &ValidateSourceCountArgs,
) -> Result<(), ApiError> {
    // 先解析服务商和类型，再检查数量
    let capability = state
        .providers
        .get_type_capability(&args.key, &args.type_name)?;

    let count = match (args.count.as_i64(), args.count.as_u64()) {
        (Some(count), _) => count,
        // 超出 i64 的非负整数必然超过上限
        (None, Some(_)) => {
            return Err(ApiError::SourceLimitExceeded {
                limit: capability.max_sources,
            });
        }
        (None, None) => {
            return Err(ApiError::BadRequest(format!(
                "源站数量必须为非负整数: {}",
                args.count
            )));
        }
    };

    state
        .providers
        .validate_source_count(&args.key, &args.type_name, count)?;
    Ok(())
}
