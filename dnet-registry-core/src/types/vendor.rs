//! 服务商运行时模型（已通过加载时校验）

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::help_text;

/// 服务商标识（如 `aliyun`），在各自注册表内唯一
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorKey(String);

impl VendorKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VendorKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VendorKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// 凭证输入项描述（ID + Secret 两段式 API 凭证）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialFieldSpec {
    /// ID 输入框标签
    pub id_label: String,
    /// Secret 输入框标签
    pub secret_label: String,
    /// 获取凭证的帮助链接（受信任的静态 HTML，原样输出）
    pub id_help_html: String,
}

/// 帮助链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpLink {
    pub label: String,
    pub url: String,
}

impl HelpLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// 渲染为新窗口打开的 `<a>` 片段
    pub fn to_anchor(&self) -> String {
        format!("<a target='_blank' href='{}'>{}</a>", self.url, self.label)
    }
}

/// CDN 记录类型及其限制
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordType {
    pub name: String,
    /// 单条记录允许的源站数量上限（>= 1）
    pub max_sources: u32,
    /// 协议/端口限制提示，可能为空
    pub protocol_tip: String,
    /// 该类型控制台链接
    pub help: HelpLink,
}

/// 单个记录类型的查询结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCapability {
    /// 在 `typeSelect` 中的位置
    pub index: usize,
    pub max_sources: u32,
    pub protocol_tip: String,
}

/// CDN 服务商
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnVendor {
    pub key: VendorKey,
    pub name: String,
    pub credential: CredentialFieldSpec,
    /// 按定义顺序排列，下游 UI 依赖该顺序
    pub record_types: Vec<RecordType>,
}

impl CdnVendor {
    /// 按类型名精确匹配（区分大小写）
    pub fn find_type(&self, type_name: &str) -> Option<(usize, &RecordType)> {
        self.record_types
            .iter()
            .enumerate()
            .find(|(_, record_type)| record_type.name == type_name)
    }

    pub fn type_select(&self) -> Vec<&str> {
        self.record_types.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn max_sources(&self) -> Vec<u32> {
        self.record_types.iter().map(|t| t.max_sources).collect()
    }

    pub fn protocol_tips(&self) -> Vec<&str> {
        self.record_types
            .iter()
            .map(|t| t.protocol_tip.as_str())
            .collect()
    }

    /// 在读取时拼接各类型的控制台链接
    pub fn type_help_html(&self) -> String {
        let links: Vec<HelpLink> = self.record_types.iter().map(|t| t.help.clone()).collect();
        help_text::compose(&links)
    }
}

/// DNS 服务商（无记录类型概念）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsVendor {
    pub key: VendorKey,
    pub name: String,
    pub credential: CredentialFieldSpec,
}
