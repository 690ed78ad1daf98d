//! 服务商定义文档（作者编写的原始形态）
//!
//! CDN 定义沿用控制台的并行数组写法（`typeSelect` / `maxSources` / `protocolTipHtml`），
//! 加载时校验对齐关系后转换为 [`CdnVendor`] 的单一有序列表。

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, RegistryResult};
use crate::help_text;
use crate::types::{CdnVendor, CredentialFieldSpec, DnsVendor, HelpLink, RecordType, VendorKey};

/// 定义文档，`vendors` 为数组以保留定义顺序
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionFile<T> {
    pub vendors: Vec<T>,
}

impl<T: serde::de::DeserializeOwned> DefinitionFile<T> {
    pub fn from_json(content: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// CDN 服务商定义
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnVendorDefinition {
    pub key: String,
    pub name: String,
    pub id_label: String,
    pub secret_label: String,
    pub id_help_html: String,
    #[serde(default)]
    pub type_select: Vec<String>,
    /// 有符号整数，使 0 / 负数成为单个服务商的错误而非整份文档解析失败
    #[serde(default)]
    pub max_sources: Vec<i64>,
    #[serde(default)]
    pub protocol_tip_html: Vec<String>,
    /// 每个类型一个链接（推荐写法）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_help: Option<Vec<HelpLink>>,
    /// 旧写法：预先拼接好的链接字符串
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_help_html: Option<String>,
}

/// DNS 服务商定义
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsVendorDefinition {
    pub key: String,
    pub name: String,
    pub id_label: String,
    pub secret_label: String,
    pub id_help_html: String,
}

/// 校验公共字段并构造凭证描述
fn validate_identity(
    key: &str,
    name: &str,
    id_label: &str,
    secret_label: &str,
    id_help_html: &str,
) -> RegistryResult<CredentialFieldSpec> {
    if key.trim().is_empty() {
        return Err(RegistryError::schema(key, "key is empty"));
    }
    for (field, value) in [
        ("name", name),
        ("idLabel", id_label),
        ("secretLabel", secret_label),
        ("idHelpHtml", id_help_html),
    ] {
        if value.trim().is_empty() {
            return Err(RegistryError::schema(key, format!("{field} is empty")));
        }
    }

    Ok(CredentialFieldSpec {
        id_label: id_label.to_string(),
        secret_label: secret_label.to_string(),
        id_help_html: id_help_html.to_string(),
    })
}

fn is_absolute_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

impl CdnVendorDefinition {
    /// 加载时校验，通过后转换为运行时模型
    pub fn validate(&self) -> RegistryResult<CdnVendor> {
        let key = self.key.as_str();
        let credential = validate_identity(
            key,
            &self.name,
            &self.id_label,
            &self.secret_label,
            &self.id_help_html,
        )?;

        let count = self.type_select.len();
        if count == 0 {
            return Err(RegistryError::schema(key, "typeSelect is empty"));
        }
        if self.max_sources.len() != count || self.protocol_tip_html.len() != count {
            return Err(RegistryError::schema(
                key,
                format!(
                    "list lengths differ: typeSelect={count}, maxSources={}, protocolTipHtml={}",
                    self.max_sources.len(),
                    self.protocol_tip_html.len()
                ),
            ));
        }

        for (i, name) in self.type_select.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(RegistryError::schema(key, format!("typeSelect[{i}] is empty")));
            }
            if self.type_select[..i].contains(name) {
                return Err(RegistryError::schema(
                    key,
                    format!("duplicate type '{name}'"),
                ));
            }
        }

        let mut limits = Vec::with_capacity(count);
        for (i, &limit) in self.max_sources.iter().enumerate() {
            match u32::try_from(limit) {
                Ok(value) if value >= 1 => limits.push(value),
                _ => {
                    return Err(RegistryError::schema(
                        key,
                        format!("maxSources[{i}] must be a positive integer, got {limit}"),
                    ));
                }
            }
        }

        let links = self.help_links(count)?;

        let record_types = self
            .type_select
            .iter()
            .zip(limits)
            .zip(&self.protocol_tip_html)
            .zip(links)
            .map(|(((name, max_sources), tip), help)| RecordType {
                name: name.clone(),
                max_sources,
                protocol_tip: tip.clone(),
                help,
            })
            .collect();

        Ok(CdnVendor {
            key: VendorKey::new(key),
            name: self.name.clone(),
            credential,
            record_types,
        })
    }

    /// 获取每个类型的帮助链接，`typeHelp` 与 `typeHelpHtml` 二选一
    fn help_links(&self, count: usize) -> RegistryResult<Vec<HelpLink>> {
        let key = self.key.as_str();
        let links = match (&self.type_help, &self.type_help_html) {
            (Some(_), Some(_)) => {
                return Err(RegistryError::schema(
                    key,
                    "typeHelp and typeHelpHtml are mutually exclusive",
                ));
            }
            (Some(links), None) => {
                if links.len() != count {
                    return Err(RegistryError::schema(
                        key,
                        format!("typeHelp has {} links for {count} types", links.len()),
                    ));
                }
                links.clone()
            }
            (None, Some(composite)) => help_text::parse_composite(composite, count)
                .map_err(|e| RegistryError::schema(key, format!("typeHelpHtml: {e}")))?,
            (None, None) => {
                return Err(RegistryError::schema(key, "typeHelp is missing"));
            }
        };

        if let Some(link) = links.iter().find(|link| !is_absolute_url(&link.url)) {
            return Err(RegistryError::schema(
                key,
                format!("help link '{}' is not an absolute URL", link.url),
            ));
        }
        Ok(links)
    }
}

impl DnsVendorDefinition {
    /// 加载时校验，通过后转换为运行时模型
    pub fn validate(&self) -> RegistryResult<DnsVendor> {
        let credential = validate_identity(
            &self.key,
            &self.name,
            &self.id_label,
            &self.secret_label,
            &self.id_help_html,
        )?;

        Ok(DnsVendor {
            key: VendorKey::new(self.key.as_str()),
            name: self.name.clone(),
            credential,
        })
    }
}
