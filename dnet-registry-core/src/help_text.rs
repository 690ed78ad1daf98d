//! 帮助文本拼接工具
//!
//! 将多个 (label, url) 链接拼接为单个展示字符串，或将旧格式的拼接字符串
//! 按类型数量拆回片段。

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RegistryError, RegistryResult};
use crate::types::HelpLink;

/// 片段分隔符
pub const SEPARATOR: &str = "、";

#[allow(clippy::unwrap_used)]
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<a\s[^>]*?href=['"]([^'"]+)['"][^>]*>(.*?)</a>$"#).unwrap()
});

/// 拼接链接，顺序与输入一致
pub fn compose(links: &[HelpLink]) -> String {
    links
        .iter()
        .map(HelpLink::to_anchor)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// 按分隔符拆分，片段数必须等于 `expected`
///
/// 空字符串视为 0 个片段。
pub fn split(composite: &str, expected: usize) -> RegistryResult<Vec<&str>> {
    let fragments: Vec<&str> = if composite.trim().is_empty() {
        Vec::new()
    } else {
        composite.split(SEPARATOR).map(str::trim).collect()
    };

    if fragments.len() != expected {
        return Err(RegistryError::MalformedCompositeHelp {
            expected,
            found: fragments.len(),
        });
    }
    Ok(fragments)
}

/// 解析单个 `<a>` 片段
pub fn parse_fragment(fragment: &str) -> Option<HelpLink> {
    let caps = ANCHOR_RE.captures(fragment.trim())?;
    let url = caps.get(1)?.as_str();
    let label = caps.get(2)?.as_str().trim();
    Some(HelpLink::new(label, url))
}

/// 拆分并解析旧格式的 `typeHelpHtml`
pub fn parse_composite(composite: &str, expected: usize) -> RegistryResult<Vec<HelpLink>> {
    let fragments = split(composite, expected)?;
    let links: Vec<HelpLink> = fragments.iter().filter_map(|f| parse_fragment(f)).collect();
    if links.len() != expected {
        return Err(RegistryError::MalformedCompositeHelp {
            expected,
            found: links.len(),
        });
    }
    Ok(links)
}
