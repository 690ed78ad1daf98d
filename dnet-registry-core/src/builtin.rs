//! 内置服务商定义
//!
//! 编译期嵌入 `definitions/` 下的 JSON 文档，可由服务配置中的文件覆盖。

/// 内置 CDN 服务商定义
pub const CDN_DEFINITIONS: &str = include_str!("../definitions/cdn.json");

/// 内置 DNS 服务商定义
pub const DNS_DEFINITIONS: &str = include_str!("../definitions/dns.json");
