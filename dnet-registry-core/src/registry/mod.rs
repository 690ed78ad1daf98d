//! 服务商注册表模块

mod cdn;
mod dns;
mod table;

pub use cdn::CdnRegistry;
pub use dns::DnsRegistry;
pub use table::Keyed;
