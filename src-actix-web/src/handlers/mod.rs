//! 请求处理模块

pub mod invoke;
pub mod provider;
