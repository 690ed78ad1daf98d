//! 有序服务商表
//!
//! 保留定义顺序，同时提供按 key 的哈希查找。

use std::collections::HashMap;

use crate::error::{RegistryError, RegistryResult};
use crate::types::{CdnVendor, DnsVendor, VendorKey};

/// 以 [`VendorKey`] 为主键的条目
pub trait Keyed {
    fn key(&self) -> &VendorKey;
}

impl Keyed for CdnVendor {
    fn key(&self) -> &VendorKey {
        &self.key
    }
}

impl Keyed for DnsVendor {
    fn key(&self) -> &VendorKey {
        &self.key
    }
}

#[derive(Debug, Clone)]
pub(crate) struct VendorTable<T> {
    entries: Vec<T>,
    index: HashMap<VendorKey, usize>,
}

impl<T: Keyed> VendorTable<T> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// 重复的 key 返回 Schema 错误，先定义者保留
    fn insert(&mut self, entry: T) -> RegistryResult<()> {
        let key = entry.key().clone();
        if self.index.contains_key(&key) {
            return Err(RegistryError::schema(key.as_str(), "duplicate vendor key"));
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub(crate) fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub(crate) fn keys(&self) -> Vec<&VendorKey> {
        self.entries.iter().map(Keyed::key).collect()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 逐个校验定义，返回通过的条目表和被排除条目的错误
pub(crate) fn build<D, T>(
    definitions: &[D],
    validate: impl Fn(&D) -> RegistryResult<T>,
) -> (VendorTable<T>, Vec<RegistryError>)
where
    T: Keyed,
{
    let mut table = VendorTable::new();
    let mut rejected = Vec::new();

    for definition in definitions {
        let result = validate(definition).and_then(|entry| table.insert(entry));
        if let Err(e) = result {
            log::warn!("Vendor excluded from registry: {e}");
            rejected.push(e);
        }
    }

    (table, rejected)
}
