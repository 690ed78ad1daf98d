//! 内置定义的注册表行为

use dnet_registry_core::{
    help_text, CdnRegistry, CdnVendorDefinition, DefinitionFile, DnsRegistry, RegistryError,
    VendorKey,
};

fn keys(keys: Vec<&VendorKey>) -> Vec<&str> {
    keys.into_iter().map(VendorKey::as_str).collect()
}

#[test]
fn test_builtin_cdn_vendors() {
    let registry = CdnRegistry::builtin().unwrap();
    assert_eq!(keys(registry.list_vendors()), vec!["aliyun", "tencent"]);
}

#[test]
fn test_baiducloud_misaligned_tooltips_rejected() {
    let registry = CdnRegistry::builtin().unwrap();

    assert!(matches!(
        registry.get_vendor("baiducloud"),
        Err(RegistryError::UnknownVendor(_))
    ));
    match registry.rejected() {
        [RegistryError::Schema { vendor, reason }] => {
            assert_eq!(vendor, "baiducloud");
            assert!(reason.contains("protocolTipHtml=3"));
        }
        other => panic!("unexpected rejections: {other:?}"),
    }
}

#[test]
fn test_every_type_resolves_to_its_own_limit_and_tip() {
    let registry = CdnRegistry::builtin().unwrap();

    for vendor in registry.vendors() {
        let names = vendor.type_select();
        let limits = vendor.max_sources();
        let tips = vendor.protocol_tips();
        assert_eq!(names.len(), limits.len());
        assert_eq!(names.len(), tips.len());

        for (i, name) in names.iter().enumerate() {
            assert!(limits[i] >= 1);

            let capability = registry
                .get_type_capability(vendor.key.as_str(), name)
                .unwrap();
            assert_eq!(capability.index, i);
            assert_eq!(capability.max_sources, limits[i]);
            assert_eq!(capability.protocol_tip, tips[i]);

            let key = vendor.key.as_str();
            let limit = i64::from(limits[i]);
            assert!(registry.validate_source_count(key, name, limit).is_ok());
            assert_eq!(
                registry.validate_source_count(key, name, limit + 1),
                Err(RegistryError::SourceLimitExceeded { limit: limits[i] })
            );
        }
    }
}

#[test]
fn test_aliyun_scenario() {
    let registry = CdnRegistry::builtin().unwrap();
    let aliyun = registry.get_vendor("aliyun").unwrap();
    assert_eq!(aliyun.type_select(), vec!["ESA", "CDN", "DCDN"]);
    assert_eq!(aliyun.max_sources(), vec![1, 20, 5]);

    let capability = registry.get_type_capability("aliyun", "DCDN").unwrap();
    assert_eq!((capability.index, capability.max_sources), (2, 5));
    assert_eq!(registry.validate_source_count("aliyun", "DCDN", 5), Ok(()));
    assert_eq!(
        registry.validate_source_count("aliyun", "DCDN", 6),
        Err(RegistryError::SourceLimitExceeded { limit: 5 })
    );
    assert!(matches!(
        registry.get_type_capability("aliyun", "NOPE"),
        Err(RegistryError::UnknownType { .. })
    ));
}

#[test]
fn test_tencent_scenario() {
    let registry = CdnRegistry::builtin().unwrap();
    let tencent = registry.get_vendor("tencent").unwrap();
    assert_eq!(tencent.type_select(), vec!["EdgeOne", "CDN"]);
    assert_eq!(tencent.max_sources(), vec![1, 5]);

    let capability = registry.get_type_capability("tencent", "EdgeOne").unwrap();
    assert_eq!((capability.index, capability.max_sources), (0, 1));
}

#[test]
fn test_type_help_fragments_align_with_types() {
    let registry = CdnRegistry::builtin().unwrap();
    for vendor in registry.vendors() {
        let names = vendor.type_select();
        let links = help_text::parse_composite(&vendor.type_help_html(), names.len()).unwrap();
        for (link, name) in links.iter().zip(&names) {
            assert_eq!(link.label, *name);
        }
    }
}

#[test]
fn test_builtin_dns_vendors_in_authored_order() {
    let registry = DnsRegistry::builtin().unwrap();
    assert!(registry.rejected().is_empty());

    registry.get_vendor("tencent").unwrap();
    registry.get_vendor("alidns").unwrap();
    assert_eq!(
        keys(registry.list_vendors()),
        vec!["alidns", "baiducloud", "tencent"]
    );
    assert!(matches!(
        registry.get_vendor("nonexistent-key"),
        Err(RegistryError::UnknownVendor(_))
    ));
}

#[test]
fn test_load_time_validate_builtin_reports_only_baiducloud() {
    let file =
        DefinitionFile::<CdnVendorDefinition>::from_json(dnet_registry_core::builtin::CDN_DEFINITIONS)
            .unwrap();
    let errors = CdnRegistry::load_time_validate(&file.vendors).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], RegistryError::Schema { vendor, .. } if vendor == "baiducloud"));
}

#[test]
fn test_baiducloud_definition_carries_only_placeholder_data() {
    let file =
        DefinitionFile::<CdnVendorDefinition>::from_json(dnet_registry_core::builtin::CDN_DEFINITIONS)
            .unwrap();
    let baidu = file
        .vendors
        .iter()
        .find(|def| def.key == "baiducloud")
        .unwrap();

    assert_eq!(baidu.type_select, vec!["CDN", "DRCDN"]);
    assert!(baidu.max_sources.iter().all(|&limit| limit == 1));
    assert_eq!(baidu.protocol_tip_html.len(), 3);
    assert!(baidu.protocol_tip_html.iter().all(String::is_empty));
    assert!(baidu.validate().is_err());
}

#[test]
fn test_concurrent_readers() {
    let registry = std::sync::Arc::new(CdnRegistry::builtin().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .get_type_capability("aliyun", "CDN")
                    .map(|c| c.max_sources)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(20));
    }
}
