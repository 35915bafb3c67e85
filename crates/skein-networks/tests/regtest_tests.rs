use skein_networks::{NetworkAttribute, NetworkMagic, NetworkRegistry, REGTEST_PARAMS, TESTNET_PARAMS};

/// The testnet boots in standard mode with the standard table values
#[test]
fn test_standard_mode_defaults() {
    let registry = NetworkRegistry::new();
    let testnet = registry.testnet();

    assert!(!registry.regtest_enabled());
    assert_eq!(testnet.port(), Some(44350));
    assert_eq!(
        testnet.network_magic(),
        Some(NetworkMagic::from_u32(0x4e4db231))
    );
    assert_eq!(
        testnet.dns_seeds(),
        Some(vec!["testnet-seed.skeincurrency.com".to_string()])
    );
}

/// enable/disable switch the three derived attributes and nothing else
#[test]
fn test_mode_switching() {
    let registry = NetworkRegistry::new();
    let testnet = registry.testnet().clone();

    registry.enable_regtest();
    assert!(registry.regtest_enabled());
    assert_eq!(testnet.port(), Some(19994));
    assert_eq!(
        testnet.network_magic(),
        Some(NetworkMagic::from_u32(0xfcc1b7dc))
    );
    assert_eq!(testnet.dns_seeds(), Some(vec![]));

    // Static attributes ignore the flag.
    assert_eq!(testnet.pubkeyhash(), 0x3f);
    assert_eq!(testnet.privatekey(), 0xbf);
    assert_eq!(testnet.scripthash(), 0x40);
    assert_eq!(testnet.xpubkey(), Some(0x043587cf));

    registry.disable_regtest();
    assert!(!registry.regtest_enabled());
    assert_eq!(testnet.port(), Some(44350));
    assert_eq!(
        testnet.dns_seeds(),
        Some(vec!["testnet-seed.skeincurrency.com".to_string()])
    );
}

/// Both transitions are idempotent self-loops
#[test]
fn test_idempotent_flips() {
    let registry = NetworkRegistry::new();

    registry.enable_regtest();
    registry.enable_regtest();
    assert!(registry.regtest_enabled());

    registry.disable_regtest();
    registry.disable_regtest();
    assert!(!registry.regtest_enabled());
}

/// Looking up "regtest" or "local" enables regtest mode as a side effect
#[test]
fn test_side_effecting_lookup() {
    let registry = NetworkRegistry::new();

    let found = registry.get("regtest").unwrap();
    assert_eq!(found.name(), "testnet");
    assert!(registry.regtest_enabled());

    registry.disable_regtest();
    registry.get("local").unwrap();
    assert!(registry.regtest_enabled());
}

/// Other testnet keys do not flip the mode, and resolve never does
#[test]
fn test_lookup_without_side_effect() {
    let registry = NetworkRegistry::new();

    registry.get("testnet").unwrap();
    assert!(!registry.regtest_enabled());

    registry.get("devnet").unwrap();
    assert!(!registry.regtest_enabled());

    // The pure variant leaves the mode alone even for the special aliases.
    registry.resolve("regtest").unwrap();
    registry.resolve("local").unwrap();
    assert!(!registry.regtest_enabled());
}

/// Both mode ports are indexed to testnet regardless of the current mode
#[test]
fn test_mode_ports_indexed() {
    let registry = NetworkRegistry::new();

    assert_eq!(registry.get(44350u16).unwrap().name(), "testnet");
    assert_eq!(registry.get(19994u16).unwrap().name(), "testnet");

    registry.enable_regtest();
    assert_eq!(registry.get(44350u16).unwrap().name(), "testnet");
    assert_eq!(registry.get(19994u16).unwrap().name(), "testnet");
}

/// Attribute scans read through the active mode table
#[test]
fn test_mode_aware_attribute_scan() {
    let registry = NetworkRegistry::new();

    assert!(registry
        .get_matching(44350u16, &[NetworkAttribute::Port])
        .is_some());
    assert!(registry
        .get_matching(19994u16, &[NetworkAttribute::Port])
        .is_none());

    registry.enable_regtest();

    assert!(registry
        .get_matching(44350u16, &[NetworkAttribute::Port])
        .is_none());
    assert_eq!(
        registry
            .get_matching(19994u16, &[NetworkAttribute::Port])
            .unwrap()
            .name(),
        "testnet"
    );
}

/// The published tables carry the exact protocol constants
#[test]
fn test_published_tables() {
    assert_eq!(TESTNET_PARAMS.port, 44350);
    assert_eq!(TESTNET_PARAMS.network_magic, NetworkMagic::from_u32(0x4e4db231));
    assert_eq!(
        TESTNET_PARAMS.dns_seeds,
        &["testnet-seed.skeincurrency.com"][..]
    );

    assert_eq!(REGTEST_PARAMS.port, 19994);
    assert_eq!(REGTEST_PARAMS.network_magic, NetworkMagic::from_u32(0xfcc1b7dc));
    assert!(REGTEST_PARAMS.dns_seeds.is_empty());
}
