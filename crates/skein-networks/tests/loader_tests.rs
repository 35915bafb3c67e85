use std::fs;

use skein_networks::{FileLoader, NetworkError, NetworkMagic, NetworkRegistry};
use tempfile::tempdir;

const STAGENET_TOML: &str = r#"
[[networks]]
name = "stagenet"
aliases = ["staging"]
pubkeyhash = 0x19
privatekey = 0x99
scripthash = 0x1a
xpubkey = 0x0295b43f
xprivkey = 0x0295b005
network_magic = "d0b4bef9"
port = 54350
dns_seeds = ["stage-seed.skeincurrency.com"]

[[networks]]
name = "simnet"
pubkeyhash = 0x3e
privatekey = 0x64
scripthash = 0x7b
"#;

/// Load a TOML definition file and register every record in file order
#[test]
fn test_load_toml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("networks.toml");
    fs::write(&path, STAGENET_TOML).unwrap();

    let mut registry = NetworkRegistry::new();
    let added = registry.load_file(&path).unwrap();
    assert_eq!(added.len(), 2);
    assert_eq!(added[0].name(), "stagenet");
    assert_eq!(added[1].name(), "simnet");
    assert_eq!(registry.networks().len(), 4);

    let stagenet = registry.get("staging").unwrap();
    assert_eq!(stagenet.port(), Some(54350));
    assert_eq!(
        stagenet.network_magic(),
        Some(NetworkMagic::from_u32(0xd0b4bef9))
    );
    assert_eq!(registry.get(54350u16).unwrap().name(), "stagenet");
    assert_eq!(registry.get(0x3eu8).unwrap().name(), "simnet");

    // Optional attributes simply stay unset.
    let simnet = registry.get("simnet").unwrap();
    assert_eq!(simnet.port(), None);
    assert_eq!(simnet.network_magic(), None);
    assert_eq!(simnet.dns_seeds(), None);
}

/// JSON definition files load through the same path
#[test]
fn test_load_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("networks.json");
    fs::write(
        &path,
        r#"{
            "networks": [
                {
                    "name": "stagenet",
                    "pubkeyhash": 25,
                    "privatekey": 153,
                    "scripthash": 26,
                    "network_magic": "d0b4bef9",
                    "port": 54350
                }
            ]
        }"#,
    )
    .unwrap();

    let mut registry = NetworkRegistry::new();
    let added = registry.load_file(&path).unwrap();
    assert_eq!(added.len(), 1);
    assert_eq!(registry.get("stagenet").unwrap().pubkeyhash(), 0x19);
}

/// Missing files and unknown extensions fail with the right variants
#[test]
fn test_load_errors() {
    let dir = tempdir().unwrap();

    let missing = dir.path().join("nope.toml");
    let err = FileLoader::load_auto(&missing).unwrap_err();
    assert!(matches!(err, NetworkError::FileNotFound(_)));

    let yaml = dir.path().join("networks.yaml");
    fs::write(&yaml, "networks: []").unwrap();
    let err = FileLoader::load_auto(&yaml).unwrap_err();
    assert!(matches!(err, NetworkError::InvalidFormat(_)));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "[[networks]\nname = ").unwrap();
    let err = FileLoader::load_auto(&broken).unwrap_err();
    assert!(matches!(err, NetworkError::Toml(_)));
}

/// Record validation rejects empty names, port 0, and duplicate names
#[test]
fn test_record_validation() {
    let empty_name = r#"
[[networks]]
name = ""
pubkeyhash = 0x19
privatekey = 0x99
scripthash = 0x1a
"#;
    assert!(matches!(
        FileLoader::parse_toml(empty_name).unwrap_err(),
        NetworkError::Validation(_)
    ));

    let zero_port = r#"
[[networks]]
name = "stagenet"
pubkeyhash = 0x19
privatekey = 0x99
scripthash = 0x1a
port = 0
"#;
    assert!(matches!(
        FileLoader::parse_toml(zero_port).unwrap_err(),
        NetworkError::Validation(_)
    ));

    let duplicate = r#"
[[networks]]
name = "stagenet"
pubkeyhash = 0x19
privatekey = 0x99
scripthash = 0x1a

[[networks]]
name = "stagenet"
pubkeyhash = 0x20
privatekey = 0x9a
scripthash = 0x1b
"#;
    assert!(matches!(
        FileLoader::parse_toml(duplicate).unwrap_err(),
        NetworkError::Validation(_)
    ));
}

/// A validation failure registers nothing
#[test]
fn test_invalid_file_registers_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("networks.toml");
    fs::write(
        &path,
        r#"
[[networks]]
name = "stagenet"
pubkeyhash = 0x19
privatekey = 0x99
scripthash = 0x1a

[[networks]]
name = ""
pubkeyhash = 0x20
privatekey = 0x9a
scripthash = 0x1b
"#,
    )
    .unwrap();

    let mut registry = NetworkRegistry::new();
    assert!(registry.load_file(&path).is_err());
    assert_eq!(registry.networks().len(), 2);
    assert!(registry.get("stagenet").is_none());
}
