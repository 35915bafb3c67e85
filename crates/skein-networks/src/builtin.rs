//! Built-in network definitions.
//!
//! Two networks ship with the library: the production network ("livenet",
//! also answering to "mainnet") and the test network. The testnet spec
//! deliberately leaves port, magic, and seeds unset; those three live in the
//! regtest overlay tables (see [`crate::regtest`]) and are computed per read.

use crate::magic::NetworkMagic;
use crate::profile::NetworkSpec;

/// Production network parameters.
pub fn livenet_spec() -> NetworkSpec {
    NetworkSpec {
        name: "livenet".to_string(),
        aliases: vec!["mainnet".to_string()],
        pubkeyhash: 0x00,
        privatekey: 0x80,
        scripthash: 0x01,
        xpubkey: Some(0x0488b21e),
        xprivkey: Some(0x0488ade4),
        xpubkey256bit: None,
        xprivkey256bit: None,
        network_magic: Some(NetworkMagic::from_u32(0x58f9e60a)),
        port: Some(34350),
        dns_seeds: Some(vec!["dnsseed.skeincurrency.com".to_string()]),
    }
}

/// Test network parameters, minus the three mode-dependent attributes.
pub fn testnet_spec() -> NetworkSpec {
    NetworkSpec {
        name: "testnet".to_string(),
        aliases: vec![
            "regtest".to_string(),
            "devnet".to_string(),
            "evonet".to_string(),
            "local".to_string(),
        ],
        pubkeyhash: 0x3f,
        privatekey: 0xbf,
        scripthash: 0x40,
        xpubkey: Some(0x043587cf),
        xprivkey: Some(0x04358394),
        xpubkey256bit: None,
        xprivkey256bit: None,
        network_magic: None,
        port: None,
        dns_seeds: None,
    }
}
