//! Network profile values and lookup keys.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::magic::NetworkMagic;
use crate::regtest::RegtestOverlay;

/// Attribute values for one network, as supplied to
/// [`NetworkRegistry::add`](crate::NetworkRegistry::add) or read from a
/// definition file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Unique name of the network
    pub name: String,

    /// Alternate names the network answers to
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Public key hash address-version byte
    pub pubkeyhash: u8,

    /// Private key (WIF) version byte
    pub privatekey: u8,

    /// Script hash address-version byte
    pub scripthash: u8,

    /// BIP32 extended public key version prefix
    #[serde(default)]
    pub xpubkey: Option<u32>,

    /// BIP32 extended private key version prefix
    #[serde(default)]
    pub xprivkey: Option<u32>,

    /// DIP14 256-bit extended public key version prefix
    #[serde(default)]
    pub xpubkey256bit: Option<u32>,

    /// DIP14 256-bit extended private key version prefix
    #[serde(default)]
    pub xprivkey256bit: Option<u32>,

    /// Peer-protocol message tag
    #[serde(default)]
    pub network_magic: Option<NetworkMagic>,

    /// Default peer port
    #[serde(default)]
    pub port: Option<u16>,

    /// Seed hostnames for initial peer discovery
    #[serde(default)]
    pub dns_seeds: Option<Vec<String>>,
}

/// One network's parameters.
///
/// Profiles are owned by the registry and handed out as shared `Arc`
/// references; their stored attributes never change after registration.
/// For the built-in testnet, `port`, `network_magic`, and `dns_seeds` are
/// not stored at all but computed on every read from the regtest overlay,
/// so always go through the accessor methods for those three.
#[derive(Debug)]
pub struct NetworkProfile {
    name: String,
    aliases: Vec<String>,
    pubkeyhash: u8,
    privatekey: u8,
    scripthash: u8,
    xpubkey: Option<u32>,
    xprivkey: Option<u32>,
    xpubkey256bit: Option<u32>,
    xprivkey256bit: Option<u32>,
    network_magic: Option<NetworkMagic>,
    port: Option<u16>,
    dns_seeds: Option<Vec<String>>,
    regtest: Option<RegtestOverlay>,
}

impl NetworkProfile {
    pub(crate) fn from_spec(spec: NetworkSpec) -> Self {
        NetworkProfile {
            name: spec.name,
            aliases: spec.aliases,
            pubkeyhash: spec.pubkeyhash,
            privatekey: spec.privatekey,
            scripthash: spec.scripthash,
            xpubkey: spec.xpubkey,
            xprivkey: spec.xprivkey,
            xpubkey256bit: spec.xpubkey256bit,
            xprivkey256bit: spec.xprivkey256bit,
            network_magic: spec.network_magic,
            port: spec.port,
            dns_seeds: spec.dns_seeds,
            regtest: None,
        }
    }

    pub(crate) fn with_overlay(spec: NetworkSpec, overlay: RegtestOverlay) -> Self {
        let mut profile = Self::from_spec(spec);
        profile.regtest = Some(overlay);
        profile
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn pubkeyhash(&self) -> u8 {
        self.pubkeyhash
    }

    pub fn privatekey(&self) -> u8 {
        self.privatekey
    }

    pub fn scripthash(&self) -> u8 {
        self.scripthash
    }

    pub fn xpubkey(&self) -> Option<u32> {
        self.xpubkey
    }

    pub fn xprivkey(&self) -> Option<u32> {
        self.xprivkey
    }

    pub fn xpubkey256bit(&self) -> Option<u32> {
        self.xpubkey256bit
    }

    pub fn xprivkey256bit(&self) -> Option<u32> {
        self.xprivkey256bit
    }

    /// Default peer port, mode-dependent for the built-in testnet.
    pub fn port(&self) -> Option<u16> {
        match &self.regtest {
            Some(overlay) => Some(overlay.params().port),
            None => self.port,
        }
    }

    /// Peer-protocol magic, mode-dependent for the built-in testnet.
    pub fn network_magic(&self) -> Option<NetworkMagic> {
        match &self.regtest {
            Some(overlay) => Some(overlay.params().network_magic),
            None => self.network_magic,
        }
    }

    /// Seed hostnames, mode-dependent for the built-in testnet.
    pub fn dns_seeds(&self) -> Option<Vec<String>> {
        match &self.regtest {
            Some(overlay) => Some(
                overlay
                    .params()
                    .dns_seeds
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            None => self.dns_seeds.clone(),
        }
    }

    pub(crate) fn regtest_overlay(&self) -> Option<&RegtestOverlay> {
        self.regtest.as_ref()
    }

    /// True when `key` equals the current value of the named attribute.
    ///
    /// Reads go through the accessors, so mode-dependent attributes match
    /// against the active regtest table.
    pub fn attribute_matches(&self, attribute: NetworkAttribute, key: &NetworkKey) -> bool {
        match (attribute, key) {
            (NetworkAttribute::Name, NetworkKey::Str(s)) => self.name == *s,
            (NetworkAttribute::Aliases, NetworkKey::Str(s)) => self.aliases.iter().any(|a| a == s),
            (NetworkAttribute::PubkeyHash, NetworkKey::Byte(b)) => self.pubkeyhash == *b,
            (NetworkAttribute::PrivateKey, NetworkKey::Byte(b)) => self.privatekey == *b,
            (NetworkAttribute::ScriptHash, NetworkKey::Byte(b)) => self.scripthash == *b,
            (NetworkAttribute::Xpubkey, NetworkKey::Version(v)) => self.xpubkey == Some(*v),
            (NetworkAttribute::Xprivkey, NetworkKey::Version(v)) => self.xprivkey == Some(*v),
            (NetworkAttribute::Xpubkey256bit, NetworkKey::Version(v)) => {
                self.xpubkey256bit == Some(*v)
            }
            (NetworkAttribute::Xprivkey256bit, NetworkKey::Version(v)) => {
                self.xprivkey256bit == Some(*v)
            }
            (NetworkAttribute::NetworkMagic, NetworkKey::Magic(m)) => {
                self.network_magic() == Some(*m)
            }
            (NetworkAttribute::Port, NetworkKey::Port(p)) => self.port() == Some(*p),
            (NetworkAttribute::DnsSeeds, NetworkKey::Str(s)) => self
                .dns_seeds()
                .map(|seeds| seeds.iter().any(|seed| seed == s))
                .unwrap_or(false),
            _ => false,
        }
    }
}

impl fmt::Display for NetworkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Named attribute of a [`NetworkProfile`], used by
/// [`NetworkRegistry::get_matching`](crate::NetworkRegistry::get_matching)
/// to restrict which values a key is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkAttribute {
    Name,
    Aliases,
    PubkeyHash,
    PrivateKey,
    ScriptHash,
    Xpubkey,
    Xprivkey,
    Xpubkey256bit,
    Xprivkey256bit,
    NetworkMagic,
    Port,
    DnsSeeds,
}

/// Any identifying value a network can be looked up by.
///
/// Built implicitly from strings, the three scalar integer widths (address
/// byte, port, extended-key prefix), a magic, or an already-resolved profile
/// (for idempotent passthrough).
#[derive(Debug, Clone)]
pub enum NetworkKey {
    Str(String),
    Byte(u8),
    Port(u16),
    Version(u32),
    Magic(NetworkMagic),
    Profile(Arc<NetworkProfile>),
}

impl From<&str> for NetworkKey {
    fn from(value: &str) -> Self {
        NetworkKey::Str(value.to_string())
    }
}

impl From<String> for NetworkKey {
    fn from(value: String) -> Self {
        NetworkKey::Str(value)
    }
}

impl From<u8> for NetworkKey {
    fn from(value: u8) -> Self {
        NetworkKey::Byte(value)
    }
}

impl From<u16> for NetworkKey {
    fn from(value: u16) -> Self {
        NetworkKey::Port(value)
    }
}

impl From<u32> for NetworkKey {
    fn from(value: u32) -> Self {
        NetworkKey::Version(value)
    }
}

impl From<NetworkMagic> for NetworkKey {
    fn from(value: NetworkMagic) -> Self {
        NetworkKey::Magic(value)
    }
}

impl From<[u8; 4]> for NetworkKey {
    fn from(value: [u8; 4]) -> Self {
        NetworkKey::Magic(NetworkMagic::from_bytes(value))
    }
}

impl From<Arc<NetworkProfile>> for NetworkKey {
    fn from(value: Arc<NetworkProfile>) -> Self {
        NetworkKey::Profile(value)
    }
}

impl From<&Arc<NetworkProfile>> for NetworkKey {
    fn from(value: &Arc<NetworkProfile>) -> Self {
        NetworkKey::Profile(Arc::clone(value))
    }
}
