//! Network parameter registry for the Skein protocol.
//!
//! Address-version bytes, extended-key prefixes, peer-protocol magic
//! numbers, default ports, and seed hostnames differ per network; this crate
//! keeps them in named profiles so addresses and serialized keys get
//! interpreted consistently with the network in use.
//!
//! A [`NetworkRegistry`] boots with two built-in networks: the production
//! network (`livenet`, alias `mainnet`) and the test network (`testnet`),
//! the latter with a runtime regtest mode that swaps its port, magic, and
//! seed list for local-testing values. Profiles resolve by any identifying
//! value:
//!
//! ```
//! use skein_networks::NetworkRegistry;
//!
//! let registry = NetworkRegistry::new();
//!
//! let livenet = registry.get("mainnet").unwrap();
//! assert_eq!(livenet.privatekey(), 0x80);
//!
//! // A raw protocol constant resolves without naming its attribute.
//! let by_port = registry.get(34350u16).unwrap();
//! assert_eq!(by_port.name(), "livenet");
//! ```
//!
//! Custom networks register through [`NetworkRegistry::add`] or a
//! TOML/JSON definition file (see [`loader`]).

pub mod builtin;
pub mod error;
pub mod loader;
pub mod magic;
pub mod profile;
pub mod registry;
pub mod regtest;

pub use error::{NetworkError, NetworkResult};
pub use loader::FileLoader;
pub use magic::NetworkMagic;
pub use profile::{NetworkAttribute, NetworkKey, NetworkProfile, NetworkSpec};
pub use registry::{NetworkRegistry, RegistryMode};
pub use regtest::{ModeParams, RegtestOverlay, REGTEST_PARAMS, TESTNET_PARAMS};
