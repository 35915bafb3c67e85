//! Regtest mode for the built-in testnet.
//!
//! The testnet profile does not store its own port, magic, or seed list.
//! Those three attributes are computed on every read by consulting a mode
//! flag and selecting between two predeclared tables: [`TESTNET_PARAMS`]
//! (standard mode) and [`REGTEST_PARAMS`]. No other attribute is affected
//! by the flag.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::magic::NetworkMagic;

/// The mode-dependent subset of a network profile's attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeParams {
    pub port: u16,
    pub network_magic: NetworkMagic,
    pub dns_seeds: &'static [&'static str],
}

/// Standard-mode testnet values.
pub const TESTNET_PARAMS: ModeParams = ModeParams {
    port: 44350,
    network_magic: NetworkMagic::from_u32(0x4e4db231),
    dns_seeds: &["testnet-seed.skeincurrency.com"],
};

/// Regtest-mode testnet values. Regtest has no public seeds.
pub const REGTEST_PARAMS: ModeParams = ModeParams {
    port: 19994,
    network_magic: NetworkMagic::from_u32(0xfcc1b7dc),
    dns_seeds: &[],
};

/// Runtime mode switch for the testnet singleton.
///
/// The flag is a plain mode marker, not a synchronization point; relaxed
/// ordering is sufficient. Enable and disable are unconditional and
/// idempotent.
#[derive(Debug)]
pub struct RegtestOverlay {
    enabled: AtomicBool,
    standard: ModeParams,
    regtest: ModeParams,
}

impl RegtestOverlay {
    pub fn new(standard: ModeParams, regtest: ModeParams) -> Self {
        RegtestOverlay {
            enabled: AtomicBool::new(false),
            standard,
            regtest,
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Relaxed);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Table selected by the current mode.
    pub fn params(&self) -> &ModeParams {
        if self.is_enabled() {
            &self.regtest
        } else {
            &self.standard
        }
    }

}

impl Default for RegtestOverlay {
    fn default() -> Self {
        RegtestOverlay::new(TESTNET_PARAMS, REGTEST_PARAMS)
    }
}
