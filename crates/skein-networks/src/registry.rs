//! The network registry: ordered profile list plus typed lookup indexes.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::builtin;
use crate::error::{NetworkError, NetworkResult};
use crate::loader::FileLoader;
use crate::profile::{NetworkAttribute, NetworkKey, NetworkProfile, NetworkSpec};
use crate::regtest::{RegtestOverlay, REGTEST_PARAMS};

/// Collision policy for index registration.
///
/// `Compat` reproduces the historical behavior: a later registration
/// silently wins any index key it shares with an earlier one. `Strict`
/// rejects such registrations before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistryMode {
    #[default]
    Compat,
    Strict,
}

/// Registry of network-parameter profiles.
///
/// Owns the canonical profile instances and every piece of lookup state;
/// there are no ambient globals. Profiles are indexed under each of their
/// identifying values (name, aliases, address-version bytes, extended-key
/// prefixes, port, seed hostnames) in per-domain maps, so a raw protocol
/// constant resolves without knowing which attribute it came from. Magic
/// bytes are deliberately not indexed; resolve those through
/// [`get_matching`](Self::get_matching).
///
/// Mutation requires `&mut self`; a multi-threaded embedder must serialize
/// access externally. Already-published `Arc<NetworkProfile>` values are
/// freely shareable.
#[derive(Debug)]
pub struct NetworkRegistry {
    mode: RegistryMode,
    networks: Vec<Arc<NetworkProfile>>,
    by_name: HashMap<String, Arc<NetworkProfile>>,
    by_alias: HashMap<String, Arc<NetworkProfile>>,
    by_seed: HashMap<String, Arc<NetworkProfile>>,
    by_byte: HashMap<u8, Arc<NetworkProfile>>,
    by_version: HashMap<u32, Arc<NetworkProfile>>,
    by_port: HashMap<u16, Arc<NetworkProfile>>,
    livenet: Arc<NetworkProfile>,
    testnet: Arc<NetworkProfile>,
}

impl NetworkRegistry {
    /// Registry with the two built-in networks, in compat mode.
    pub fn new() -> Self {
        Self::with_mode(RegistryMode::Compat)
    }

    /// Registry with the two built-in networks, rejecting key collisions.
    pub fn strict() -> Self {
        Self::with_mode(RegistryMode::Strict)
    }

    /// Bootstraps livenet first (it becomes the default binding), then
    /// testnet with its regtest overlay already wired, so the mode-dependent
    /// accessors are live before any of their values get indexed.
    pub fn with_mode(mode: RegistryMode) -> Self {
        let livenet = Arc::new(NetworkProfile::from_spec(builtin::livenet_spec()));
        let testnet = Arc::new(NetworkProfile::with_overlay(
            builtin::testnet_spec(),
            RegtestOverlay::default(),
        ));

        let mut registry = NetworkRegistry {
            mode,
            networks: Vec::new(),
            by_name: HashMap::new(),
            by_alias: HashMap::new(),
            by_seed: HashMap::new(),
            by_byte: HashMap::new(),
            by_version: HashMap::new(),
            by_port: HashMap::new(),
            livenet: Arc::clone(&livenet),
            testnet: Arc::clone(&testnet),
        };

        // Built-in constants cannot collide with an empty registry.
        registry.index_profile(&livenet);
        registry.networks.push(livenet);
        registry.index_profile(&testnet);
        // The regtest-mode port resolves to testnet in either mode.
        registry
            .by_port
            .insert(REGTEST_PARAMS.port, Arc::clone(&testnet));
        registry.networks.push(testnet);

        registry
    }

    pub fn mode(&self) -> RegistryMode {
        self.mode
    }

    /// Registered profiles in registration order.
    pub fn networks(&self) -> &[Arc<NetworkProfile>] {
        &self.networks
    }

    /// The default (production) network binding.
    pub fn livenet(&self) -> &Arc<NetworkProfile> {
        &self.livenet
    }

    /// The test network binding.
    pub fn testnet(&self) -> &Arc<NetworkProfile> {
        &self.testnet
    }

    /// Substitute a custom default network. The profile must already be
    /// registered.
    pub fn set_livenet(&mut self, profile: Arc<NetworkProfile>) -> NetworkResult<()> {
        if !self.contains(&profile) {
            return Err(NetworkError::NotRegistered(profile.name().to_string()));
        }
        debug!("default network set to '{}'", profile.name());
        self.livenet = profile;
        Ok(())
    }

    /// Substitute the test network binding. The profile must already be
    /// registered.
    pub fn set_testnet(&mut self, profile: Arc<NetworkProfile>) -> NetworkResult<()> {
        if !self.contains(&profile) {
            return Err(NetworkError::NotRegistered(profile.name().to_string()));
        }
        debug!("test network set to '{}'", profile.name());
        self.testnet = profile;
        Ok(())
    }

    /// Restore the freshly bootstrapped state, discarding custom networks,
    /// substituted bindings, and regtest mode.
    pub fn reset(&mut self) {
        *self = Self::with_mode(self.mode);
    }

    /// Register a network built from `spec` and index every defined scalar
    /// and list-element value.
    ///
    /// In compat mode this never fails: a value already indexed to another
    /// profile is silently re-pointed at the new one (logged at `warn`). In
    /// strict mode such a collision aborts the registration with
    /// [`NetworkError::KeyCollision`] and the registry is left untouched.
    pub fn add(&mut self, spec: NetworkSpec) -> NetworkResult<Arc<NetworkProfile>> {
        let profile = Arc::new(NetworkProfile::from_spec(spec));
        if self.mode == RegistryMode::Strict {
            self.check_collisions(&profile)?;
        }
        self.index_profile(&profile);
        self.networks.push(Arc::clone(&profile));
        debug!("registered network '{}'", profile.name());
        Ok(profile)
    }

    /// Remove a profile by identity and scrub every index entry resolving
    /// to it. No-op if the profile was never registered.
    pub fn remove(&mut self, profile: &Arc<NetworkProfile>) {
        let before = self.networks.len();
        self.networks.retain(|p| !Arc::ptr_eq(p, profile));
        if self.networks.len() == before {
            return;
        }
        self.by_name.retain(|_, p| !Arc::ptr_eq(p, profile));
        self.by_alias.retain(|_, p| !Arc::ptr_eq(p, profile));
        self.by_seed.retain(|_, p| !Arc::ptr_eq(p, profile));
        self.by_byte.retain(|_, p| !Arc::ptr_eq(p, profile));
        self.by_version.retain(|_, p| !Arc::ptr_eq(p, profile));
        self.by_port.retain(|_, p| !Arc::ptr_eq(p, profile));
        debug!("removed network '{}'", profile.name());
    }

    /// Resolve a profile by any identifying value.
    ///
    /// A key that is itself a registered profile passes through unchanged;
    /// otherwise the typed indexes are consulted (strings try name, alias,
    /// then seed host). Returns `None` when nothing matches.
    ///
    /// Compatibility side effect: resolving the testnet binding through the
    /// exact keys `"local"` or `"regtest"` also enables regtest mode. Use
    /// [`resolve`](Self::resolve) for a side-effect-free lookup.
    pub fn get<K: Into<NetworkKey>>(&self, key: K) -> Option<Arc<NetworkProfile>> {
        let key = key.into();
        let found = self.lookup(&key)?;
        if Arc::ptr_eq(&found, &self.testnet) {
            if let NetworkKey::Str(s) = &key {
                if s == "local" || s == "regtest" {
                    self.enable_regtest();
                }
            }
        }
        Some(found)
    }

    /// Side-effect-free variant of [`get`](Self::get).
    pub fn resolve<K: Into<NetworkKey>>(&self, key: K) -> Option<Arc<NetworkProfile>> {
        self.lookup(&key.into())
    }

    /// First profile, in registration order, whose value for any of the
    /// named attributes equals `key`. Attribute reads are mode-aware, so a
    /// port scan against the testnet matches the active regtest table.
    pub fn get_matching<K: Into<NetworkKey>>(
        &self,
        key: K,
        attributes: &[NetworkAttribute],
    ) -> Option<Arc<NetworkProfile>> {
        let key = key.into();
        self.networks
            .iter()
            .find(|profile| {
                attributes
                    .iter()
                    .any(|attr| profile.attribute_matches(*attr, &key))
            })
            .cloned()
    }

    /// Enable regtest mode on the testnet binding. Unconditional and
    /// idempotent.
    pub fn enable_regtest(&self) {
        match self.testnet.regtest_overlay() {
            Some(overlay) => {
                overlay.enable();
                debug!("regtest mode enabled");
            }
            None => warn!(
                "test network '{}' has no regtest overlay",
                self.testnet.name()
            ),
        }
    }

    /// Disable regtest mode on the testnet binding. Unconditional and
    /// idempotent.
    pub fn disable_regtest(&self) {
        match self.testnet.regtest_overlay() {
            Some(overlay) => {
                overlay.disable();
                debug!("regtest mode disabled");
            }
            None => warn!(
                "test network '{}' has no regtest overlay",
                self.testnet.name()
            ),
        }
    }

    pub fn regtest_enabled(&self) -> bool {
        self.testnet
            .regtest_overlay()
            .map(|overlay| overlay.is_enabled())
            .unwrap_or(false)
    }

    /// Parse a `[[networks]]` definition file (TOML or JSON, by extension)
    /// and register each record in file order. Returns the added profiles.
    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> NetworkResult<Vec<Arc<NetworkProfile>>> {
        let specs = FileLoader::load_auto(path)?;
        specs.into_iter().map(|spec| self.add(spec)).collect()
    }

    fn contains(&self, profile: &Arc<NetworkProfile>) -> bool {
        self.networks.iter().any(|p| Arc::ptr_eq(p, profile))
    }

    fn lookup(&self, key: &NetworkKey) -> Option<Arc<NetworkProfile>> {
        match key {
            NetworkKey::Profile(profile) => {
                self.contains(profile).then(|| Arc::clone(profile))
            }
            NetworkKey::Str(s) => self
                .by_name
                .get(s)
                .or_else(|| self.by_alias.get(s))
                .or_else(|| self.by_seed.get(s))
                .cloned(),
            NetworkKey::Byte(b) => self.by_byte.get(b).cloned(),
            NetworkKey::Port(p) => self.by_port.get(p).cloned(),
            NetworkKey::Version(v) => self.by_version.get(v).cloned(),
            // Magic bytes are never indexed; use get_matching.
            NetworkKey::Magic(_) => None,
        }
    }

    fn index_profile(&mut self, profile: &Arc<NetworkProfile>) {
        Self::index_entry(&mut self.by_name, profile.name().to_string(), profile);
        for alias in profile.aliases() {
            Self::index_entry(&mut self.by_alias, alias.clone(), profile);
        }
        if let Some(seeds) = profile.dns_seeds() {
            for seed in seeds {
                Self::index_entry(&mut self.by_seed, seed, profile);
            }
        }
        Self::index_entry(&mut self.by_byte, profile.pubkeyhash(), profile);
        Self::index_entry(&mut self.by_byte, profile.privatekey(), profile);
        Self::index_entry(&mut self.by_byte, profile.scripthash(), profile);
        for version in [
            profile.xpubkey(),
            profile.xprivkey(),
            profile.xpubkey256bit(),
            profile.xprivkey256bit(),
        ]
        .into_iter()
        .flatten()
        {
            Self::index_entry(&mut self.by_version, version, profile);
        }
        if let Some(port) = profile.port() {
            Self::index_entry(&mut self.by_port, port, profile);
        }
    }

    fn index_entry<K>(
        map: &mut HashMap<K, Arc<NetworkProfile>>,
        key: K,
        profile: &Arc<NetworkProfile>,
    ) where
        K: Eq + Hash + Display,
    {
        let shown = key.to_string();
        if let Some(prev) = map.insert(key, Arc::clone(profile)) {
            if !Arc::ptr_eq(&prev, profile) {
                warn!(
                    "key {} re-registered from '{}' to '{}'",
                    shown,
                    prev.name(),
                    profile.name()
                );
            }
        }
    }

    fn check_collisions(&self, profile: &Arc<NetworkProfile>) -> NetworkResult<()> {
        Self::check_entry(&self.by_name, &profile.name().to_string())?;
        for alias in profile.aliases() {
            Self::check_entry(&self.by_alias, alias)?;
        }
        if let Some(seeds) = profile.dns_seeds() {
            for seed in &seeds {
                Self::check_entry(&self.by_seed, seed)?;
            }
        }
        Self::check_entry(&self.by_byte, &profile.pubkeyhash())?;
        Self::check_entry(&self.by_byte, &profile.privatekey())?;
        Self::check_entry(&self.by_byte, &profile.scripthash())?;
        for version in [
            profile.xpubkey(),
            profile.xprivkey(),
            profile.xpubkey256bit(),
            profile.xprivkey256bit(),
        ]
        .into_iter()
        .flatten()
        {
            Self::check_entry(&self.by_version, &version)?;
        }
        if let Some(port) = profile.port() {
            Self::check_entry(&self.by_port, &port)?;
        }
        Ok(())
    }

    fn check_entry<K>(map: &HashMap<K, Arc<NetworkProfile>>, key: &K) -> NetworkResult<()>
    where
        K: Eq + Hash + Display,
    {
        match map.get(key) {
            Some(existing) => Err(NetworkError::KeyCollision {
                key: key.to_string(),
                existing: existing.name().to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
