//! Network registry: ordered descriptors plus a reverse index over their
//! scalar fields

use crate::config::{CollisionPolicy, RegistryConfig};
use crate::known::{self, known_networks};
use crate::network::{Field, Network, NetworkData, NetworkKey, ScalarValue};
use crate::{NetworksError, NetworksResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Index entry moved to a newer network
#[derive(Debug)]
struct Shadowed {
    field: Field,
    value: ScalarValue,
    previous: Arc<Network>,
}

#[derive(Debug, Default)]
struct RegistryState {
    /// Registration order
    networks: Vec<Arc<Network>>,
    /// Scalar field value -> owning descriptor, last write wins
    index: HashMap<ScalarValue, Arc<Network>>,
}

impl RegistryState {
    fn contains(&self, network: &Arc<Network>) -> bool {
        self.networks.iter().any(|n| Arc::ptr_eq(n, network))
    }

    /// Index and append `network`, returning the entries it took over from
    /// other networks
    fn insert(&mut self, network: Arc<Network>) -> Vec<Shadowed> {
        let mut shadowed = Vec::new();
        for (field, value) in network.indexed_values() {
            if let Some(previous) = self.index.insert(value.clone(), Arc::clone(&network)) {
                if !Arc::ptr_eq(&previous, &network) {
                    shadowed.push(Shadowed {
                        field,
                        value,
                        previous,
                    });
                }
            }
        }
        debug!(network = %network, total = self.networks.len() + 1, "Registered network");
        self.networks.push(network);
        shadowed
    }

    /// First value of `network` already indexed for another descriptor
    fn find_collision(&self, network: &Network) -> Option<NetworksError> {
        network.indexed_values().find_map(|(field, value)| {
            self.index.get(&value).map(|existing| NetworksError::Collision {
                field: field.as_str(),
                value: value.to_string(),
                existing: existing.name().to_string(),
            })
        })
    }
}

/// In-memory catalog of networks.
///
/// All state sits behind one lock so the ordered list and the index never
/// disagree. Share it as `Arc<NetworkRegistry>` between threads.
#[derive(Debug)]
pub struct NetworkRegistry {
    state: RwLock<RegistryState>,
}

impl NetworkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Create a registry holding the well-known networks
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        {
            let mut state = registry.state.write();
            for data in known_networks() {
                let network = Arc::new(Network::from_data(data));
                // The table shares prefixes and BIP32 versions on purpose.
                for entry in state.insert(Arc::clone(&network)) {
                    debug!(
                        network = %network,
                        shadowed = %entry.previous,
                        field = entry.field.as_str(),
                        value = %entry.value,
                        "Well-known network shares an indexed value"
                    );
                }
            }
        }
        registry
    }

    /// Build a registry from configuration.
    ///
    /// The collision policy only applies to networks listed in the
    /// configuration; the well-known table is always loaded as-is.
    pub fn from_config(config: &RegistryConfig) -> NetworksResult<Self> {
        config.validate()?;

        let registry = if config.include_defaults {
            Self::with_defaults()
        } else {
            Self::new()
        };

        for data in &config.networks {
            match config.collision_policy {
                CollisionPolicy::Overwrite => {
                    registry.register(data.clone());
                }
                CollisionPolicy::Reject => {
                    registry.register_exclusive(data.clone())?;
                }
            }
        }

        info!(
            networks = registry.len(),
            custom = config.networks.len(),
            "Network registry ready"
        );
        Ok(registry)
    }

    /// Add a network and index its scalar fields.
    ///
    /// A value already indexed for another network is taken over by the new
    /// one, so unrestricted lookups of that value change their answer.
    pub fn register(&self, data: NetworkData) -> Arc<Network> {
        let network = Arc::new(Network::from_data(data));
        let shadowed = self.state.write().insert(Arc::clone(&network));
        for entry in shadowed {
            warn!(
                network = %network,
                shadowed = %entry.previous,
                field = entry.field.as_str(),
                value = %entry.value,
                "Index entry taken over by later registration"
            );
        }
        network
    }

    /// Like [`register`](Self::register), but refuses a network that would
    /// take over an index entry of an already registered one.
    pub fn register_exclusive(&self, data: NetworkData) -> NetworksResult<Arc<Network>> {
        let network = Arc::new(Network::from_data(data));
        let mut state = self.state.write();
        if let Some(err) = state.find_collision(&network) {
            return Err(err);
        }
        let shadowed = state.insert(Arc::clone(&network));
        debug_assert!(shadowed.is_empty(), "collision check missed {shadowed:?}");
        Ok(network)
    }

    /// Remove a network and every index entry pointing at it
    pub fn unregister(&self, network: &Arc<Network>) {
        let mut state = self.state.write();
        let before = state.networks.len();
        state.networks.retain(|n| !Arc::ptr_eq(n, network));
        state.index.retain(|_, n| !Arc::ptr_eq(n, network));

        if state.networks.len() != before {
            debug!(network = %network, total = state.networks.len(), "Unregistered network");
        }
    }

    /// Look a network up by a registered descriptor or by any scalar value.
    ///
    /// Magic bytes and seed lists are not indexed; use
    /// [`resolve_in`](Self::resolve_in) for those.
    pub fn resolve(&self, key: impl Into<NetworkKey>) -> Option<Arc<Network>> {
        let key = key.into();
        let state = self.state.read();
        match &key {
            NetworkKey::Network(network) => state.contains(network).then(|| Arc::clone(network)),
            NetworkKey::Scalar(value) => state.index.get(value).cloned(),
            NetworkKey::Bytes(_) | NetworkKey::Seeds(_) => None,
        }
    }

    /// Return the first network, in registration order, where any of
    /// `fields` equals `key`
    pub fn resolve_in(&self, key: impl Into<NetworkKey>, fields: &[Field]) -> Option<Arc<Network>> {
        let key = key.into();
        let state = self.state.read();
        if let NetworkKey::Network(network) = &key {
            return state.contains(network).then(|| Arc::clone(network));
        }

        state
            .networks
            .iter()
            .find(|network| fields.iter().any(|field| network.field_matches(*field, &key)))
            .cloned()
    }

    /// Whether this exact descriptor is registered
    pub fn contains(&self, network: &Arc<Network>) -> bool {
        self.state.read().contains(network)
    }

    /// Snapshot of registered networks in registration order
    pub fn networks(&self) -> Vec<Arc<Network>> {
        self.state.read().networks.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().networks.is_empty()
    }

    /// Network used when none is specified (livenet)
    pub fn default_network(&self) -> Option<Arc<Network>> {
        self.livenet()
    }

    pub fn livenet(&self) -> Option<Arc<Network>> {
        self.resolve(known::LIVENET)
    }

    pub fn mainnet(&self) -> Option<Arc<Network>> {
        self.resolve(known::MAINNET)
    }

    pub fn testnet(&self) -> Option<Arc<Network>> {
        self.resolve(known::TESTNET)
    }

    pub fn dogecoin(&self) -> Option<Arc<Network>> {
        self.resolve(known::DOGECOIN)
    }

    pub fn litecoin(&self) -> Option<Arc<Network>> {
        self.resolve(known::LITECOIN)
    }

    pub fn dash(&self) -> Option<Arc<Network>> {
        self.resolve(known::DASH)
    }

    pub fn peercoin(&self) -> Option<Arc<Network>> {
        self.resolve(known::PEERCOIN)
    }

    pub fn namecoin(&self) -> Option<Arc<Network>> {
        self.resolve(known::NAMECOIN)
    }

    pub fn digibyte(&self) -> Option<Arc<Network>> {
        self.resolve(known::DIGIBYTE)
    }

    pub fn blackcoin(&self) -> Option<Arc<Network>> {
        self.resolve(known::BLACKCOIN)
    }

    pub fn bitcoindark(&self) -> Option<Arc<Network>> {
        self.resolve(known::BITCOINDARK)
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testcoin() -> NetworkData {
        NetworkData {
            name: "testcoin".to_string(),
            alias: "testcoin-alias".to_string(),
            pubkeyhash: 0x1a,
            privatekey: 0x9a,
            scripthash: 0x1b,
            xpubkey: 0x11223344,
            xprivkey: 0x55667788,
            network_magic: 0xaabbccdd,
            port: 9000,
            dns_seeds: vec!["seed.testcoin.example".to_string()],
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = NetworkRegistry::new();
        let network = registry.register(testcoin());

        let by_name = registry.resolve("testcoin").unwrap();
        let by_prefix = registry.resolve_in(0x1au8, &[Field::PubkeyHash]).unwrap();
        let by_port = registry.resolve(9000u16).unwrap();

        assert!(Arc::ptr_eq(&by_name, &network));
        assert!(Arc::ptr_eq(&by_prefix, &network));
        assert!(Arc::ptr_eq(&by_port, &network));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_magic_only_resolves_with_field() {
        let registry = NetworkRegistry::new();
        let network = registry.register(testcoin());
        let magic = [0xaau8, 0xbb, 0xcc, 0xdd];

        assert!(registry.resolve(magic).is_none());
        let found = registry.resolve_in(magic, &[Field::NetworkMagic]).unwrap();
        assert!(Arc::ptr_eq(&found, &network));
    }

    #[test]
    fn test_identity_passthrough() {
        let registry = NetworkRegistry::with_defaults();
        for network in registry.networks() {
            let resolved = registry.resolve(&network).unwrap();
            assert!(Arc::ptr_eq(&resolved, &network));

            let resolved = registry.resolve_in(&network, &[Field::Port]).unwrap();
            assert!(Arc::ptr_eq(&resolved, &network));
        }

        let other = NetworkRegistry::new().register(testcoin());
        assert!(registry.resolve(&other).is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = NetworkRegistry::new();
        let first = registry.register(testcoin());

        let mut data = testcoin();
        data.name = "othercoin".to_string();
        data.alias = "othercoin".to_string();
        let second = registry.register(data);

        let resolved = registry.resolve(9000u16).unwrap();
        assert!(Arc::ptr_eq(&resolved, &second));

        // The restricted scan still sees the first registration first.
        let resolved = registry.resolve_in(9000u16, &[Field::Port]).unwrap();
        assert!(Arc::ptr_eq(&resolved, &first));

        let resolved = registry.resolve("testcoin").unwrap();
        assert!(Arc::ptr_eq(&resolved, &first));
    }

    #[test]
    fn test_register_exclusive_rejects_collision() {
        let registry = NetworkRegistry::new();
        registry.register(testcoin());

        let mut data = testcoin();
        data.name = "othercoin".to_string();
        data.alias = "othercoin".to_string();
        let err = registry.register_exclusive(data).unwrap_err();
        match err {
            NetworksError::Collision { field, existing, .. } => {
                assert_eq!(field, "pubkeyhash");
                assert_eq!(existing, "testcoin");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_to_data_is_a_detached_copy() {
        let registry = NetworkRegistry::new();
        let original = registry.register(testcoin());

        let mut data = original.to_data();
        data.name = "copycoin".to_string();
        data.alias = "copycoin".to_string();
        data.port = 9100;
        data.dns_seeds.push("seed2.testcoin.example".to_string());
        let copy = registry.register(data);

        assert_eq!(original.name(), "testcoin");
        assert_eq!(original.port(), 9000);
        assert_eq!(original.dns_seeds(), ["seed.testcoin.example".to_string()]);
        assert!(Arc::ptr_eq(&registry.resolve("testcoin").unwrap(), &original));
        assert!(Arc::ptr_eq(&registry.resolve(9000u16).unwrap(), &original));
        assert!(Arc::ptr_eq(&registry.resolve(9100u16).unwrap(), &copy));
    }

    #[test]
    fn test_register_exclusive_after_unrelated_network() {
        let registry = NetworkRegistry::with_defaults();
        let network = registry.register_exclusive(testcoin()).unwrap();
        assert!(Arc::ptr_eq(&registry.resolve("testcoin").unwrap(), &network));
        assert_eq!(registry.len(), 11);
    }

    #[test]
    fn test_unregister() {
        let registry = NetworkRegistry::new();
        let network = registry.register(testcoin());
        registry.unregister(&network);

        assert!(registry.is_empty());
        assert!(!registry.contains(&network));
        assert!(registry.resolve("testcoin").is_none());
        assert!(registry.resolve(9000u16).is_none());
        assert!(registry.resolve(&network).is_none());
        assert!(registry
            .resolve_in([0xaau8, 0xbb, 0xcc, 0xdd], &[Field::NetworkMagic])
            .is_none());

        // Second call is a no-op
        registry.unregister(&network);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_keeps_entries_of_other_networks() {
        let registry = NetworkRegistry::new();
        let first = registry.register(testcoin());

        let mut data = testcoin();
        data.name = "othercoin".to_string();
        data.alias = "othercoin".to_string();
        data.port = 9001;
        let second = registry.register(data);

        registry.unregister(&first);
        // Shared prefixes were already owned by the second network.
        let resolved = registry.resolve(0x1au8).unwrap();
        assert!(Arc::ptr_eq(&resolved, &second));
        assert!(registry.resolve(9000u16).is_none());
        assert!(registry.resolve("testcoin").is_none());
    }

    #[test]
    fn test_empty_field_list_finds_nothing() {
        let registry = NetworkRegistry::with_defaults();
        assert!(registry.resolve_in("livenet", &[]).is_none());
    }

    #[test]
    fn test_named_accessors() {
        let registry = NetworkRegistry::default();
        let livenet = registry.livenet().unwrap();
        assert_eq!(livenet.name(), "livenet");
        assert!(Arc::ptr_eq(&livenet, &registry.mainnet().unwrap()));
        assert!(Arc::ptr_eq(&livenet, &registry.default_network().unwrap()));
        assert_eq!(registry.testnet().unwrap().port(), 18333);
        assert_eq!(registry.dogecoin().unwrap().port(), 22556);
        assert_eq!(registry.litecoin().unwrap().port(), 9333);
        assert_eq!(registry.dash().unwrap().port(), 9999);
        assert_eq!(registry.peercoin().unwrap().port(), 9901);
        assert_eq!(registry.namecoin().unwrap().port(), 8334);
        assert_eq!(registry.digibyte().unwrap().port(), 12024);
        assert_eq!(registry.blackcoin().unwrap().port(), 15714);
        assert_eq!(registry.bitcoindark().unwrap().port(), 14631);
    }

    #[test]
    fn test_from_config_rejects_collisions_when_asked() {
        let mut data = testcoin();
        data.port = 8333;
        let config = RegistryConfig::new()
            .with_networks(vec![data])
            .with_collision_policy(CollisionPolicy::Reject);

        assert!(matches!(
            NetworkRegistry::from_config(&config),
            Err(NetworksError::Collision { .. })
        ));

        let config = config.with_collision_policy(CollisionPolicy::Overwrite);
        let registry = NetworkRegistry::from_config(&config).unwrap();
        assert_eq!(registry.resolve(8333u16).unwrap().name(), "testcoin");
    }
}
