//! Registry configuration

use crate::network::NetworkData;
use crate::{NetworksError, NetworksResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Prefix of environment variables overriding file settings
pub const ENV_PREFIX: &str = "CHAIN_NETWORKS";

/// What to do when a configured network reuses an indexed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Later network takes over the index entry
    #[default]
    Overwrite,
    /// Fail the load
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Load the well-known networks before the configured ones
    pub include_defaults: bool,

    /// Applied to configured networks only
    pub collision_policy: CollisionPolicy,

    /// Extra networks, registered in order
    pub networks: Vec<NetworkData>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            collision_policy: CollisionPolicy::Overwrite,
            networks: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Create a new registry configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or skip the well-known networks
    pub fn with_defaults(mut self, include: bool) -> Self {
        self.include_defaults = include;
        self
    }

    /// Set the collision policy
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Set extra networks
    pub fn with_networks(mut self, networks: Vec<NetworkData>) -> Self {
        self.networks = networks;
        self
    }

    /// Add one extra network
    pub fn add_network(mut self, network: NetworkData) -> Self {
        self.networks.push(network);
        self
    }

    /// Load from a TOML or JSON file (picked by extension), then apply
    /// `CHAIN_NETWORKS_*` environment overrides
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NetworksResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NetworksError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: RegistryConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> NetworksResult<Self> {
        let config: RegistryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> NetworksResult<Self> {
        let config: RegistryConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> NetworksResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> NetworksResult<()> {
        fs::write(path.as_ref(), self.to_toml_string()?)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> NetworksResult<()> {
        let mut names = HashSet::new();

        for (i, network) in self.networks.iter().enumerate() {
            if network.name.trim().is_empty() {
                return Err(NetworksError::Config(format!(
                    "Network {} has an empty name",
                    i
                )));
            }

            if network.alias.trim().is_empty() {
                return Err(NetworksError::Config(format!(
                    "Network {} ({}) has an empty alias",
                    i, network.name
                )));
            }

            if !names.insert(network.name.as_str()) {
                return Err(NetworksError::Config(format!(
                    "Network {} is listed more than once",
                    network.name
                )));
            }
        }

        Ok(())
    }
}
