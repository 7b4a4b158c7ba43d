//! Environment overrides live in their own test binary: the variables are
//! process-wide and would leak into the file-loading tests.

use anyhow::Result;
use chain_networks::{CollisionPolicy, NetworkRegistry, RegistryConfig};
use std::{env, fs};
use tempfile::TempDir;

const TOML_CONFIG: &str = r#"
include_defaults = true
collision_policy = "overwrite"

[[networks]]
name = "regtest"
alias = "regtest"
pubkeyhash = 0x6f
privatekey = 0xef
scripthash = 0xc4
xpubkey = 0x043587cf
xprivkey = 0x04358394
networkMagic = 0xfabfb5da
port = 18444
dnsSeeds = []
"#;

#[test]
fn test_env_overrides_file_values() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("networks.toml");
    fs::write(&path, TOML_CONFIG)?;

    env::set_var("CHAIN_NETWORKS_INCLUDE_DEFAULTS", "false");
    env::set_var("CHAIN_NETWORKS_COLLISION_POLICY", "reject");
    let loaded = RegistryConfig::load_from_file(&path);
    env::remove_var("CHAIN_NETWORKS_INCLUDE_DEFAULTS");
    env::remove_var("CHAIN_NETWORKS_COLLISION_POLICY");

    let config = loaded?;
    assert!(!config.include_defaults);
    assert_eq!(config.collision_policy, CollisionPolicy::Reject);
    assert_eq!(config.networks.len(), 1);

    // Without the defaults regtest's testnet prefixes collide with nothing
    let registry = NetworkRegistry::from_config(&config)?;
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.resolve(0x6fu8).unwrap().name(), "regtest");

    // With the variables gone the file values apply again
    let config = RegistryConfig::load_from_file(&path)?;
    assert!(config.include_defaults);
    assert_eq!(config.collision_policy, CollisionPolicy::Overwrite);
    Ok(())
}
