//! Blockchain network parameters
//!
//! This crate describes the networks a node or wallet can talk to and
//! resolves them from any identifying value:
//! - Network descriptors (address prefixes, BIP32 versions, magic, port, seeds)
//! - A registry indexed by every scalar descriptor field
//! - The table of well-known networks
//! - Configuration for loading extra networks

pub mod config;
pub mod encoding;
pub mod error;
pub mod known;
pub mod network;
pub mod registry;

pub use config::{CollisionPolicy, RegistryConfig};
pub use encoding::{bytes_as_integer, integer_as_bytes, NetworkMagic};
pub use error::{NetworksError, NetworksResult};
pub use known::known_networks;
pub use network::{Field, Network, NetworkData, NetworkKey, ScalarValue};
pub use registry::NetworkRegistry;
