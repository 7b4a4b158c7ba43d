//! Network descriptors and the keys used to look them up

use crate::encoding::NetworkMagic;
use crate::NetworksError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Registration record for a network.
///
/// Callers are expected to fill every field; the registry stores what it is
/// given and does not check that the constants make sense for any protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkData {
    /// Canonical name, e.g. `livenet`
    pub name: String,
    /// Secondary name, e.g. `mainnet`
    pub alias: String,
    /// Pubkey hash address prefix
    pub pubkeyhash: u8,
    /// Private key (WIF) prefix
    pub privatekey: u8,
    /// Script hash address prefix
    pub scripthash: u8,
    /// Extended public key version
    pub xpubkey: u32,
    /// Extended private key version
    pub xprivkey: u32,
    /// Handshake magic in integer form
    #[serde(alias = "networkmagic", alias = "network_magic")]
    pub network_magic: u32,
    /// Default peer port
    pub port: u16,
    /// DNS seeds used for bootstrap
    #[serde(default, alias = "dnsseeds", alias = "dns_seeds")]
    pub dns_seeds: Vec<String>,
}

/// Immutable description of one network.
///
/// Instances only come out of [`NetworkRegistry::register`](crate::NetworkRegistry::register)
/// and are shared as `Arc<Network>`; two descriptors are "the same network"
/// when they are the same allocation.
///
/// Fields cannot be assigned from outside the crate:
///
/// ```compile_fail
/// use chain_networks::{known_networks, NetworkRegistry};
///
/// let registry = NetworkRegistry::new();
/// let mut network = registry.register(known_networks().remove(0));
/// network.port = 1;
/// ```
///
/// and a shared descriptor never hands out `&mut Network`:
///
/// ```compile_fail
/// use chain_networks::{known_networks, NetworkRegistry};
///
/// let registry = NetworkRegistry::new();
/// let mut network = registry.register(known_networks().remove(0));
/// let inner: &mut chain_networks::Network = &mut *network;
/// inner.dns_seeds().to_vec().clear();
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    name: String,
    alias: String,
    pubkeyhash: u8,
    privatekey: u8,
    scripthash: u8,
    xpubkey: u32,
    xprivkey: u32,
    network_magic: NetworkMagic,
    port: u16,
    dns_seeds: Vec<String>,
}

impl Network {
    pub(crate) fn from_data(data: NetworkData) -> Self {
        Self {
            name: data.name,
            alias: data.alias,
            pubkeyhash: data.pubkeyhash,
            privatekey: data.privatekey,
            scripthash: data.scripthash,
            xpubkey: data.xpubkey,
            xprivkey: data.xprivkey,
            network_magic: NetworkMagic::from_u32(data.network_magic),
            port: data.port,
            dns_seeds: data.dns_seeds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
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

    pub fn xpubkey(&self) -> u32 {
        self.xpubkey
    }

    pub fn xprivkey(&self) -> u32 {
        self.xprivkey
    }

    pub fn network_magic(&self) -> NetworkMagic {
        self.network_magic
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn dns_seeds(&self) -> &[String] {
        &self.dns_seeds
    }

    /// Rebuild the record this descriptor was registered from
    pub fn to_data(&self) -> NetworkData {
        NetworkData {
            name: self.name.clone(),
            alias: self.alias.clone(),
            pubkeyhash: self.pubkeyhash,
            privatekey: self.privatekey,
            scripthash: self.scripthash,
            xpubkey: self.xpubkey,
            xprivkey: self.xprivkey,
            network_magic: self.network_magic.to_u32(),
            port: self.port,
            dns_seeds: self.dns_seeds.clone(),
        }
    }

    /// Index key for a scalar field, `None` for structured fields
    pub fn scalar(&self, field: Field) -> Option<ScalarValue> {
        let value = match field {
            Field::Name => ScalarValue::Text(self.name.clone()),
            Field::Alias => ScalarValue::Text(self.alias.clone()),
            Field::PubkeyHash => ScalarValue::Number(self.pubkeyhash.into()),
            Field::PrivateKey => ScalarValue::Number(self.privatekey.into()),
            Field::ScriptHash => ScalarValue::Number(self.scripthash.into()),
            Field::XpubKey => ScalarValue::Number(self.xpubkey),
            Field::XprivKey => ScalarValue::Number(self.xprivkey),
            Field::Port => ScalarValue::Number(self.port.into()),
            Field::NetworkMagic | Field::DnsSeeds => return None,
        };
        Some(value)
    }

    /// All values this descriptor contributes to the secondary index
    pub fn indexed_values(&self) -> impl Iterator<Item = (Field, ScalarValue)> + '_ {
        Field::INDEXED
            .into_iter()
            .filter_map(move |field| self.scalar(field).map(|value| (field, value)))
    }

    /// Whether `field` of this descriptor equals `key`
    pub fn field_matches(&self, field: Field, key: &NetworkKey) -> bool {
        match (field, key) {
            (Field::NetworkMagic, NetworkKey::Bytes(bytes)) => {
                self.network_magic.as_bytes().as_slice() == bytes.as_slice()
            }
            (Field::DnsSeeds, NetworkKey::Seeds(seeds)) => &self.dns_seeds == seeds,
            (Field::NetworkMagic | Field::DnsSeeds, _) => false,
            (field, key) => match key.as_scalar() {
                Some(scalar) => self.scalar(field).as_ref() == Some(scalar),
                None => false,
            },
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Descriptor fields, named as in network tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Alias,
    PubkeyHash,
    PrivateKey,
    ScriptHash,
    XpubKey,
    XprivKey,
    NetworkMagic,
    Port,
    DnsSeeds,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Alias,
        Field::PubkeyHash,
        Field::PrivateKey,
        Field::ScriptHash,
        Field::XpubKey,
        Field::XprivKey,
        Field::NetworkMagic,
        Field::Port,
        Field::DnsSeeds,
    ];

    /// Fields that take part in the secondary index, in registration order
    pub const INDEXED: [Field; 8] = [
        Field::Name,
        Field::Alias,
        Field::PubkeyHash,
        Field::PrivateKey,
        Field::ScriptHash,
        Field::XpubKey,
        Field::XprivKey,
        Field::Port,
    ];

    pub fn is_indexed(self) -> bool {
        !matches!(self, Field::NetworkMagic | Field::DnsSeeds)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Alias => "alias",
            Field::PubkeyHash => "pubkeyhash",
            Field::PrivateKey => "privatekey",
            Field::ScriptHash => "scripthash",
            Field::XpubKey => "xpubkey",
            Field::XprivKey => "xprivkey",
            Field::NetworkMagic => "networkMagic",
            Field::Port => "port",
            Field::DnsSeeds => "dnsSeeds",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = NetworksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "network_magic" => return Ok(Field::NetworkMagic),
            "dns_seeds" => return Ok(Field::DnsSeeds),
            _ => {}
        }
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| NetworksError::UnknownField(s.to_string()))
    }
}

/// Key of the secondary index.
///
/// Every numeric field shares the `Number` space, so a prefix byte of one
/// network can shadow the port or prefix of another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarValue {
    Text(String),
    Number(u32),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) => f.write_str(s),
            ScalarValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Anything a caller can resolve a network from
#[derive(Debug, Clone)]
pub enum NetworkKey {
    /// An already registered descriptor, returned as-is
    Network(Arc<Network>),
    /// Name, alias or numeric field value
    Scalar(ScalarValue),
    /// Raw bytes, only matched against `networkMagic`
    Bytes(Vec<u8>),
    /// Full seed list, only matched against `dnsSeeds`
    Seeds(Vec<String>),
}

impl NetworkKey {
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            NetworkKey::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

impl From<ScalarValue> for NetworkKey {
    fn from(value: ScalarValue) -> Self {
        NetworkKey::Scalar(value)
    }
}

impl From<&str> for NetworkKey {
    fn from(s: &str) -> Self {
        NetworkKey::Scalar(ScalarValue::Text(s.to_string()))
    }
}

impl From<String> for NetworkKey {
    fn from(s: String) -> Self {
        NetworkKey::Scalar(ScalarValue::Text(s))
    }
}

impl From<u8> for NetworkKey {
    fn from(n: u8) -> Self {
        NetworkKey::Scalar(ScalarValue::Number(n.into()))
    }
}

impl From<u16> for NetworkKey {
    fn from(n: u16) -> Self {
        NetworkKey::Scalar(ScalarValue::Number(n.into()))
    }
}

impl From<u32> for NetworkKey {
    fn from(n: u32) -> Self {
        NetworkKey::Scalar(ScalarValue::Number(n))
    }
}

impl From<[u8; 4]> for NetworkKey {
    fn from(bytes: [u8; 4]) -> Self {
        NetworkKey::Bytes(bytes.to_vec())
    }
}

impl From<&[u8]> for NetworkKey {
    fn from(bytes: &[u8]) -> Self {
        NetworkKey::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for NetworkKey {
    fn from(bytes: Vec<u8>) -> Self {
        NetworkKey::Bytes(bytes)
    }
}

impl From<NetworkMagic> for NetworkKey {
    fn from(magic: NetworkMagic) -> Self {
        NetworkKey::Bytes(magic.as_bytes().to_vec())
    }
}

impl From<Vec<String>> for NetworkKey {
    fn from(seeds: Vec<String>) -> Self {
        NetworkKey::Seeds(seeds)
    }
}

impl From<Arc<Network>> for NetworkKey {
    fn from(network: Arc<Network>) -> Self {
        NetworkKey::Network(network)
    }
}

impl From<&Arc<Network>> for NetworkKey {
    fn from(network: &Arc<Network>) -> Self {
        NetworkKey::Network(Arc::clone(network))
    }
}
