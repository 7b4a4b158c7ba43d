//! Well-known network table

use crate::network::NetworkData;

pub const LIVENET: &str = "livenet";
pub const MAINNET: &str = "mainnet";
pub const TESTNET: &str = "testnet";
pub const DOGECOIN: &str = "dogecoin";
pub const LITECOIN: &str = "litecoin";
pub const DASH: &str = "dash";
pub const PEERCOIN: &str = "peercoin";
pub const NAMECOIN: &str = "namecoin";
pub const DIGIBYTE: &str = "digibyte";
pub const BLACKCOIN: &str = "blackcoin";
pub const BITCOINDARK: &str = "bitcoindark";

/// BIP32 versions shared by most alternate coins
const BIP32_XPUB: u32 = 0x0488b21e;
const BIP32_XPRV: u32 = 0x0488ade4;

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    alias: &str,
    pubkeyhash: u8,
    privatekey: u8,
    scripthash: u8,
    xpubkey: u32,
    xprivkey: u32,
    network_magic: u32,
    port: u16,
    dns_seeds: &[&str],
) -> NetworkData {
    NetworkData {
        name: name.to_string(),
        alias: alias.to_string(),
        pubkeyhash,
        privatekey,
        scripthash,
        xpubkey,
        xprivkey,
        network_magic,
        port,
        dns_seeds: dns_seeds.iter().map(|s| s.to_string()).collect(),
    }
}

/// Networks registered by [`NetworkRegistry::with_defaults`](crate::NetworkRegistry::with_defaults),
/// in registration order.
///
/// Later entries reuse prefixes and BIP32 versions of earlier ones, so
/// unrestricted lookups by those numbers resolve to the later network.
pub fn known_networks() -> Vec<NetworkData> {
    vec![
        entry(
            LIVENET,
            MAINNET,
            0x00,
            0x80,
            0x05,
            BIP32_XPUB,
            BIP32_XPRV,
            0xf9beb4d9,
            8333,
            &[
                "seed.bitcoin.sipa.be",
                "dnsseed.bluematt.me",
                "dnsseed.bitcoin.dashjr.org",
                "seed.bitcoinstats.com",
                "seed.bitnodes.io",
                "bitseed.xf2.org",
            ],
        ),
        entry(
            TESTNET,
            TESTNET,
            0x6f,
            0xef,
            0xc4,
            0x043587cf,
            0x04358394,
            0x0b110907,
            18333,
            &[
                "testnet-seed.bitcoin.petertodd.org",
                "testnet-seed.bluematt.me",
                "testnet-seed.alexykot.me",
                "testnet-seed.bitcoin.schildbach.de",
            ],
        ),
        entry(
            DOGECOIN,
            DOGECOIN,
            0x1e,
            0x9e,
            0x22,
            0x0488c42e,
            0x0488e1f4,
            0xc0c0c0c0,
            22556,
            &[
                "seed.dogecoin.com",
                "seed.multidoge.org",
                "seed2.multidoge.org",
                "seed.doger.dogecoin.com",
            ],
        ),
        entry(
            LITECOIN,
            LITECOIN,
            0x30,
            0xb0,
            0x05,
            BIP32_XPUB,
            BIP32_XPRV,
            0xfbc0b6db,
            9333,
            &[
                "dnsseed.litecointools.com",
                "dnsseed.litecoinpool.org",
                "dnsseed.ltc.xurious.com",
                "dnsseed.koin-project.com",
                "dnsseed.weminemnc.com",
            ],
        ),
        entry(
            DASH,
            DASH,
            0x4c,
            0xcc,
            0x16,
            0x02fe52f8,
            0x02fe52cc,
            0xbf0c6bbd,
            9999,
            &[
                "dnsseed.darkcoin.io",
                "dnsseed.darkcoin.qa",
                "dnsseed.ltc.xurious.com",
                "dnsseed.masternode.io",
                "dnsseed.dashpay.io",
            ],
        ),
        entry(
            PEERCOIN,
            PEERCOIN,
            0x37,
            0xb7,
            0x05,
            BIP32_XPUB,
            BIP32_XPRV,
            0xbf0c6bbd,
            9901,
            &[
                "seed.ppcoin.net",
                "seedppc.ppcoin.net",
                "ppcseed.ns.7server.net",
                "dnsseed.ppc.altcointech.net",
                "seed.diandianbi.org",
                "tnseed.ppcoin.net",
                "tnseedppc.ppcoin.net",
            ],
        ),
        entry(
            NAMECOIN,
            NAMECOIN,
            0x34,
            0xb4,
            0x13,
            BIP32_XPUB,
            BIP32_XPRV,
            0xf9beb4fe,
            8334,
            &[
                "namecoindnsseed.digi-masters.com",
                "namecoindnsseed.digi-masters.uk",
                "seed.namecoin.domob.eu",
                "nmc.seed.quisquis.de",
                "dnsseed.namecoin.webbtc.com",
            ],
        ),
        entry(
            DIGIBYTE,
            DIGIBYTE,
            0x1e,
            0x80,
            0x05,
            BIP32_XPUB,
            BIP32_XPRV,
            0xfac3b6da,
            12024,
            &[
                "74.208.230.160",
                "216.250.125.121",
                "195.130.216.149",
                "96.18.212.86",
                "188.226.239.21",
                "54.201.183.106",
                "213.81.142.62",
            ],
        ),
        entry(
            BLACKCOIN,
            BLACKCOIN,
            0x19,
            0x99,
            0x85,
            BIP32_XPUB,
            BIP32_XPRV,
            0x70352205,
            15714,
            &["seed.blackcoin.co", "bcseed.syllabear.us.to"],
        ),
        // No live seeds are published for bitcoindark.
        entry(
            BITCOINDARK,
            BITCOINDARK,
            0x3c,
            0xbc,
            0x85,
            BIP32_XPUB,
            BIP32_XPRV,
            0xe4c2d8e6,
            14631,
            &[],
        ),
    ]
}
