//! Example resolving networks from the values found in addresses and
//! handshakes

use chain_networks::{Field, NetworkData, NetworkRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Network Registry Demo");
    println!("=====================");

    let registry = NetworkRegistry::with_defaults();

    println!("\n1. Well-known networks...");
    for network in registry.networks() {
        println!(
            "   {:<12} magic {} port {:>5} seeds {}",
            network.name(),
            network.network_magic(),
            network.port(),
            network.dns_seeds().len()
        );
    }

    println!("\n2. Resolving by identifying values...");
    let mainnet = registry.mainnet().ok_or("mainnet missing")?;
    println!("   alias 'mainnet' -> {}", mainnet);

    let by_prefix = registry
        .resolve_in(0x6fu8, &[Field::PubkeyHash])
        .ok_or("no network with pubkeyhash 0x6f")?;
    println!("   pubkeyhash 0x6f -> {}", by_prefix);

    // Handshake magic arrives as raw bytes off the wire.
    let magic = [0xf9u8, 0xbe, 0xb4, 0xd9];
    let by_magic = registry
        .resolve_in(magic, &[Field::NetworkMagic])
        .ok_or("unknown magic")?;
    println!("   magic f9beb4d9 -> {}", by_magic);

    println!("\n3. Registering a custom network...");
    let regtest = registry.register(NetworkData {
        name: "regtest".to_string(),
        alias: "regtest".to_string(),
        pubkeyhash: 0x6f,
        privatekey: 0xef,
        scripthash: 0xc4,
        xpubkey: 0x043587cf,
        xprivkey: 0x04358394,
        network_magic: 0xfabfb5da,
        port: 18444,
        dns_seeds: Vec::new(),
    });
    println!("   registered {} ({} networks)", regtest, registry.len());
    if let Some(network) = registry.resolve(0x6fu8) {
        println!("   unrestricted 0x6f now -> {}", network);
    }

    registry.unregister(&regtest);
    println!("   unregistered, {} networks left", registry.len());

    Ok(())
}
