use skein_networks::{NetworkAttribute, NetworkMagic, NetworkRegistry, NetworkSpec};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Skein Network Registry Basic Usage Example");
    println!("==========================================\n");

    // Example 1: the built-in networks.
    println!("1. Built-in networks:");
    let mut registry = NetworkRegistry::new();
    for network in registry.networks() {
        println!(
            "   {} - pubkeyhash: 0x{:02x}, port: {:?}, magic: {:?}",
            network,
            network.pubkeyhash(),
            network.port(),
            network.network_magic().map(|m| m.to_string()),
        );
    }

    // Example 2: resolving by arbitrary identifying values.
    println!("\n2. Lookups:");
    let by_alias = registry.get("mainnet").ok_or("mainnet not registered")?;
    println!("   'mainnet' resolves to: {}", by_alias);
    let by_byte = registry.get(0x80u8).ok_or("0x80 not registered")?;
    println!("   WIF byte 0x80 resolves to: {}", by_byte);
    let by_magic = registry
        .get_matching(
            NetworkMagic::from_u32(0x4e4db231),
            &[NetworkAttribute::NetworkMagic],
        )
        .ok_or("magic not registered")?;
    println!("   magic 4e4db231 resolves to: {}", by_magic);

    // Example 3: regtest mode swaps the testnet's derived attributes.
    println!("\n3. Regtest mode:");
    let testnet = registry.testnet().clone();
    println!("   standard: port {:?}", testnet.port());
    registry.enable_regtest();
    println!("   regtest:  port {:?}", testnet.port());
    registry.disable_regtest();

    // Example 4: registering a custom network.
    println!("\n4. Custom network:");
    let custom = registry.add(NetworkSpec {
        name: "stagenet".to_string(),
        aliases: vec!["staging".to_string()],
        pubkeyhash: 0x19,
        privatekey: 0x99,
        scripthash: 0x1a,
        xpubkey: None,
        xprivkey: None,
        xpubkey256bit: None,
        xprivkey256bit: None,
        network_magic: Some(NetworkMagic::from_u32(0xd0b4bef9)),
        port: Some(54350),
        dns_seeds: None,
    })?;
    println!("   registered: {} (port {:?})", custom, custom.port());
    let resolved = registry.get(54350u16).ok_or("port not registered")?;
    println!("   port 54350 resolves to: {}", resolved);
    registry.remove(&custom);
    println!("   after remove, port 54350: {:?}", registry.get(54350u16).map(|n| n.to_string()));

    Ok(())
}
