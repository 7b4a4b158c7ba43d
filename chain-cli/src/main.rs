//! Command-line lookup of network parameters

use anyhow::{bail, Context, Result};
use chain_networks::{
    Field, Network, NetworkKey, NetworkMagic, NetworkRegistry, RegistryConfig, ScalarValue,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "networks")]
#[command(about = "Inspect and resolve blockchain network parameters")]
#[command(version)]
struct Cli {
    /// Registry config file (TOML or JSON)
    #[arg(short, long, global = true, env = "CHAIN_NETWORKS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered networks in registration order
    List,

    /// Show one network by name or alias
    Show {
        name: String,
    },

    /// Resolve a network from any identifying value
    Resolve {
        /// Name, alias, number (decimal or 0x hex), magic hex or seed list
        key: String,

        /// Only match these fields (e.g. port, networkMagic, dnsSeeds)
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let registry = load_registry(cli.config.as_ref())?;

    match cli.command {
        Commands::List => {
            let networks = registry.networks();
            match cli.format {
                OutputFormat::Json => {
                    let networks: Vec<&Network> = networks.iter().map(Arc::as_ref).collect();
                    println!("{}", serde_json::to_string_pretty(&networks)?);
                }
                OutputFormat::Text => {
                    for network in &networks {
                        println!(
                            "{:<12} {:<12} magic {} port {}",
                            network.name(),
                            network.alias(),
                            network.network_magic(),
                            network.port()
                        );
                    }
                }
            }
        }
        Commands::Show { name } => {
            let network = registry
                .resolve_in(name.as_str(), &[Field::Name, Field::Alias])
                .with_context(|| format!("Unknown network: {name}"))?;
            print_network(&network, cli.format)?;
        }
        Commands::Resolve { key, fields } => {
            let fields = fields
                .iter()
                .map(|f| f.parse::<Field>())
                .collect::<Result<Vec<_>, _>>()?;
            let parsed = parse_key(&key, &fields)?;
            debug!(?parsed, ?fields, "Resolving network");

            let network = if fields.is_empty() {
                registry.resolve(parsed)
            } else {
                registry.resolve_in(parsed, &fields)
            };

            match network {
                Some(network) => print_network(&network, cli.format)?,
                None => bail!("No network matches {key}"),
            }
        }
    }

    Ok(())
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_registry(config: Option<&PathBuf>) -> Result<NetworkRegistry> {
    match config {
        Some(path) => {
            let config = RegistryConfig::load_from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            Ok(NetworkRegistry::from_config(&config)?)
        }
        None => Ok(NetworkRegistry::with_defaults()),
    }
}

/// Interpret a command-line key according to the fields it is matched
/// against
fn parse_key(raw: &str, fields: &[Field]) -> Result<NetworkKey> {
    if !fields.is_empty() && fields.iter().all(|f| *f == Field::NetworkMagic) {
        let magic: NetworkMagic = raw.parse()?;
        return Ok(magic.into());
    }

    if !fields.is_empty() && fields.iter().all(|f| *f == Field::DnsSeeds) {
        let seeds = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        return Ok(seeds.into());
    }

    if !fields.is_empty() && fields.iter().all(|f| matches!(f, Field::Name | Field::Alias)) {
        return Ok(NetworkKey::Scalar(ScalarValue::Text(raw.to_string())));
    }

    let number = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(digits) => Some(
            u32::from_str_radix(digits, 16)
                .with_context(|| format!("Invalid hex number: {raw}"))?,
        ),
        None if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) => Some(
            raw.parse::<u32>()
                .with_context(|| format!("Number out of range: {raw}"))?,
        ),
        None => None,
    };

    Ok(match number {
        Some(n) => NetworkKey::Scalar(ScalarValue::Number(n)),
        None => NetworkKey::Scalar(ScalarValue::Text(raw.to_string())),
    })
}

fn print_network(network: &Network, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(network)?),
        OutputFormat::Text => {
            println!("name:         {}", network.name());
            println!("alias:        {}", network.alias());
            println!("pubkeyhash:   0x{:02x}", network.pubkeyhash());
            println!("privatekey:   0x{:02x}", network.privatekey());
            println!("scripthash:   0x{:02x}", network.scripthash());
            println!("xpubkey:      0x{:08x}", network.xpubkey());
            println!("xprivkey:     0x{:08x}", network.xprivkey());
            println!("networkMagic: {}", network.network_magic());
            println!("port:         {}", network.port());
            println!("dnsSeeds:     {}", network.dns_seeds().join(", "));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar_keys() {
        assert!(matches!(
            parse_key("8333", &[]).unwrap(),
            NetworkKey::Scalar(ScalarValue::Number(8333))
        ));
        assert!(matches!(
            parse_key("0x6f", &[]).unwrap(),
            NetworkKey::Scalar(ScalarValue::Number(0x6f))
        ));
        assert!(matches!(
            parse_key("livenet", &[Field::Name]).unwrap(),
            NetworkKey::Scalar(ScalarValue::Text(ref s)) if s == "livenet"
        ));
        assert!(parse_key("0xzz", &[]).is_err());
        assert!(parse_key("99999999999", &[]).is_err());
    }

    #[test]
    fn test_parse_structured_keys() {
        assert!(matches!(
            parse_key("f9beb4d9", &[Field::NetworkMagic]).unwrap(),
            NetworkKey::Bytes(ref b) if b.as_slice() == [0xf9u8, 0xbe, 0xb4, 0xd9]
        ));
        assert!(matches!(
            parse_key("a.example, b.example", &[Field::DnsSeeds]).unwrap(),
            NetworkKey::Seeds(ref s) if s.len() == 2 && s[1] == "b.example"
        ));
    }

    #[test]
    fn test_resolve_parsed_keys() {
        let registry = NetworkRegistry::with_defaults();

        let key = parse_key("0x0b110907", &[Field::NetworkMagic]).unwrap();
        assert_eq!(
            registry.resolve_in(key, &[Field::NetworkMagic]).unwrap().name(),
            "testnet"
        );

        let key = parse_key("22556", &[]).unwrap();
        assert_eq!(registry.resolve(key).unwrap().name(), "dogecoin");
    }

    #[test]
    fn test_digit_names_stay_text() {
        assert!(matches!(
            parse_key("1234", &[Field::Name]).unwrap(),
            NetworkKey::Scalar(ScalarValue::Text(ref s)) if s == "1234"
        ));
        assert!(matches!(
            parse_key("0x10", &[Field::Name, Field::Alias]).unwrap(),
            NetworkKey::Scalar(ScalarValue::Text(ref s)) if s == "0x10"
        ));
        assert!(matches!(
            parse_key("1234", &[Field::Name, Field::Port]).unwrap(),
            NetworkKey::Scalar(ScalarValue::Number(1234))
        ));

        let registry = NetworkRegistry::with_defaults();
        let mut data = registry.livenet().unwrap().to_data();
        data.name = "1234".to_string();
        data.alias = "1234".to_string();
        data.port = 1235;
        registry.register(data);

        let key = parse_key("1234", &[Field::Name]).unwrap();
        assert_eq!(registry.resolve_in(key, &[Field::Name]).unwrap().name(), "1234");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["networks", "resolve", "8333", "--field", "port"]).unwrap();
        match cli.command {
            Commands::Resolve { key, fields } => {
                assert_eq!(key, "8333");
                assert_eq!(fields, vec!["port".to_string()]);
            }
            _ => panic!("expected resolve"),
        }
    }
}
