use clap::Parser;
use rilofono_oemhook::{wire_to_ipv4, IfcConfigureRecord};
use rilofono_ril::BridgeConfig;
use serde_json::json;
use std::io;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "oemhook", about = "Build and inspect OEM-hook interface-configure records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Encode a configure record and print it as hex.
    Encode {
        #[arg(long)]
        ifname: String,
        #[arg(long)]
        addr: Ipv4Addr,
        #[arg(long)]
        prefix: u32,
        #[arg(long)]
        gateway: Option<Ipv4Addr>,
        /// Up to two DNS servers.
        #[arg(long = "dns")]
        dns: Vec<Ipv4Addr>,
    },
    /// Encode a teardown record and print it as hex.
    Teardown { ifname: String },
    /// Decode a hex record and print it as JSON.
    Decode { hex: String },
    /// Parse a bridge config and print the launch options it yields.
    CheckConfig { path: PathBuf },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("oemhook error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> io::Result<()> {
    match cli.command {
        Command::Encode { ifname, addr, prefix, gateway, dns } => {
            println!("{}", encode(&ifname, addr, prefix, gateway, &dns)?);
        }
        Command::Teardown { ifname } => {
            let record = IfcConfigureRecord::teardown(ifname);
            println!("{}", hex::encode(record.encode().map_err(invalid_input)?));
        }
        Command::Decode { hex } => {
            println!("{}", decode(&hex)?);
        }
        Command::CheckConfig { path } => {
            println!("{}", check_config(&path)?);
        }
    }
    Ok(())
}

fn encode(
    ifname: &str,
    addr: Ipv4Addr,
    prefix: u32,
    gateway: Option<Ipv4Addr>,
    dns: &[Ipv4Addr],
) -> io::Result<String> {
    if dns.len() > 2 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("at most two --dns servers fit in a record, got {}", dns.len()),
        ));
    }
    let record = IfcConfigureRecord::configure(
        ifname,
        addr,
        prefix,
        gateway,
        dns.first().copied(),
        dns.get(1).copied(),
    );
    if record.is_teardown() {
        log::warn!("address 0.0.0.0 encodes a teardown of {ifname}");
    }
    Ok(hex::encode(record.encode().map_err(invalid_input)?))
}

fn decode(input: &str) -> io::Result<String> {
    let trimmed: String = input.split_whitespace().collect();
    let trimmed = trimmed.strip_prefix("0x").unwrap_or(&trimmed);
    let bytes = hex::decode(trimmed).map_err(invalid_input)?;
    let record = IfcConfigureRecord::decode(&bytes).map_err(invalid_input)?;
    if bytes.len() > rilofono_oemhook::RECORD_SIZE {
        log::warn!(
            "ignoring {} trailing bytes",
            bytes.len() - rilofono_oemhook::RECORD_SIZE
        );
    }

    let value = json!({
        "record": record,
        "teardown": record.is_teardown(),
        "addresses": {
            "ipaddr": wire_to_ipv4(record.ipaddr).to_string(),
            "gateway": wire_to_ipv4(record.gateway).to_string(),
            "dns": record.dns.iter().map(|d| wire_to_ipv4(*d).to_string()).collect::<Vec<_>>(),
        },
    });
    serde_json::to_string_pretty(&value).map_err(io::Error::other)
}

fn check_config(path: &Path) -> io::Result<String> {
    let config = BridgeConfig::from_path(path)?;
    let options = config.runtime_options();
    let value = json!({
        "hosted_class": config.hosted_class,
        "options": options.options,
        "env": options.env,
        "ignore_unrecognized": options.ignore_unrecognized,
    });
    serde_json::to_string_pretty(&value).map_err(io::Error::other)
}

fn invalid_input(err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
}
