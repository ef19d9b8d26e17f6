//! Command-line front end for the web helpers.
//!
//! Every library helper is exposed as a subcommand so hosting scripts and
//! operators can check what the application would compute for a given
//! request or path.

use std::error::Error;
use std::io::Read;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use clap::{Parser, Subcommand};

use web_helpers::config::{load_config, HelperConfig};
use web_helpers::observability::init_logging;
use web_helpers::{absolute_path, containing_dir, AppRoot, ClientAddressResolver, RequestVariables};

#[derive(Parser)]
#[command(name = "web-helpers")]
#[command(about = "Path, settings and client address helpers for hosted web apps", long_about = None)]
struct Cli {
    /// TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the originating client address of a request
    ClientIp {
        /// Request header, as "Name: value" (repeatable)
        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(HeaderName, HeaderValue)>,

        /// Address of the directly connected peer
        #[arg(long)]
        remote_addr: Option<IpAddr>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read an application setting
    Param {
        name: String,

        #[arg(short, long, default_value = "")]
        default: String,
    },
    /// Rewrite "~/" markers to the application root (reads stdin without TEXT)
    Rewrite { text: Option<String> },
    /// Convert a physical file path to an application URL path
    AbsolutePath {
        path: String,

        /// Physical root (overrides paths.physical_root)
        #[arg(long)]
        root: Option<String>,
    },
    /// Containing directory of a virtual path
    ContainingDir { path: String },
}

fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected \"Name: value\", got {raw:?}"))?;
    let name = HeaderName::from_bytes(name.trim().as_bytes()).map_err(|e| e.to_string())?;
    let value = HeaderValue::from_str(value.trim()).map_err(|e| e.to_string())?;
    Ok((name, value))
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => HelperConfig::default(),
    };
    init_logging(&config.observability.log_level);

    match cli.command {
        Commands::ClientIp {
            headers,
            remote_addr,
            json,
        } => {
            let mut map = HeaderMap::new();
            for (name, value) in headers {
                map.append(name, value);
            }

            let resolver = ClientAddressResolver::from_config(&config.client_ip);
            let peer = remote_addr.map(|ip| SocketAddr::new(ip, 0));
            let vars = RequestVariables::new(&map, peer)
                .with_remote_addr_variable(resolver.remote_addr_variable());
            let address = resolver.resolve(&vars);

            if json {
                println!("{}", serde_json::json!({ "address": address }));
            } else {
                println!("{address}");
            }
        }
        Commands::Param { name, default } => {
            println!("{}", config.settings().param_or(&name, &default));
        }
        Commands::Rewrite { text } => {
            let text = match text {
                Some(t) => t,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            print!("{}", AppRoot::new(&config.paths.app_root).transform(&text));
        }
        Commands::AbsolutePath { path, root } => {
            let root = root.unwrap_or_else(|| config.paths.physical_root.clone());
            println!("{}", absolute_path(&path, &root));
        }
        Commands::ContainingDir { path } => {
            println!("{}", containing_dir(&path));
        }
    }

    Ok(())
}
