//! Gelos Client Binary - Interactive Joke Retrieval
//!
//! Satu exchange per invocation: prompt nama, kirim request, print joke.
//!
//! Usage:
//!   gelos_client <HOST> <PORT> [OPTIONS]
//!
//! # Options
//!
//! - `--timeout SEC` - Receive timeout in seconds (default: 3)
//! - `--fast-open` - Send the request during connection establishment
//! - `--verbose` - Verbose output

use std::io::{self, BufRead, Write};
use std::time::Duration;

use gelos::{fetch_joke, ClientConfig, TransmitMode};

/// Konfigurasi dari command line
struct DriverConfig {
    host: String,
    port: u16,
    client: ClientConfig,
    verbose: bool,
}

fn print_usage() {
    println!("Gelos Client - Length-Prefixed Joke Retrieval\n");
    println!("Usage: gelos_client <HOST> <PORT> [OPTIONS]\n");
    println!("Options:");
    println!("      --timeout <SEC>   Receive timeout in seconds (default: 3)");
    println!("      --fast-open       Send request during connection establishment");
    println!("  -v, --verbose         Verbose output");
    println!("  -h, --help            Show this help");
}

fn parse_args() -> Result<DriverConfig, String> {
    let args: Vec<String> = std::env::args().collect();
    let mut positional: Vec<String> = Vec::new();
    let mut client = ClientConfig::default();
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--timeout" => {
                if i + 1 < args.len() {
                    let secs: u64 = args[i + 1]
                        .parse()
                        .map_err(|_| format!("invalid timeout value: {}", args[i + 1]))?;
                    client.recv_timeout = Duration::from_secs(secs);
                    i += 1;
                }
            }
            "--fast-open" => {
                client.transmit = TransmitMode::FastOpen;
            }
            "--verbose" | "-v" => {
                verbose = true;
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                positional.push(other.to_string());
            }
        }
        i += 1;
    }

    // Tepat dua positional arguments: host dan port
    if positional.len() != 2 {
        return Err("hostname and port were not provided by the user".to_string());
    }

    let port: u16 = positional[1]
        .parse()
        .map_err(|_| format!("invalid port: {}", positional[1]))?;

    Ok(DriverConfig {
        host: positional[0].clone(),
        port,
        client,
        verbose,
    })
}

/// Prompt satu baris dari stdin, tanpa trailing newline
fn prompt_name(label: &str) -> io::Result<String> {
    print!("Please, enter your {}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    // Buang newline (dan CR di Windows); truncation urusan encoder
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

fn run_client(config: DriverConfig) -> Result<(), gelos::GelosError> {
    let first_name = prompt_name("first name").map_err(gelos::GelosError::Io)?;
    let last_name = prompt_name("last name").map_err(gelos::GelosError::Io)?;

    if config.verbose {
        println!(
            "🔌 Connecting to {}:{} (timeout: {:?}, mode: {:?})",
            config.host, config.port, config.client.recv_timeout, config.client.transmit
        );
    }

    let joke = fetch_joke(
        &config.host,
        config.port,
        &first_name,
        &last_name,
        &config.client,
    )?;

    println!("The whole joke: {}", joke.text);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("❌ {}", msg);
            eprintln!("   Try: gelos_client --help");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_client(config) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
