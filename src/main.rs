//! Document Proxy config checker.
//!
//! Loads a proxy configuration file the same way the proxy does at startup,
//! validates it, and reports the result.
//!
//! ```text
//! document-proxy --config proxy.yml [--format yml] [--json] [--debug]
//!     → observability::logging (RUST_LOG, --debug, IS_DEBUG)
//!     → config::new_config (file + PROXY_SECRET)
//!     → summary log line, optional redacted JSON on stdout
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use document_proxy::config::{new_config, ConfigFormat, ConfigParameters};
use document_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "document-proxy")]
#[command(about = "Validate a document proxy configuration file", long_about = None)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.yml")]
    config: PathBuf,

    /// Configuration file format.
    #[arg(short, long, default_value = "yml")]
    format: ConfigFormat,

    /// Print the loaded configuration as JSON (secret redacted).
    #[arg(long)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug = cli.debug
        || logging::debug_requested(std::env::var(logging::DEBUG_FLAG_VAR).ok().as_deref());
    logging::init_logging(debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Configuration rejected");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(path = %cli.config.display(), format = %cli.format, "Loading configuration");

    let config = new_config(ConfigParameters::new(cli.config, cli.format))?;

    tracing::info!(
        name = %config.server.name,
        version = %config.server.version,
        address = %config.server.address,
        debug = config.server.debug,
        allowed_hosts = config.proxy.allowed_hosts.len(),
        "Configuration loaded"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&config.to_redacted_json())?);
    }

    Ok(())
}
