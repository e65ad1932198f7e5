//! Telemetry API server binary.
//!
//! Flags override the `PORT` environment variable, which overrides the defaults.

use std::net::IpAddr;
use std::time::Duration;

use adam_telemetry::api::{self, AllowedOrigin, ApiError, Config, CorsPolicy, HealthInfo};
use adam_telemetry::telemetry::{TelemetryConfig, TelemetryPreset, UptimeMode};
use clap::{ArgAction, Parser};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(adam::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "adam-api")]
#[command(author, version, about = "Synthetic telemetry API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on (defaults to PORT env or 8080)
    #[arg(short, long)]
    port: Option<u16>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Serve OpenAPI documentation at /docs
    #[arg(long)]
    docs: bool,

    /// Telemetry preset to start from
    #[arg(long, value_enum, default_value_t = TelemetryPreset::Standard)]
    preset: TelemetryPreset,

    /// Override the reported status label
    #[arg(long)]
    status_label: Option<String>,

    /// Lower bound (inclusive) of memory_mb
    #[arg(long)]
    memory_min: Option<u32>,

    /// Upper bound (exclusive) of memory_mb
    #[arg(long)]
    memory_max: Option<u32>,

    /// Lower bound (inclusive) of latency_ms
    #[arg(long)]
    latency_min: Option<u32>,

    /// Upper bound (exclusive) of latency_ms
    #[arg(long)]
    latency_max: Option<u32>,

    /// Report this fixed string as uptime instead of the elapsed time
    #[arg(long)]
    fixed_uptime: Option<String>,

    /// Disable CORS headers and preflight handling
    #[arg(long)]
    no_cors: bool,

    /// Allowed origin, '*' for any
    #[arg(long, default_value = "*")]
    allow_origin: String,

    /// Allowed methods (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "GET,POST,OPTIONS")]
    allow_methods: Vec<String>,

    /// Allowed request headers (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "Content-Type,Authorization")]
    allow_headers: Vec<String>,

    /// Simulated processing delay for contact submissions, in milliseconds
    #[arg(long, default_value_t = 500)]
    contact_delay_ms: u64,

    /// Engine name reported by /health
    #[arg(long, default_value = "rust")]
    engine: String,
}

impl Cli {
    fn telemetry(&self) -> TelemetryConfig {
        let mut config = TelemetryConfig::preset(self.preset);
        if let Some(label) = &self.status_label {
            config = config.with_status_label(label.clone());
        }
        config.memory_mb = self.memory_min.unwrap_or(config.memory_mb.start)
            ..self.memory_max.unwrap_or(config.memory_mb.end);
        config.latency_ms = self.latency_min.unwrap_or(config.latency_ms.start)
            ..self.latency_max.unwrap_or(config.latency_ms.end);
        if let Some(uptime) = &self.fixed_uptime {
            config = config.with_uptime(UptimeMode::Fixed(uptime.clone()));
        }
        config
    }

    fn cors(&self) -> Option<CorsPolicy> {
        if self.no_cors {
            return None;
        }
        Some(
            CorsPolicy::default()
                .with_origin(AllowedOrigin::from(self.allow_origin.as_str()))
                .with_methods(self.allow_methods.iter().cloned())
                .with_headers(self.allow_headers.iter().cloned()),
        )
    }

    fn into_config(self) -> Config {
        let mut config = Config::new()
            .with_telemetry(self.telemetry())
            .with_cors(self.cors())
            .with_contact_latency(Duration::from_millis(self.contact_delay_ms));
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        config.host = self.host;
        config.verbosity = self.verbose;
        config.enable_docs = self.docs;
        config.health = HealthInfo {
            engine: self.engine,
            ..HealthInfo::default()
        };
        config
    }
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let config = Cli::parse().into_config();

    println!();
    println!("adam-api starting...");
    println!("   Health:    http://{}/health", config.addr());
    println!("   Telemetry: http://{}/v1/telemetry", config.addr());
    println!("   Contact:   http://{}/v1/contact", config.addr());
    if config.enable_docs {
        println!("   Docs:      http://{}/docs", config.addr());
    }
    println!();

    api::run(config).await?;

    Ok(())
}
