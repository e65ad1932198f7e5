mod cors;
mod handlers;
mod routes;
mod state;

#[cfg(test)]
mod cors_test;

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use axum::Router;
use miette::Diagnostic;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::contact::{ContactIntake, DEFAULT_SIMULATED_LATENCY};
use crate::telemetry::{TelemetryConfig, TelemetryConfigError, TelemetryGenerator};

pub use cors::{AllowedOrigin, CorsPolicy};
pub use handlers::{ErrorResponse, HealthResponse, check};
pub use routes::{ApiDoc, create_router};
pub use state::{AppState, HealthInfo};

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable holding the listening port.
pub const PORT_ENV: &str = "PORT";

/// API server errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Invalid CORS {kind}: '{value}'")]
    #[diagnostic(
        code(adam::api::invalid_cors),
        help("Origins must be '*' or a single origin such as http://localhost:3000")
    )]
    InvalidCors { kind: &'static str, value: String },

    #[error("Invalid telemetry configuration: {0}")]
    #[diagnostic(code(adam::api::telemetry_config))]
    Telemetry(#[from] TelemetryConfigError),

    #[error("Failed to bind {addr}")]
    #[diagnostic(
        code(adam::api::bind),
        help("Is another process already listening on this port?")
    )]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(adam::api::serve))]
    Serve(#[source] std::io::Error),
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Log verbosity (0 = info, 1 = debug, 2+ = trace)
    pub verbosity: u8,
    /// Mount the OpenAPI UI at /docs
    pub enable_docs: bool,
    /// Telemetry generator parameters
    pub telemetry: TelemetryConfig,
    /// CORS policy, `None` to disable CORS entirely
    pub cors: Option<CorsPolicy>,
    /// Delay before acknowledging a contact submission
    pub contact_latency: Duration,
    /// Identity reported by /health
    pub health: HealthInfo,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            verbosity: 0,
            enable_docs: false,
            telemetry: TelemetryConfig::default(),
            cors: Some(CorsPolicy::default()),
            contact_latency: DEFAULT_SIMULATED_LATENCY,
            health: HealthInfo::default(),
        }
    }
}

impl Config {
    /// Defaults, with the port taken from `PORT` when it holds a valid number.
    pub fn new() -> Self {
        let port = std::env::var(PORT_ENV)
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            port,
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_telemetry(mut self, telemetry: TelemetryConfig) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn with_cors(mut self, cors: Option<CorsPolicy>) -> Self {
        self.cors = cors;
        self
    }

    pub fn with_contact_latency(mut self, latency: Duration) -> Self {
        self.contact_latency = latency;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Default log filter for a verbosity level, used when `RUST_LOG` is unset.
pub fn default_log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "adam_telemetry=info,tower_http=info",
        1 => "adam_telemetry=debug,tower_http=debug",
        _ => "adam_telemetry=trace,tower_http=trace",
    }
}

/// Initialize tracing subscriber with env filter
fn init_tracing(verbosity: u8) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the full application from configuration.
///
/// The telemetry start instant is captured here, so uptime counts from startup.
pub fn build_app(config: &Config) -> Result<Router, ApiError> {
    let telemetry = TelemetryGenerator::new(config.telemetry.clone())?;
    let cors = config.cors.as_ref().map(CorsPolicy::to_layer).transpose()?;
    let state = AppState::new(
        telemetry,
        ContactIntake::new(config.contact_latency),
        config.health.clone(),
    );

    Ok(create_router(state, cors, config.enable_docs).layer(TraceLayer::new_for_http()))
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), ApiError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ApiError::Serve)
}

/// Run the API server with the given configuration until Ctrl-C.
pub async fn run(config: Config) -> Result<(), ApiError> {
    init_tracing(config.verbosity);

    let app = build_app(&config)?;

    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ApiError::Bind { addr, source })?;
    info!("API server listening on http://{}", addr);

    serve(listener, app, async {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
        }
    })
    .await
}
