//! CORS policy configuration.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::ApiError;

/// Origin allowed to read responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigin {
    /// `Access-Control-Allow-Origin: *`
    Any,
    /// A single origin, e.g. `http://localhost:3000`
    Exact(String),
}

impl From<&str> for AllowedOrigin {
    fn from(value: &str) -> Self {
        match value.trim() {
            "*" => AllowedOrigin::Any,
            origin => AllowedOrigin::Exact(origin.to_string()),
        }
    }
}

/// Cross-origin policy applied to every route.
///
/// Values are kept as strings so they can come straight from the command line;
/// they are checked when the layer is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_origin: AllowedOrigin,
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self {
            allow_origin: AllowedOrigin::Any,
            allow_methods: vec!["GET".into(), "POST".into(), "OPTIONS".into()],
            allow_headers: vec!["Content-Type".into(), "Authorization".into()],
        }
    }
}

impl CorsPolicy {
    pub fn with_origin(mut self, origin: impl Into<AllowedOrigin>) -> Self {
        self.allow_origin = origin.into();
        self
    }

    pub fn with_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Build the tower-http layer.
    ///
    /// Preflight requests are answered by the layer itself with an empty 200.
    pub fn to_layer(&self) -> Result<CorsLayer, ApiError> {
        let origin = match &self.allow_origin {
            AllowedOrigin::Any => AllowOrigin::any(),
            AllowedOrigin::Exact(origin) if origin.is_empty() => {
                return Err(invalid("origin", origin));
            }
            AllowedOrigin::Exact(origin) => AllowOrigin::exact(
                HeaderValue::from_str(origin).map_err(|_| invalid("origin", origin))?,
            ),
        };

        let methods = self
            .allow_methods
            .iter()
            .map(|m| {
                Method::from_bytes(m.trim().as_bytes()).map_err(|_| invalid("method", m))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let headers = self
            .allow_headers
            .iter()
            .map(|h| {
                HeaderName::from_bytes(h.trim().as_bytes()).map_err(|_| invalid("header", h))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers(headers))
    }
}

fn invalid(kind: &'static str, value: &str) -> ApiError {
    ApiError::InvalidCors {
        kind,
        value: value.to_string(),
    }
}
