//! Gateway configuration.

/// Environment variables consulted for the backend base URL, in order.
const BACKEND_URL_VARS: [&str; 2] = ["KB_BACKEND_URL", "BACKEND_API_URL"];

/// Fallback backend base URL for local development.
const BACKEND_URL_FALLBACK: &str = "http://localhost:8000";

/// Configuration for the gateway, built once at startup and carried in
/// [`crate::AppState`]. Handlers never read the environment directly.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8080").
    pub bind_addr: String,
    /// Base URL of the backend API, without trailing slash.
    pub backend_url: String,
    /// Production mode: controls the `Secure` attribute on session cookies.
    pub production: bool,
}

impl GatewayConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                          | Default                 |
    /// |-----------------------------------|-------------------------|
    /// | `BIND_ADDR`                       | `127.0.0.1:8080`        |
    /// | `KB_BACKEND_URL` / `BACKEND_API_URL` | `http://localhost:8000` |
    /// | `APP_ENV`                         | `development`           |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into()),
            backend_url: resolve_backend_url(),
            production: std::env::var("APP_ENV").as_deref() == Ok("production"),
        }
    }

    /// Full URL for a backend endpoint path (path must start with '/').
    pub fn backend_endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}

/// Resolve the backend base URL from the ordered variable list, trimming any
/// trailing slash so endpoint joins stay unambiguous.
fn resolve_backend_url() -> String {
    let raw = BACKEND_URL_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .unwrap_or_else(|| BACKEND_URL_FALLBACK.into());
    raw.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_endpoint_joins_paths() {
        let config = GatewayConfig {
            bind_addr: "127.0.0.1:0".into(),
            backend_url: "http://localhost:8000".into(),
            production: false,
        };
        assert_eq!(
            config.backend_endpoint("/api/v1/auth/login"),
            "http://localhost:8000/api/v1/auth/login"
        );
    }
}
