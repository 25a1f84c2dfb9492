//! CORS Config

use clap::Args;

use super::ConfigError;

/// Cross-origin settings.
#[derive(Debug, Args)]
pub struct CorsConfig {
    /// The single browser origin allowed to call the API, e.g. `http://localhost:5173`
    #[arg(long, env = "ALLOWED_ORIGIN")]
    pub allowed_origin: String,
}

impl CorsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if is_plain_origin(&self.allowed_origin) {
            Ok(())
        } else {
            Err(ConfigError::InvalidOrigin(self.allowed_origin.clone()))
        }
    }
}

/// `http(s)://host[:port]` with nothing after the authority.
fn is_plain_origin(origin: &str) -> bool {
    let Some(authority) = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
    else {
        return false;
    };

    let (host, port) = match authority.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };

    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');

    let port_ok = port.is_none_or(|port| port.parse::<u16>().is_ok());

    host_ok && port_ok
}
