use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TICKET_BASE_URL: &str = "https://tickets.example.com/concert";
pub const DEFAULT_SHARE_BASE_URL: &str = "https://bandtrack.example.com/concert";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// Load the demo users, artists, concerts and review at startup.
    pub seed_demo: bool,
    pub ticket_base_url: String,
    pub share_base_url: String,
    /// Empty means any origin may call the API.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed_demo: true,
            ticket_base_url: DEFAULT_TICKET_BASE_URL.to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unparseable values fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("BANDTRACK_HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid BANDTRACK_HOST, using default");
                defaults.host
            }),
            None => defaults.host,
        };

        Self {
            host,
            port: lookup("BANDTRACK_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            seed_demo: lookup("BANDTRACK_SEED_DEMO")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(defaults.seed_demo),
            ticket_base_url: lookup("BANDTRACK_TICKET_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.ticket_base_url),
            share_base_url: lookup("BANDTRACK_SHARE_BASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.share_base_url),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
