use std::net::SocketAddr;

use stockproxy_market_data::{provider::fmp::DEFAULT_BASE_URL, ExchangeSet};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub api_key: String,
    pub upstream_base_url: String,
    pub exchanges: ExchangeSet,
}

impl Config {
    /// Read configuration from the process environment, after loading `.env`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5001".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid LISTEN_ADDR: {e}"))?;
        // Not validated here; a bad key surfaces as an upstream failure per request.
        let api_key = std::env::var("API_KEY").unwrap_or_default();
        let upstream_base_url =
            std::env::var("FMP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            listen_addr,
            api_key,
            upstream_base_url,
            exchanges: ExchangeSet::us(),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("api_key", &"<redacted>")
            .field("upstream_base_url", &self.upstream_base_url)
            .field("exchanges", &self.exchanges)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so env mutations never race within this binary.
    #[test]
    fn from_env_reads_overrides_and_rejects_bad_addr() {
        std::env::set_var("LISTEN_ADDR", "0.0.0.0:6001");
        std::env::set_var("API_KEY", "abc123");
        std::env::set_var("FMP_BASE_URL", "http://localhost:9999/api/v3");

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:6001".parse().unwrap());
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.upstream_base_url, "http://localhost:9999/api/v3");
        assert_eq!(config.exchanges, ExchangeSet::us());
        assert!(!format!("{config:?}").contains("abc123"));

        std::env::remove_var("LISTEN_ADDR");
        std::env::remove_var("API_KEY");
        std::env::remove_var("FMP_BASE_URL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:5001".parse().unwrap());
        assert_eq!(config.api_key, "");
        assert_eq!(config.upstream_base_url, DEFAULT_BASE_URL);

        std::env::set_var("LISTEN_ADDR", "not-an-address");
        assert!(Config::from_env().is_err());
        std::env::remove_var("LISTEN_ADDR");
    }
}
