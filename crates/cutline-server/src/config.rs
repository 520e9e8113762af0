//! Server configuration, read from the environment.

use std::sync::Arc;

use cutline_payments::{InMemoryGateway, PaymentGateway, StripeGateway};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (default: "0.0.0.0:3000").
    pub bind_addr: String,

    /// Stripe secret key. Payments run through Stripe when set.
    pub stripe_secret_key: Option<String>,

    /// Wallet the mock payout pretends to pay into.
    pub wallet_address: String,

    /// Directory holding the built frontend (default: "static").
    pub static_dir: String,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Use the in-memory gateway instead of Stripe.
    pub mock_payments: bool,
}

/// Which payment backend the server runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayKind {
    Stripe,
    InMemory,
    Disabled,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            stripe_secret_key: lookup("STRIPE_SECRET_KEY").filter(|key| !key.is_empty()),
            wallet_address: lookup("CRYPTO_WALLET_ADDRESS").unwrap_or(defaults.wallet_address),
            static_dir: lookup("STATIC_DIR").unwrap_or(defaults.static_dir),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            mock_payments: lookup("MOCK_PAYMENTS").is_some_and(|v| parse_flag(&v)),
        }
    }

    /// Backend selected by this configuration.
    pub fn gateway_kind(&self) -> GatewayKind {
        if self.mock_payments {
            GatewayKind::InMemory
        } else if self.stripe_secret_key.is_some() {
            GatewayKind::Stripe
        } else {
            GatewayKind::Disabled
        }
    }

    /// Build the configured payment gateway, if any.
    pub fn build_gateway(&self) -> Option<Arc<dyn PaymentGateway>> {
        match (self.gateway_kind(), &self.stripe_secret_key) {
            (GatewayKind::InMemory, _) => Some(Arc::new(InMemoryGateway::auto_confirming())),
            (GatewayKind::Stripe, Some(key)) => Some(Arc::new(StripeGateway::new(key))),
            _ => None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            stripe_secret_key: None,
            wallet_address: "unset".into(),
            static_dir: "static".into(),
            cors_origins: vec!["*".into()],
            mock_payments: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.static_dir, "static");
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert_eq!(config.gateway_kind(), GatewayKind::Disabled);
        assert!(config.build_gateway().is_none());
    }

    #[test]
    fn test_stripe_selected_by_key() {
        let config = config_from(&[
            ("STRIPE_SECRET_KEY", "sk_test_123"),
            ("CRYPTO_WALLET_ADDRESS", "bc1qowner"),
        ]);
        assert_eq!(config.gateway_kind(), GatewayKind::Stripe);
        assert_eq!(config.wallet_address, "bc1qowner");
        assert_eq!(config.build_gateway().unwrap().name(), "stripe");
    }

    #[test]
    fn test_mock_payments_wins() {
        let config = config_from(&[
            ("STRIPE_SECRET_KEY", "sk_test_123"),
            ("MOCK_PAYMENTS", "true"),
        ]);
        assert_eq!(config.gateway_kind(), GatewayKind::InMemory);
        assert_eq!(config.build_gateway().unwrap().name(), "in-memory");
    }

    #[test]
    fn test_empty_stripe_key_is_ignored() {
        let config = config_from(&[("STRIPE_SECRET_KEY", "")]);
        assert_eq!(config.gateway_kind(), GatewayKind::Disabled);
    }

    #[test]
    fn test_cors_origins_list() {
        let config = config_from(&[(
            "CORS_ORIGINS",
            "https://cutline.studio, http://localhost:8080,",
        )]);
        assert_eq!(
            config.cors_origins,
            vec!["https://cutline.studio", "http://localhost:8080"]
        );
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" 1 "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
