// storefront/src/config.rs

use crate::errors::{AppError, Result};
use crate::i18n::Locale;
use crate::models::Currency;
use crate::services::payment_intents::DEFAULT_GATEWAY_TIMEOUT;
use crate::services::stripe::DEFAULT_STRIPE_API_BASE;
use dotenvy::dotenv;
use secrecy::SecretString;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayKind {
  Stripe,
  Mock,
}

#[derive(Debug)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub app_name: String,
  pub app_base_url: String,

  pub payment_gateway: GatewayKind,
  /// Present whenever `payment_gateway` is `Stripe`.
  pub stripe_secret_key: Option<SecretString>,
  pub stripe_api_base: String,
  pub store_currency: Currency,
  pub payment_gateway_timeout: Duration,
  pub paypal_client_id: String,

  pub contact_email: Option<String>,
  pub contact_phone: Option<String>,
  pub default_locale: Locale,
  pub page_size: u32,
}

impl AppConfig {
  /// Reads `.env` if present, then the process environment.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the config from any key lookup. Blank values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_env = |var_name: &str| lookup(var_name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let require = |var_name: &str| {
      get_env(var_name).ok_or_else(|| AppError::Config(format!("Missing environment variable '{}'", var_name)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = require("DATABASE_URL")?;
    let app_name = get_env("APP_NAME").unwrap_or_else(|| "Prostore".to_string());
    let app_base_url = get_env("APP_BASE_URL").unwrap_or_else(|| format!("http://{}:{}", server_host, server_port));

    let payment_gateway = match get_env("PAYMENT_GATEWAY").as_deref().unwrap_or("stripe") {
      gateway if gateway.eq_ignore_ascii_case("stripe") => GatewayKind::Stripe,
      gateway if gateway.eq_ignore_ascii_case("mock") => GatewayKind::Mock,
      other => {
        return Err(AppError::Config(format!(
          "Invalid PAYMENT_GATEWAY '{}': expected 'stripe' or 'mock'",
          other
        )))
      }
    };
    let stripe_secret_key = match payment_gateway {
      GatewayKind::Stripe => Some(SecretString::from(require("STRIPE_SECRET_KEY")?)),
      GatewayKind::Mock => get_env("STRIPE_SECRET_KEY").map(SecretString::from),
    };
    let stripe_api_base = get_env("STRIPE_API_BASE").unwrap_or_else(|| DEFAULT_STRIPE_API_BASE.to_string());
    let store_currency = match get_env("STORE_CURRENCY") {
      Some(code) => Currency::parse(&code).map_err(|e| AppError::Config(format!("Invalid STORE_CURRENCY: {}", e)))?,
      None => Currency::usd(),
    };
    let payment_gateway_timeout = match get_env("PAYMENT_GATEWAY_TIMEOUT_SECS") {
      Some(raw) => Duration::from_secs(positive_number(&raw, "PAYMENT_GATEWAY_TIMEOUT_SECS")?.into()),
      None => DEFAULT_GATEWAY_TIMEOUT,
    };
    let paypal_client_id = get_env("PAYPAL_CLIENT_ID").unwrap_or_else(|| "sb".to_string());

    let contact_email = get_env("CONTACT_EMAIL");
    let contact_phone = get_env("CONTACT_PHONE");
    let default_locale = match get_env("DEFAULT_LOCALE") {
      Some(raw) => raw
        .parse::<Locale>()
        .map_err(|_| AppError::Config(format!("Unsupported DEFAULT_LOCALE '{}'", raw)))?,
      None => Locale::En,
    };
    let page_size = match get_env("PAGE_SIZE") {
      Some(raw) => positive_number(&raw, "PAGE_SIZE")?,
      None => 12,
    };

    tracing::info!(
      gateway = ?payment_gateway,
      currency = %store_currency,
      %default_locale,
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      app_name,
      app_base_url,
      payment_gateway,
      stripe_secret_key,
      stripe_api_base,
      store_currency,
      payment_gateway_timeout,
      paypal_client_id,
      contact_email,
      contact_phone,
      default_locale,
      page_size,
    })
  }
}

fn positive_number(raw: &str, var_name: &str) -> Result<u32> {
  match raw.parse::<u32>() {
    Ok(n) if n > 0 => Ok(n),
    _ => Err(AppError::Config(format!(
      "Invalid {}: '{}' is not a positive integer",
      var_name, raw
    ))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use secrecy::ExposeSecret;
  use std::collections::HashMap;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| vars.get(key).cloned()
  }

  #[test]
  fn defaults_apply_when_optional_values_are_absent() {
    let config = AppConfig::from_lookup(lookup(&[
      ("DATABASE_URL", "postgres://localhost/prostore"),
      ("STRIPE_SECRET_KEY", "sk_test_123"),
    ]))
    .unwrap();

    assert_eq!(config.server_port, 8080);
    assert_eq!(config.app_name, "Prostore");
    assert_eq!(config.app_base_url, "http://127.0.0.1:8080");
    assert_eq!(config.payment_gateway, GatewayKind::Stripe);
    assert_eq!(config.stripe_secret_key.as_ref().unwrap().expose_secret(), "sk_test_123");
    assert_eq!(config.stripe_api_base, "https://api.stripe.com");
    assert_eq!(config.store_currency, Currency::usd());
    assert_eq!(config.payment_gateway_timeout, Duration::from_secs(10));
    assert_eq!(config.paypal_client_id, "sb");
    assert_eq!(config.default_locale, Locale::En);
    assert_eq!(config.page_size, 12);
    assert!(config.contact_email.is_none());
  }

  #[test]
  fn database_url_is_required() {
    let err = AppConfig::from_lookup(lookup(&[("PAYMENT_GATEWAY", "mock")])).unwrap_err();
    assert!(matches!(err, AppError::Config(msg) if msg.contains("DATABASE_URL")));
  }

  #[test]
  fn stripe_gateway_requires_a_secret_key() {
    let err = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("STRIPE_SECRET_KEY", "  ")]))
      .unwrap_err();
    assert!(matches!(err, AppError::Config(msg) if msg.contains("STRIPE_SECRET_KEY")));

    let mock = AppConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x"), ("PAYMENT_GATEWAY", "mock")]))
      .unwrap();
    assert_eq!(mock.payment_gateway, GatewayKind::Mock);
    assert!(mock.stripe_secret_key.is_none());
  }

  #[test]
  fn invalid_values_are_config_errors() {
    let base = [("DATABASE_URL", "postgres://x"), ("PAYMENT_GATEWAY", "mock")];
    for (key, value) in [
      ("SERVER_PORT", "eighty"),
      ("PAYMENT_GATEWAY", "adyen"),
      ("STORE_CURRENCY", "DOLLAR"),
      ("PAYMENT_GATEWAY_TIMEOUT_SECS", "0"),
      ("DEFAULT_LOCALE", "de"),
      ("PAGE_SIZE", "-3"),
    ] {
      let mut pairs = base.to_vec();
      pairs.push((key, value));
      let result = AppConfig::from_lookup(lookup(&pairs));
      assert!(matches!(result, Err(AppError::Config(_))), "{}={} should be rejected", key, value);
    }
  }

  #[test]
  fn currency_and_locale_overrides() {
    let config = AppConfig::from_lookup(lookup(&[
      ("DATABASE_URL", "postgres://x"),
      ("PAYMENT_GATEWAY", "mock"),
      ("STORE_CURRENCY", "eur"),
      ("DEFAULT_LOCALE", "et"),
      ("PAYMENT_GATEWAY_TIMEOUT_SECS", "3"),
      ("CONTACT_EMAIL", "info@prostore.ee"),
    ]))
    .unwrap();
    assert_eq!(config.store_currency.code(), "EUR");
    assert_eq!(config.default_locale, Locale::Et);
    assert_eq!(config.payment_gateway_timeout, Duration::from_secs(3));
    assert_eq!(config.contact_email.as_deref(), Some("info@prostore.ee"));
  }
}
