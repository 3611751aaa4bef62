use std::env;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use business::domain::cart::pricing::PricingPolicy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_decimal: {name}={value}")]
    InvalidDecimal { name: &'static str, value: String },
}

/// Load store pricing rules from environment variables
///
/// Environment variables:
/// - TAX_RATE: fraction of the items price (default: "0.15")
/// - FREE_SHIPPING_THRESHOLD: items price above which shipping is free (default: "100")
/// - FLAT_SHIPPING_PRICE: shipping charged otherwise (default: "10")
pub fn pricing_from_env() -> Result<PricingPolicy, ConfigError> {
    let defaults = PricingPolicy::default();

    Ok(PricingPolicy {
        tax_rate: decimal_or("TAX_RATE", env::var("TAX_RATE").ok(), defaults.tax_rate)?,
        free_shipping_threshold: decimal_or(
            "FREE_SHIPPING_THRESHOLD",
            env::var("FREE_SHIPPING_THRESHOLD").ok(),
            defaults.free_shipping_threshold,
        )?,
        flat_shipping: decimal_or(
            "FLAT_SHIPPING_PRICE",
            env::var("FLAT_SHIPPING_PRICE").ok(),
            defaults.flat_shipping,
        )?,
    })
}

fn decimal_or(
    name: &'static str,
    raw: Option<String>,
    default: BigDecimal,
) -> Result<BigDecimal, ConfigError> {
    match raw {
        Some(value) => BigDecimal::from_str(value.trim())
            .map_err(|_| ConfigError::InvalidDecimal { name, value }),
        None => Ok(default),
    }
}
