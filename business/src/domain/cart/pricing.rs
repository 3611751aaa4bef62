use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;

use super::model::CartItem;

/// Derived price totals of a cart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartTotals {
    pub items_price: BigDecimal,
    pub tax_price: BigDecimal,
    pub shipping_price: BigDecimal,
    pub total_price: BigDecimal,
}

/// Store-side pricing rules applied after every cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPolicy {
    pub tax_rate: BigDecimal,
    /// Orders strictly above this subtotal ship for free.
    pub free_shipping_threshold: BigDecimal,
    pub flat_shipping: BigDecimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: hundredths(15),
            free_shipping_threshold: BigDecimal::from(100),
            flat_shipping: BigDecimal::from(10),
        }
    }
}

impl PricingPolicy {
    pub fn price(&self, items: &[CartItem]) -> CartTotals {
        let subtotal = items
            .iter()
            .fold(BigDecimal::zero(), |acc, item| acc + item.line_total());
        let items_price = round2(&subtotal);

        let shipping_price = if items.is_empty() || items_price > self.free_shipping_threshold {
            BigDecimal::zero()
        } else {
            round2(&self.flat_shipping)
        };
        let tax_price = round2(&(&self.tax_rate * &items_price));
        let total_price = round2(&(&items_price + &tax_price + &shipping_price));

        CartTotals {
            items_price,
            tax_price,
            shipping_price,
            total_price,
        }
    }
}

/// Rounds half-up to two decimal places.
pub fn round2(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

fn hundredths(value: i64) -> BigDecimal {
    BigDecimal::from(value) / BigDecimal::from(100)
}
