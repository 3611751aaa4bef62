use async_trait::async_trait;

/// Steps of the order flow that follow the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutStep {
    ShippingAddress,
    PaymentMethod,
    PlaceOrder,
}

impl CheckoutStep {
    /// First step entered when leaving the cart.
    pub fn first() -> Self {
        CheckoutStep::ShippingAddress
    }

    pub fn next(self) -> Option<Self> {
        match self {
            CheckoutStep::ShippingAddress => Some(CheckoutStep::PaymentMethod),
            CheckoutStep::PaymentMethod => Some(CheckoutStep::PlaceOrder),
            CheckoutStep::PlaceOrder => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            CheckoutStep::ShippingAddress => "/shipping-address",
            CheckoutStep::PaymentMethod => "/payment-method",
            CheckoutStep::PlaceOrder => "/place-order",
        }
    }
}

impl std::fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutStep::ShippingAddress => write!(f, "shipping_address"),
            CheckoutStep::PaymentMethod => write!(f, "payment_method"),
            CheckoutStep::PlaceOrder => write!(f, "place_order"),
        }
    }
}

/// Router port the cart hands over to when the shopper checks out.
#[async_trait]
pub trait CheckoutNavigator: Send + Sync {
    async fn proceed(&self, step: CheckoutStep);
}
