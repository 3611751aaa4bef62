use async_trait::async_trait;

use business::domain::cart_mutation::navigator::{CheckoutNavigator, CheckoutStep};

/// Sends the shopper on by printing the page of the next checkout step.
pub struct ConsoleNavigator {
    base_url: String,
}

impl ConsoleNavigator {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_of(&self, step: CheckoutStep) -> String {
        format!("{}{}", self.base_url, step.path())
    }
}

#[async_trait]
impl CheckoutNavigator for ConsoleNavigator {
    async fn proceed(&self, step: CheckoutStep) {
        tracing::info!("Navigating to checkout step {}", step);
        println!("Continue at {}", self.url_of(step));
    }
}
