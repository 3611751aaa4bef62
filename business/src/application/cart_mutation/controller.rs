use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::cart_mutation::in_flight::InFlightItems;
use crate::domain::cart::model::{Cart, CartItem, compute_total_item_count};
use crate::domain::cart::summary::OrderSummary;
use crate::domain::cart_mutation::errors::CartMutationError;
use crate::domain::cart_mutation::navigator::{CheckoutNavigator, CheckoutStep};
use crate::domain::cart_mutation::notifier::Notifier;
use crate::domain::cart_mutation::policy::BusyPolicy;
use crate::domain::cart_mutation::store::CartStore;
use crate::domain::cart_mutation::use_cases::checkout::CheckoutUseCase;
use crate::domain::cart_mutation::use_cases::decrement::DecrementCartItemUseCase;
use crate::domain::cart_mutation::use_cases::increment::IncrementCartItemUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mutation {
    Add,
    Remove,
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mutation::Add => write!(f, "add"),
            Mutation::Remove => write!(f, "remove"),
        }
    }
}

/// Drives the cart view of one session.
///
/// The controller never edits the cart itself: each quantity change is a call
/// to the [`CartStore`] and the store's answer replaces the local snapshot.
/// Calls for the same product are serialized; calls for different products
/// run side by side. Failures are reported through the [`Notifier`] and leave
/// the snapshot as it was.
pub struct CartMutationController {
    store: Arc<dyn CartStore>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn CheckoutNavigator>,
    logger: Arc<dyn Logger>,
    in_flight: InFlightItems,
    snapshot: RwLock<Option<Cart>>,
    checkout_pending: AtomicBool,
}

impl CartMutationController {
    pub fn new(
        store: Arc<dyn CartStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn CheckoutNavigator>,
        logger: Arc<dyn Logger>,
        policy: BusyPolicy,
    ) -> Self {
        Self {
            store,
            notifier,
            navigator,
            logger,
            in_flight: InFlightItems::new(policy),
            snapshot: RwLock::new(None),
            checkout_pending: AtomicBool::new(false),
        }
    }

    /// Starts from a cart that was already fetched, e.g. during page render.
    pub fn with_snapshot(self, cart: Option<Cart>) -> Self {
        Self {
            snapshot: RwLock::new(cart),
            ..self
        }
    }

    pub fn snapshot(&self) -> Option<Cart> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_busy(&self, product_id: &ProductId) -> bool {
        self.in_flight.is_busy(product_id)
    }

    pub fn busy_items(&self) -> Vec<ProductId> {
        self.in_flight.busy_items()
    }

    pub fn is_checkout_pending(&self) -> bool {
        self.checkout_pending.load(Ordering::Acquire)
    }

    pub fn total_item_count(&self) -> u32 {
        compute_total_item_count(self.snapshot().as_ref())
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_cart(self.snapshot().as_ref())
    }

    /// Reloads the snapshot from the store. The loaded cart replaces the
    /// snapshot whatever its revision, so a store that restarted its
    /// revision counter is picked up.
    pub async fn refresh(&self) -> Result<Option<Cart>, CartMutationError> {
        match self.store.get_cart().await {
            Ok(cart) => {
                *self
                    .snapshot
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = cart.clone();
                Ok(cart)
            }
            Err(failure) => Err(self.report(CartMutationError::from(failure), "refresh")),
        }
    }

    pub async fn increment(&self, item: &CartItem) -> Result<Cart, CartMutationError> {
        self.mutate(item, Mutation::Add).await
    }

    pub async fn decrement(&self, item: &CartItem) -> Result<Cart, CartMutationError> {
        self.mutate(item, Mutation::Remove).await
    }

    pub async fn checkout(&self) -> Result<CheckoutStep, CartMutationError> {
        if self.checkout_pending.swap(true, Ordering::AcqRel) {
            self.logger.warn("Checkout requested while one is already pending");
            return Err(CartMutationError::CheckoutPending);
        }
        let _pending = PendingFlag(&self.checkout_pending);

        if self.snapshot().is_none_or(|cart| cart.is_empty()) {
            return Err(self.report(CartMutationError::EmptyCart, "checkout"));
        }

        let step = CheckoutStep::first();
        self.logger
            .info(&format!("Proceeding to checkout step {}", step));
        self.navigator.proceed(step).await;
        Ok(step)
    }

    async fn mutate(&self, item: &CartItem, mutation: Mutation) -> Result<Cart, CartMutationError> {
        let product_id = &item.product_id;
        let _claim = match self.in_flight.acquire(product_id).await {
            Ok(claim) => claim,
            Err(err) => {
                self.logger.warn(&format!(
                    "Ignoring {} of {}: a request is already in flight",
                    mutation, product_id
                ));
                return Err(err);
            }
        };

        let was_in_cart = self
            .snapshot()
            .is_some_and(|cart| cart.item(product_id).is_some());
        self.logger
            .debug(&format!("Dispatching {} of {}", mutation, product_id));

        let result = match mutation {
            Mutation::Add => self.store.add_item(item).await,
            Mutation::Remove => self.store.remove_item(product_id).await,
        };

        match result {
            Ok(cart) => {
                self.apply(cart.clone());
                if mutation == Mutation::Add && !was_in_cart {
                    self.notifier
                        .notify_success(&format!("{} added to cart", item.name));
                }
                Ok(cart)
            }
            Err(failure) => {
                let context = format!("{} of {}", mutation, product_id);
                Err(self.report(CartMutationError::from(failure), &context))
            }
        }
    }

    /// Replaces the snapshot with a mutation reply unless the reply is older
    /// than what is shown.
    fn apply(&self, cart: Cart) {
        let mut snapshot = self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let shown_revision = snapshot.as_ref().map(|current| current.revision);
        match shown_revision {
            Some(shown) if cart.revision < shown => {
                self.logger.debug(&format!(
                    "Discarding cart revision {} older than shown revision {}",
                    cart.revision, shown
                ));
            }
            _ => *snapshot = Some(cart),
        }
    }

    fn report(&self, err: CartMutationError, context: &str) -> CartMutationError {
        let message = err.user_message();
        self.logger
            .error(&format!("Cart {} failed: {} ({})", context, message, err));
        self.notifier.notify_error(&message);
        err
    }
}

struct PendingFlag<'a>(&'a AtomicBool);

impl Drop for PendingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[async_trait]
impl IncrementCartItemUseCase for CartMutationController {
    async fn execute(&self, item: &CartItem) -> Result<Cart, CartMutationError> {
        self.increment(item).await
    }
}

#[async_trait]
impl DecrementCartItemUseCase for CartMutationController {
    async fn execute(&self, item: &CartItem) -> Result<Cart, CartMutationError> {
        self.decrement(item).await
    }
}

#[async_trait]
impl CheckoutUseCase for CartMutationController {
    async fn execute(&self) -> Result<CheckoutStep, CartMutationError> {
        self.checkout().await
    }
}
