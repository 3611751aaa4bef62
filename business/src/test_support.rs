//! Mocks and fakes shared by the unit tests of this crate.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;
use tokio::sync::Semaphore;

use crate::domain::cart::model::{Cart, CartItem, NewCartItemProps};
use crate::domain::cart::pricing::PricingPolicy;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart_mutation::navigator::{CheckoutNavigator, CheckoutStep};
use crate::domain::cart_mutation::notifier::Notifier;
use crate::domain::cart_mutation::store::{CartStore, StoreFailure};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::search::ProductFilter;
use crate::domain::shared::value_objects::{ProductId, SessionId};

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        async fn search(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn find_by_session(&self, session_id: &SessionId) -> Result<Option<Cart>, RepositoryError>;
        async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn product(id: &str, price: &str, count_in_stock: u32) -> Product {
    Product::new(NewProductProps {
        id: ProductId::new(id),
        slug: id.to_string(),
        name: format!("Product {}", id),
        category: "Shirts".to_string(),
        image: format!("/images/{}.jpg", id),
        price: BigDecimal::from_str(price).unwrap(),
        rating: BigDecimal::from(0),
        num_reviews: 0,
        count_in_stock,
        created_at: chrono::DateTime::<chrono::Utc>::default(),
    })
    .unwrap()
}

pub fn cart_item(id: &str, quantity: u32) -> CartItem {
    CartItem::new(NewCartItemProps {
        product_id: ProductId::new(id),
        slug: id.to_string(),
        name: format!("Product {}", id),
        image: format!("/images/{}.jpg", id),
        price: BigDecimal::from_str("12.50").unwrap(),
        quantity,
    })
    .unwrap()
}

/// A priced cart at the given revision.
pub fn cart_of(items: Vec<CartItem>, revision: u64) -> Cart {
    let mut cart = Cart {
        items,
        revision,
        ..Cart::empty()
    };
    cart.reprice(&PricingPolicy::default());
    cart
}

/// Yields to the runtime until `condition` holds.
pub async fn eventually(condition: impl Fn() -> bool) {
    for _ in 0..1_000 {
        if condition() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}

/// Cart store that applies mutations to a cart it keeps itself. A gated
/// store holds every call until a permit is released.
pub struct FakeCartStore {
    cart: Mutex<Option<Cart>>,
    next_failure: Mutex<Option<StoreFailure>>,
    gate: Option<Semaphore>,
    dispatched: AtomicUsize,
    active: Mutex<HashMap<ProductId, usize>>,
    max_active: Mutex<HashMap<ProductId, usize>>,
}

impl FakeCartStore {
    pub fn new(initial: Option<Cart>) -> Self {
        Self {
            cart: Mutex::new(initial),
            next_failure: Mutex::new(None),
            gate: None,
            dispatched: AtomicUsize::new(0),
            active: Mutex::new(HashMap::new()),
            max_active: Mutex::new(HashMap::new()),
        }
    }

    pub fn gated(initial: Option<Cart>) -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::new(initial)
        }
    }

    pub fn current(&self) -> Option<Cart> {
        self.cart.lock().unwrap().clone()
    }

    pub fn fail_next(&self, failure: StoreFailure) {
        *self.next_failure.lock().unwrap() = Some(failure);
    }

    pub fn release(&self, permits: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(permits);
        }
    }

    pub fn dispatched(&self) -> usize {
        self.dispatched.load(Ordering::SeqCst)
    }

    pub fn max_concurrent_for(&self, product_id: &ProductId) -> usize {
        self.max_active
            .lock()
            .unwrap()
            .get(product_id)
            .copied()
            .unwrap_or(0)
    }

    async fn run<F>(&self, product_id: &ProductId, mutation: F) -> Result<Cart, StoreFailure>
    where
        F: FnOnce(&mut Cart) -> Result<(), StoreFailure> + Send,
    {
        self.dispatched.fetch_add(1, Ordering::SeqCst);
        self.enter(product_id);
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        let outcome = self.apply(mutation);
        self.leave(product_id);
        outcome
    }

    fn apply<F>(&self, mutation: F) -> Result<Cart, StoreFailure>
    where
        F: FnOnce(&mut Cart) -> Result<(), StoreFailure>,
    {
        if let Some(failure) = self.next_failure.lock().unwrap().take() {
            return Err(failure);
        }
        let mut stored = self.cart.lock().unwrap();
        let mut cart = stored.clone().unwrap_or_default();
        mutation(&mut cart)?;
        cart.reprice(&PricingPolicy::default());
        cart.revision += 1;
        *stored = Some(cart.clone());
        Ok(cart)
    }

    fn enter(&self, product_id: &ProductId) {
        let mut active = self.active.lock().unwrap();
        let count = active.entry(product_id.clone()).or_insert(0);
        *count += 1;
        let mut max_active = self.max_active.lock().unwrap();
        let max = max_active.entry(product_id.clone()).or_insert(0);
        *max = (*max).max(*count);
    }

    fn leave(&self, product_id: &ProductId) {
        let mut active = self.active.lock().unwrap();
        if let Some(count) = active.get_mut(product_id) {
            *count -= 1;
        }
    }
}

#[async_trait]
impl CartStore for FakeCartStore {
    async fn add_item(&self, item: &CartItem) -> Result<Cart, StoreFailure> {
        self.run(&item.product_id, |cart| {
            cart.add_unit(item.clone());
            Ok(())
        })
        .await
    }

    async fn remove_item(&self, product_id: &ProductId) -> Result<Cart, StoreFailure> {
        self.run(product_id, |cart| {
            cart.remove_unit(product_id)
                .map(|_| ())
                .map_err(|e| StoreFailure::with_message(e.user_message()))
        })
        .await
    }

    async fn get_cart(&self) -> Result<Option<Cart>, StoreFailure> {
        if let Some(failure) = self.next_failure.lock().unwrap().take() {
            return Err(failure);
        }
        Ok(self.current())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    errors: Mutex<Vec<String>>,
    successes: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn notify_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }
}

/// Records every step it is sent to. A gated navigator does not return from
/// `proceed` until released.
#[derive(Default)]
pub struct RecordingNavigator {
    steps: Mutex<Vec<CheckoutStep>>,
    gate: Option<Semaphore>,
}

impl RecordingNavigator {
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    pub fn steps(&self) -> Vec<CheckoutStep> {
        self.steps.lock().unwrap().clone()
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }
}

#[async_trait]
impl CheckoutNavigator for RecordingNavigator {
    async fn proceed(&self, step: CheckoutStep) {
        self.steps.lock().unwrap().push(step);
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
    }
}
