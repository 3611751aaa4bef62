use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::cart_mutation::errors::CartMutationError;
use crate::domain::cart_mutation::policy::BusyPolicy;
use crate::domain::shared::value_objects::ProductId;

struct Slot {
    gate: Arc<AsyncMutex<()>>,
    /// Requests that hold or wait for `gate`.
    holders: usize,
}

/// Per-product pending state. A product is busy from the moment a request for
/// it is accepted until the last queued request on it settles. Requests on the
/// same product pass one at a time, in arrival order.
pub struct InFlightItems {
    policy: BusyPolicy,
    slots: Mutex<HashMap<ProductId, Slot>>,
}

impl InFlightItems {
    pub fn new(policy: BusyPolicy) -> Self {
        Self {
            policy,
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> BusyPolicy {
        self.policy
    }

    pub fn is_busy(&self, product_id: &ProductId) -> bool {
        self.lock_slots().contains_key(product_id)
    }

    pub fn busy_items(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self.lock_slots().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Waits until `product_id` is free and claims it. With
    /// [`BusyPolicy::Reject`] a busy product fails right away instead.
    pub async fn acquire(
        &self,
        product_id: &ProductId,
    ) -> Result<InFlightGuard<'_>, CartMutationError> {
        let gate = {
            let mut slots = self.lock_slots();
            match slots.entry(product_id.clone()) {
                Entry::Occupied(_) if self.policy == BusyPolicy::Reject => {
                    return Err(CartMutationError::ItemBusy(product_id.clone()));
                }
                Entry::Occupied(mut entry) => {
                    let slot = entry.get_mut();
                    slot.holders += 1;
                    Arc::clone(&slot.gate)
                }
                Entry::Vacant(entry) => {
                    let gate = Arc::new(AsyncMutex::new(()));
                    entry.insert(Slot {
                        gate: Arc::clone(&gate),
                        holders: 1,
                    });
                    gate
                }
            }
        };

        // Registered before waiting so a dropped waiter still releases its slot.
        let registration = Registration {
            items: self,
            product_id: product_id.clone(),
        };
        let permit = gate.lock_owned().await;

        Ok(InFlightGuard {
            _permit: permit,
            _registration: registration,
        })
    }

    fn release(&self, product_id: &ProductId) {
        let mut slots = self.lock_slots();
        if let Some(slot) = slots.get_mut(product_id) {
            slot.holders = slot.holders.saturating_sub(1);
            if slot.holders == 0 {
                slots.remove(product_id);
            }
        }
    }

    fn lock_slots(&self) -> MutexGuard<'_, HashMap<ProductId, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct Registration<'a> {
    items: &'a InFlightItems,
    product_id: ProductId,
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.items.release(&self.product_id);
    }
}

/// Exclusive claim on one product. Dropping it lets the next queued request through.
pub struct InFlightGuard<'a> {
    // Field order matters: the permit is released before the slot is unregistered.
    _permit: OwnedMutexGuard<()>,
    _registration: Registration<'a>,
}
