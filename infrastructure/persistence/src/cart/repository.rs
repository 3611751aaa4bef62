use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::SessionId;

/// Session carts kept in process memory. Lost on restart.
#[derive(Default)]
pub struct CartRepositoryInMemory {
    carts: RwLock<HashMap<SessionId, Cart>>,
}

impl CartRepositoryInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for CartRepositoryInMemory {
    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Option<Cart>, RepositoryError> {
        Ok(self.carts.read().await.get(session_id).cloned())
    }

    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError> {
        let mut carts = self.carts.write().await;
        let stored_revision = carts.get(session_id).map_or(0, |c| c.revision);
        if cart.revision != stored_revision + 1 {
            tracing::debug!(
                "Rejected cart of session {} at revision {} (stored {})",
                session_id,
                cart.revision,
                stored_revision
            );
            return Err(RepositoryError::Conflict);
        }

        carts.insert(session_id.clone(), cart.clone());
        Ok(())
    }
}
