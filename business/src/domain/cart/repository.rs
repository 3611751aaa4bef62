use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::SessionId;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_by_session(&self, session_id: &SessionId)
    -> Result<Option<Cart>, RepositoryError>;

    /// Stores `cart` only if it is the direct successor of the stored one:
    /// `cart.revision` must be the stored revision plus one (1 for a new cart).
    /// Otherwise fails with [`RepositoryError::Conflict`].
    async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError>;
}
