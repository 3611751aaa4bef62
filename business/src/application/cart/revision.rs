use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::pricing::PricingPolicy;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::SessionId;

pub(crate) const MAX_ATTEMPTS: usize = 3;

/// Read-modify-write of a session cart. The mutation runs against the latest
/// stored cart; a concurrent writer makes the save conflict, in which case the
/// cart is re-read and the mutation replayed.
pub(crate) async fn mutate_cart<F>(
    repository: &dyn CartRepository,
    pricing: &PricingPolicy,
    logger: &dyn Logger,
    session_id: &SessionId,
    mut mutation: F,
) -> Result<Cart, CartError>
where
    F: FnMut(Option<Cart>) -> Result<Cart, CartError> + Send,
{
    let mut attempt = 1;
    loop {
        let current = repository.find_by_session(session_id).await?;
        let base_revision = current.as_ref().map_or(0, |c| c.revision);

        let mut cart = mutation(current)?;
        cart.reprice(pricing);
        cart.revision = base_revision + 1;

        match repository.save(session_id, &cart).await {
            Ok(()) => return Ok(cart),
            Err(RepositoryError::Conflict) if attempt < MAX_ATTEMPTS => {
                logger.warn(&format!(
                    "Cart of session {} changed concurrently, retrying (attempt {})",
                    session_id, attempt
                ));
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
