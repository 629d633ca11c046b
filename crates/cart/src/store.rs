use std::sync::Arc;

use chrono::Utc;

use cartwright_catalog::{Catalog, Product};
use cartwright_core::{Event, ProductId, SessionId, execute};
use cartwright_session::SessionStore;

use crate::cart::{AddItem, Cart, CartCommand, CartEvent, Clear, RemoveItem};

/// Session-scoped storage key holding the serialized cart snapshot.
pub const CART_STORAGE_KEY: &str = "cart";

/// Cart service: owns the aggregate and keeps the persisted snapshot in sync.
///
/// Every mutation is synchronous and single-threaded: look up, execute,
/// re-persist. The persisted copy is fully overwritten on each write, so the
/// store and its snapshot are never out of sync for longer than one call.
pub struct CartStore {
    catalog: Arc<Catalog>,
    session: Arc<dyn SessionStore>,
    cart: Cart,
}

impl CartStore {
    /// Restore the cart persisted for this session, or start empty.
    ///
    /// Missing or unparseable snapshots fall back to an empty cart; this is
    /// the sole recovery path for corrupt persisted state and is never
    /// surfaced to the user.
    pub fn initialize(
        catalog: Arc<Catalog>,
        session: Arc<dyn SessionStore>,
        session_id: SessionId,
    ) -> Self {
        let items = match session.load(CART_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Product>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(%session_id, "discarding unparseable cart snapshot: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(%session_id, "failed to read cart snapshot: {err}");
                Vec::new()
            }
        };

        Self {
            catalog,
            session,
            cart: Cart::from_items(session_id, items),
        }
    }

    /// Append the catalog record with this id to the cart.
    ///
    /// An id absent from the catalog is ignored with a warning; absent data is
    /// never inserted.
    pub fn add(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        let Some(product) = self.catalog.find(product_id) else {
            tracing::warn!(%product_id, "ignoring add for unknown product id");
            return Vec::new();
        };

        let product = product.clone();
        self.run(CartCommand::AddItem(AddItem {
            product,
            occurred_at: Utc::now(),
        }))
    }

    /// Remove every cart entry with this id (filter, not single delete).
    pub fn remove(&mut self, product_id: ProductId) -> Vec<CartEvent> {
        self.run(CartCommand::RemoveItem(RemoveItem {
            product_id,
            occurred_at: Utc::now(),
        }))
    }

    /// Reset the cart to empty.
    pub fn clear(&mut self) -> Vec<CartEvent> {
        self.run(CartCommand::Clear(Clear {
            occurred_at: Utc::now(),
        }))
    }

    /// Serialize the current sequence, fully overwriting the prior snapshot.
    ///
    /// Storage failures degrade silently: the in-memory cart stays correct and
    /// the next successful write repairs the snapshot.
    pub fn persist(&self) {
        let snapshot = match serde_json::to_string(self.cart.items()) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!("failed to serialize cart snapshot: {err}");
                return;
            }
        };

        if let Err(err) = self.session.save(CART_STORAGE_KEY, &snapshot) {
            tracing::warn!("failed to write cart snapshot: {err}");
        }
    }

    pub fn items(&self) -> &[Product] {
        self.cart.items()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session_id(&self) -> SessionId {
        self.cart.session_id()
    }

    /// Execute a command against the aggregate, then re-persist.
    ///
    /// Persistence happens even when no events were emitted: a mutation
    /// invalidates the snapshot regardless of whether it changed anything.
    fn run(&mut self, command: CartCommand) -> Vec<CartEvent> {
        let events = match execute(&mut self.cart, &command) {
            Ok(events) => events,
            Err(err) => {
                tracing::error!("cart command rejected: {err}");
                Vec::new()
            }
        };

        for event in &events {
            tracing::debug!(event_type = event.event_type(), "cart event applied");
        }

        self.persist();
        events
    }
}
