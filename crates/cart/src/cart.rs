use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cartwright_catalog::Product;
use cartwright_core::{Aggregate, AggregateRoot, DomainError, Event, ProductId, SessionId};

/// Aggregate root: the session cart.
///
/// An ordered, duplicate-permitting sequence of catalog product records.
/// There is no quantity field; repetition models quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    session_id: SessionId,
    items: Vec<Product>,
    version: u64,
}

impl Cart {
    /// Create an empty cart for a session.
    pub fn empty(session_id: SessionId) -> Self {
        Self {
            session_id,
            items: Vec::new(),
            version: 0,
        }
    }

    /// Rehydrate a cart from a persisted snapshot of its item sequence.
    pub fn from_items(session_id: SessionId, items: Vec<Product>) -> Self {
        Self {
            session_id,
            items,
            version: 0,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl AggregateRoot for Cart {
    type Id = SessionId;

    fn id(&self) -> &Self::Id {
        &self.session_id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    /// The full catalog record to append (looked up by the store).
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: Clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clear {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
    Clear(Clear),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub product: Product,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemsRemoved.
///
/// Removal is a filter: every entry with the id goes, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsRemoved {
    pub product_id: ProductId,
    /// Number of entries the filter dropped.
    pub removed: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: CartCleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartCleared {
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartEvent {
    ItemAdded(ItemAdded),
    ItemsRemoved(ItemsRemoved),
    CartCleared(CartCleared),
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded(_) => "cart.item_added",
            CartEvent::ItemsRemoved(_) => "cart.items_removed",
            CartEvent::CartCleared(_) => "cart.cleared",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CartEvent::ItemAdded(e) => e.occurred_at,
            CartEvent::ItemsRemoved(e) => e.occurred_at,
            CartEvent::CartCleared(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Cart {
    type Command = CartCommand;
    type Event = CartEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CartEvent::ItemAdded(e) => {
                self.items.push(e.product.clone());
            }
            CartEvent::ItemsRemoved(e) => {
                self.items.retain(|item| item.id != e.product_id);
            }
            CartEvent::CartCleared(_) => {
                self.items.clear();
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CartCommand::AddItem(cmd) => self.handle_add(cmd),
            CartCommand::RemoveItem(cmd) => self.handle_remove(cmd),
            CartCommand::Clear(cmd) => self.handle_clear(cmd),
        }
    }
}

impl Cart {
    fn handle_add(&self, cmd: &AddItem) -> Result<Vec<CartEvent>, DomainError> {
        // The record was already resolved against the catalog by the store.
        // Duplicates are permitted; repetition models quantity.
        Ok(vec![CartEvent::ItemAdded(ItemAdded {
            product: cmd.product.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveItem) -> Result<Vec<CartEvent>, DomainError> {
        let matched = self
            .items
            .iter()
            .filter(|item| item.id == cmd.product_id)
            .count();
        if matched == 0 {
            return Ok(vec![]);
        }

        Ok(vec![CartEvent::ItemsRemoved(ItemsRemoved {
            product_id: cmd.product_id,
            removed: matched as u32,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_clear(&self, cmd: &Clear) -> Result<Vec<CartEvent>, DomainError> {
        if self.items.is_empty() {
            return Ok(vec![]);
        }

        Ok(vec![CartEvent::CartCleared(CartCleared {
            occurred_at: cmd.occurred_at,
        })])
    }
}
