//! Cart domain module.
//!
//! Business rules for the session cart: the `Cart` aggregate (pure
//! command/event logic) and the `CartStore` service that binds it to the
//! catalog and to session-scoped persistence.

pub mod cart;
pub mod store;

pub use cart::{
    AddItem, Cart, CartCleared, CartCommand, CartEvent, Clear, ItemAdded, ItemsRemoved, RemoveItem,
};
pub use store::{CART_STORAGE_KEY, CartStore};
