//! Click delegation: container-level listeners driving cart mutations.

use core::str::FromStr;

use cartwright_cart::CartStore;
use cartwright_core::ProductId;

use crate::render::{render_cart, render_products};
use crate::surface::{Control, ControlKind, Mount};

/// A click bubbled up to a container listener.
///
/// `target` is the originating control, or `None` when the click landed on
/// the container itself rather than on a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    target: Option<Control>,
}

impl Click {
    /// A click originating from a control.
    pub fn on(control: Control) -> Self {
        Self {
            target: Some(control),
        }
    }

    /// A click that missed every control.
    pub fn outside() -> Self {
        Self { target: None }
    }

    pub fn target(&self) -> Option<&Control> {
        self.target.as_ref()
    }
}

/// Binds clicks to cart mutations and re-renders afterward.
///
/// One listener per container inspects the originating control instead of
/// each row carrying its own handler; rows are recreated on every render, so
/// per-row handlers would be lost.
pub struct Controller {
    store: CartStore,
    cart_list: Mount,
}

impl Controller {
    /// Wire the widget: draw the product list once and the restored cart.
    ///
    /// The product panel is not retained; the catalog never changes, so it is
    /// never redrawn.
    pub fn mount(store: CartStore, product_list: &Mount, cart_list: Mount) -> Self {
        render_products(store.catalog(), product_list);
        render_cart(store.items(), &cart_list);
        Self { store, cart_list }
    }

    /// Container listener for the product list.
    pub fn on_product_list_click(&mut self, click: &Click) {
        let Some(id) = target_id(click, ControlKind::AddToCart) else {
            return;
        };
        self.store.add(id);
        self.rerender_cart();
    }

    /// Container listener for the cart list.
    pub fn on_cart_list_click(&mut self, click: &Click) {
        let Some(id) = target_id(click, ControlKind::RemoveFromCart) else {
            return;
        };
        self.store.remove(id);
        self.rerender_cart();
    }

    /// Listener for the dedicated clear-cart control.
    pub fn on_clear_click(&mut self) {
        self.store.clear();
        self.rerender_cart();
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    fn rerender_cart(&self) {
        render_cart(self.store.items(), &self.cart_list);
    }
}

/// Delegated target inspection: accept only clicks originating from a control
/// of `kind`, and parse its embedded id tag as an integer.
fn target_id(click: &Click, kind: ControlKind) -> Option<ProductId> {
    let control = click.target()?;
    if control.kind() != kind {
        return None;
    }

    let raw = control.id()?;
    match ProductId::from_str(raw) {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::warn!(raw, "ignoring click with unparseable product id: {err}");
            None
        }
    }
}
