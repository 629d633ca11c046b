//! The shell application: mount-point ownership and the command loop.

use std::sync::Arc;

use cartwright_cart::CartStore;
use cartwright_catalog::Catalog;
use cartwright_core::SessionId;
use cartwright_session::SessionStore;
use cartwright_ui::{Click, Control, ControlKind, Controller, Mount, Panel, Row};

const HELP: &str = "\
commands:
  add <id>      add the product with this id to the cart
  remove <id>   remove every cart entry with this id
  clear         empty the cart
  show          redraw the current view
  refresh       reload the widget from session storage
  quit          end the session";

/// Outcome of one command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Redraw: the full widget view.
    Screen(String),
    /// A plain message (help text, usage hints).
    Message(String),
    /// End the session.
    Quit,
}

/// Interactive host for the cart widget.
///
/// Owns the externally-provided pieces the widget contracts on: the three
/// mount points and the session store. `refresh` rebuilds the widget against
/// the same session store, the shell's analog of a page reload.
pub struct Shell {
    catalog: Arc<Catalog>,
    session: Arc<dyn SessionStore>,
    session_id: SessionId,
    controller: Controller,
    product_list: Mount,
    cart_list: Mount,
    clear_control: Mount,
}

impl Shell {
    /// Build the widget against a session store (fresh or carried over).
    pub fn mount(
        catalog: Arc<Catalog>,
        session: Arc<dyn SessionStore>,
        session_id: SessionId,
    ) -> Self {
        let product_list = Panel::new().into_mount();
        let cart_list = Panel::new().into_mount();
        let clear_control = Panel::new().into_mount();

        // The clear control is static markup: drawn here, never re-rendered.
        if let Ok(mut panel) = clear_control.write() {
            panel.replace(vec![Row::new("", Control::new(ControlKind::ClearCart, None))]);
        }

        let store = CartStore::initialize(catalog.clone(), session.clone(), session_id);
        let controller = Controller::mount(store, &product_list, cart_list.clone());

        Self {
            catalog,
            session,
            session_id,
            controller,
            product_list,
            cart_list,
            clear_control,
        }
    }

    /// Simulate a page reload: tear the widget down and re-mount it against
    /// the same session store.
    pub fn refresh(&mut self) {
        *self = Self::mount(self.catalog.clone(), self.session.clone(), self.session_id);
    }

    /// Apply one command line.
    ///
    /// `add`/`remove` keep the operand as a raw tag; the controller performs
    /// the integer parse, exactly as it would for a rendered control.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => Reply::Message(String::new()),
            Some("add") => match parts.next() {
                Some(raw) => {
                    let click = Click::on(Control::new(
                        ControlKind::AddToCart,
                        Some(raw.to_string()),
                    ));
                    self.controller.on_product_list_click(&click);
                    Reply::Screen(self.view())
                }
                None => Reply::Message("usage: add <product-id>".to_string()),
            },
            Some("remove") => match parts.next() {
                Some(raw) => {
                    let click = Click::on(Control::new(
                        ControlKind::RemoveFromCart,
                        Some(raw.to_string()),
                    ));
                    self.controller.on_cart_list_click(&click);
                    Reply::Screen(self.view())
                }
                None => Reply::Message("usage: remove <product-id>".to_string()),
            },
            Some("clear") => {
                self.controller.on_clear_click();
                Reply::Screen(self.view())
            }
            Some("show") => Reply::Screen(self.view()),
            Some("refresh") => {
                self.refresh();
                Reply::Screen(self.view())
            }
            Some("help") => Reply::Message(HELP.to_string()),
            Some("quit") | Some("exit") => Reply::Quit,
            Some(other) => Reply::Message(format!("unknown command: {other} (try 'help')")),
        }
    }

    /// Current widget view: all three mount points, product list first.
    pub fn view(&self) -> String {
        let products = read_text(&self.product_list);
        let cart = read_text(&self.cart_list);
        let clear = read_text(&self.clear_control);

        let cart = if cart.is_empty() {
            "(empty)".to_string()
        } else {
            cart
        };
        format!("Products:\n{products}\n\nCart:\n{cart}\n\n{clear}")
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }
}

fn read_text(mount: &Mount) -> String {
    mount.read().map(|panel| panel.to_text()).unwrap_or_default()
}
