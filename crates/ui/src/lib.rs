//! `cartwright-ui`
//!
//! Rendering and interaction for the cart widget: mount-point panels
//! (full-replace row lists carrying embedded controls), pure render
//! functions, and the click-delegating controller.

pub mod controller;
pub mod render;
pub mod surface;

pub use controller::{Click, Controller};
pub use render::{render_cart, render_products};
pub use surface::{Control, ControlKind, Mount, Panel, Row};
