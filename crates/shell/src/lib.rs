//! `cartwright-shell`
//!
//! **Responsibility:** interactive terminal host for the cart widget.
//!
//! The shell plays the role of the page: it owns the three mount points and
//! the session store, and its command loop turns typed commands into
//! synthesized click events for the widget's container listeners.

pub mod app;

pub use app::{Reply, Shell};
