//! Mount points and the visual row model.

use std::sync::{Arc, RwLock};

/// What an embedded control does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    AddToCart,
    RemoveFromCart,
    ClearCart,
}

impl ControlKind {
    /// Visible caption of the control.
    pub fn caption(&self) -> &'static str {
        match self {
            ControlKind::AddToCart => "Add to Cart",
            ControlKind::RemoveFromCart => "Remove",
            ControlKind::ClearCart => "Clear Cart",
        }
    }
}

/// A control embedded in a rendered row.
///
/// The product id travels as a raw string tag (the rendered form); the
/// controller parses it back to an integer on click. The clear control
/// carries no tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    kind: ControlKind,
    id: Option<String>,
}

impl Control {
    pub fn new(kind: ControlKind, id: Option<String>) -> Self {
        Self { kind, id }
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    /// Raw id tag, when the control carries one.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// One visual row: display text plus its embedded control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    label: String,
    control: Control,
}

impl Row {
    pub fn new(label: impl Into<String>, control: Control) -> Self {
        Self {
            label: label.into(),
            control,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn control(&self) -> &Control {
        &self.control
    }
}

/// A mount point: a list surface whose content is replaced wholesale on each
/// render (no diffing, no incremental patching).
#[derive(Debug, Default)]
pub struct Panel {
    rows: Vec<Row>,
}

/// Shared handle to a panel, injected into renderer and controller.
pub type Mount = Arc<RwLock<Panel>>;

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the panel in a shareable mount handle.
    pub fn into_mount(self) -> Mount {
        Arc::new(RwLock::new(self))
    }

    /// Replace the entire visible content with `rows`.
    pub fn replace(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Plain-text projection of the current rows, one line per row.
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                if row.label().is_empty() {
                    format!("[{}]", row.control().kind().caption())
                } else {
                    format!("{} [{}]", row.label(), row.control().kind().caption())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
