//! Render functions: project catalog and cart state into panel rows.

use cartwright_catalog::{Catalog, Product};

use crate::surface::{Control, ControlKind, Mount, Row};

fn product_row(product: &Product, kind: ControlKind) -> Row {
    Row::new(
        format!("{} - ${}", product.name, product.price),
        Control::new(kind, Some(product.id.to_string())),
    )
}

/// Draw one row per catalog entry, each carrying an add-to-cart control
/// tagged with the product's id.
///
/// The catalog never changes, so this runs exactly once at startup.
pub fn render_products(catalog: &Catalog, target: &Mount) {
    let rows = catalog
        .iter()
        .map(|product| product_row(product, ControlKind::AddToCart))
        .collect();
    replace(target, rows);
}

/// Redraw the cart list from scratch: one row per cart entry (duplicates
/// included), each carrying a removal control.
///
/// Prior content is fully replaced, so the visual order always mirrors the
/// cart sequence's insertion order, front to back.
pub fn render_cart(items: &[Product], target: &Mount) {
    let rows = items
        .iter()
        .map(|product| product_row(product, ControlKind::RemoveFromCart))
        .collect();
    replace(target, rows);
}

fn replace(target: &Mount, rows: Vec<Row>) {
    match target.write() {
        Ok(mut panel) => panel.replace(rows),
        Err(_) => tracing::warn!("mount lock poisoned; skipping render"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Panel;
    use cartwright_core::ProductId;

    #[test]
    fn render_products_mirrors_catalog_order() {
        let catalog = Catalog::demo();
        let mount = Panel::new().into_mount();

        render_products(&catalog, &mount);

        let panel = mount.read().unwrap();
        assert_eq!(panel.rows().len(), 5);
        assert_eq!(panel.rows()[0].label(), "Product 1 - $10");
        assert_eq!(panel.rows()[4].label(), "Product 5 - $50");
        assert_eq!(panel.rows()[2].control().id(), Some("3"));
        assert_eq!(panel.rows()[2].control().kind(), ControlKind::AddToCart);
    }

    #[test]
    fn render_cart_includes_duplicate_entries() {
        let catalog = Catalog::demo();
        let items = vec![
            catalog.find(ProductId::new(2)).unwrap().clone(),
            catalog.find(ProductId::new(1)).unwrap().clone(),
            catalog.find(ProductId::new(2)).unwrap().clone(),
        ];
        let mount = Panel::new().into_mount();

        render_cart(&items, &mount);

        let panel = mount.read().unwrap();
        let labels: Vec<&str> = panel.rows().iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec!["Product 2 - $20", "Product 1 - $10", "Product 2 - $20"]
        );
        assert!(
            panel
                .rows()
                .iter()
                .all(|r| r.control().kind() == ControlKind::RemoveFromCart)
        );
    }

    #[test]
    fn render_cart_fully_replaces_prior_content() {
        let catalog = Catalog::demo();
        let mount = Panel::new().into_mount();

        render_cart(&[catalog.find(ProductId::new(1)).unwrap().clone()], &mount);
        render_cart(&[], &mount);

        assert!(mount.read().unwrap().is_empty());
    }
}
