//! Black-box tests driving the shell the way a user session would.

use std::sync::Arc;

use cartwright_cart::CART_STORAGE_KEY;
use cartwright_catalog::{Catalog, Product};
use cartwright_core::SessionId;
use cartwright_session::{InMemorySessionStore, SessionStore};
use cartwright_shell::{Reply, Shell};

fn fresh_shell() -> (Shell, Arc<InMemorySessionStore>, SessionId) {
    let session = Arc::new(InMemorySessionStore::new());
    let session_id = SessionId::new();
    let shell = Shell::mount(Arc::new(Catalog::demo()), session.clone(), session_id);
    (shell, session, session_id)
}

fn cart_ids(shell: &Shell) -> Vec<u32> {
    shell
        .controller()
        .store()
        .items()
        .iter()
        .map(|p| p.id.value())
        .collect()
}

#[test]
fn add_remove_clear_walkthrough() {
    let (mut shell, _, _) = fresh_shell();

    shell.handle_line("add 1");
    shell.handle_line("add 3");
    assert_eq!(
        shell.controller().store().items(),
        &[
            Product::new(1, "Product 1", 10),
            Product::new(3, "Product 3", 30),
        ][..]
    );

    shell.handle_line("remove 1");
    assert_eq!(
        shell.controller().store().items(),
        &[Product::new(3, "Product 3", 30)][..]
    );

    shell.handle_line("clear");
    assert!(shell.controller().store().items().is_empty());
}

#[test]
fn view_renders_products_cart_and_clear_control() {
    let (mut shell, _, _) = fresh_shell();
    shell.handle_line("add 2");

    let view = shell.view();
    assert!(view.contains("Product 1 - $10 [Add to Cart]"));
    assert!(view.contains("Product 5 - $50 [Add to Cart]"));
    assert!(view.contains("Product 2 - $20 [Remove]"));
    assert!(view.contains("[Clear Cart]"));
}

#[test]
fn refresh_preserves_the_cart_within_a_session() {
    let (mut shell, _, _) = fresh_shell();
    shell.handle_line("add 1");
    shell.handle_line("add 1");

    shell.handle_line("refresh");
    assert_eq!(cart_ids(&shell), vec![1, 1]);
}

#[test]
fn a_new_mount_on_the_same_session_restores_the_cart() {
    let (mut shell, session, session_id) = fresh_shell();
    shell.handle_line("add 4");
    drop(shell);

    let shell = Shell::mount(Arc::new(Catalog::demo()), session, session_id);
    assert_eq!(cart_ids(&shell), vec![4]);
}

#[test]
fn corrupt_snapshot_mounts_an_empty_cart() {
    let session = Arc::new(InMemorySessionStore::new());
    session.save(CART_STORAGE_KEY, "{not json").unwrap();

    let shell = Shell::mount(Arc::new(Catalog::demo()), session, SessionId::new());
    assert!(cart_ids(&shell).is_empty());
}

#[test]
fn persisted_snapshot_is_the_json_item_array() {
    let (mut shell, session, _) = fresh_shell();
    shell.handle_line("add 1");
    shell.handle_line("add 3");

    let raw = session.load(CART_STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"id": 1, "name": "Product 1", "price": 10},
            {"id": 3, "name": "Product 3", "price": 30},
        ])
    );
}

#[test]
fn unknown_ids_and_malformed_tags_are_ignored() {
    let (mut shell, _, _) = fresh_shell();
    shell.handle_line("add 99");
    shell.handle_line("add banana");
    assert!(cart_ids(&shell).is_empty());
}

#[test]
fn missing_operands_yield_usage_hints() {
    let (mut shell, _, _) = fresh_shell();
    match shell.handle_line("add") {
        Reply::Message(message) => assert!(message.starts_with("usage:")),
        _ => panic!("Expected a usage message"),
    }
}

#[test]
fn quit_ends_the_session() {
    let (mut shell, _, _) = fresh_shell();
    assert_eq!(shell.handle_line("quit"), Reply::Quit);
}
