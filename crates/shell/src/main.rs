use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;

use cartwright_catalog::Catalog;
use cartwright_core::SessionId;
use cartwright_session::{InMemorySessionStore, SessionStore};
use cartwright_shell::{Reply, Shell};

fn main() -> anyhow::Result<()> {
    cartwright_observability::init();

    let catalog = Arc::new(Catalog::demo());
    let session: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    let session_id = SessionId::new();
    tracing::info!(%session_id, "session started");

    let mut shell = Shell::mount(catalog, session, session_id);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", shell.view())?;
    write!(out, "> ")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read input")?;
        match shell.handle_line(&line) {
            Reply::Screen(screen) => writeln!(out, "{screen}")?,
            Reply::Message(message) => writeln!(out, "{message}")?,
            Reply::Quit => break,
        }
        write!(out, "> ")?;
        out.flush()?;
    }

    tracing::info!(%session_id, "session ended");
    Ok(())
}
