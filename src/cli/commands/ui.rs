//! Local Web UI command
//!
//! Serves the drag-and-drop board over HTTP.

use log::info;

use super::Context;
use taskboard::adapters::{MemoryStorage, ToastQueue};
use taskboard::api::BoardSession;
use taskboard::core::ports::TaskStorage;
use taskboard::core::services::TaskBoard;
use taskboard::server::tiny_http::serve;

/// Start the local web UI server
pub fn ui(ctx: &Context, port: Option<u16>, open: bool, ephemeral: bool) -> anyhow::Result<()> {
    let port = port.unwrap_or(ctx.config.ui.port);
    let toasts = ToastQueue::default();
    let storage: Box<dyn TaskStorage> = if ephemeral {
        info!("Ephemeral mode, changes will not be saved to disk");
        Box::new(MemoryStorage::with_tasks(ctx.storage().load()?))
    } else {
        Box::new(ctx.storage())
    };
    let board = TaskBoard::open(storage, Box::new(toasts.clone()))?;
    info!("Serving {} task(s) from {}", board.tasks().len(), ctx.data_dir.display());

    println!("Starting taskboard UI...");
    println!("Open http://localhost:{port} in your browser");
    println!();
    println!("Press Ctrl+C to stop");

    if open || ctx.config.ui.open {
        open_browser(&format!("http://localhost:{port}"));
    }

    serve(BoardSession::new(board, toasts), port)
}

fn open_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let _ = std::process::Command::new("open").arg(url).spawn();

    #[cfg(target_os = "linux")]
    let _ = std::process::Command::new("xdg-open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let _ = std::process::Command::new("cmd").args(["/c", "start", url]).spawn();
}
