//! # Storefront Library
//!
//! Session shell around `storefront-core`: owns the per-session state,
//! exposes commands, and runs the stdio command loop.
//!
//! ## Module Organization
//! ```text
//! storefront_lib/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── invoke.rs       ◄─── JSON command routing
//! ├── state/
//! │   ├── mod.rs      ◄─── Session + state type exports
//! │   ├── cart.rs     ◄─── Shared cart (Arc<Mutex<Cart>>)
//! │   ├── catalog.rs  ◄─── Read-only catalog
//! │   ├── orders.rs   ◄─── Order history
//! │   ├── profile.rs  ◄─── Profile editor
//! │   └── config.rs   ◄─── Configuration
//! ├── commands/       ◄─── One file per view (cart, product, checkout, ...)
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Session (one per process, passed by reference, never global)           │
//! │                                                                         │
//! │  ┌────────────┐ ┌──────────────┐ ┌────────────┐ ┌──────────────┐       │
//! │  │ CartState  │ │ CatalogState │ │ OrderState │ │ ProfileState │  ...  │
//! │  │ Arc<Mutex> │ │ Arc (ro)     │ │ Arc<Mutex> │ │ Arc<Mutex>   │       │
//! │  └────────────┘ └──────────────┘ └────────────┘ └──────────────┘       │
//! │                                                                         │
//! │  Each command only borrows the state it needs.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod invoke;
pub mod state;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use state::{ConfigState, Session};

/// Errors that stop the command loop.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode reply: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Runs the storefront session until stdin closes.
///
/// ## Startup Sequence
/// 1. Initialize tracing (stderr, `RUST_LOG` aware)
/// 2. Load configuration from `STOREFRONT_*` environment variables
/// 3. Build the session state with demo data
/// 4. Answer commands line by line
pub async fn run() -> Result<(), AppError> {
    init_tracing();

    let config = ConfigState::from_env();
    let session = Session::new(config);
    info!(session_id = %session.id(), store = %session.config.store_name, "Storefront session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = invoke::handle_line(&session, &line);
        if !reply.is_ok() {
            warn!(line = %line, "command failed");
        }

        let mut out = serde_json::to_vec(&reply)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    debug!("stdin closed");
    info!(session_id = %session.id(), "Storefront session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Trace for storefront crates only
/// - Default: INFO, with DEBUG for storefront crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,storefront_lib=debug"));

    // stdout carries replies, so logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
