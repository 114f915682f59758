//! # Almacén Desktop Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Almacén Desktop                                │
//! │                                                                         │
//! │  main.rs ────► Starts the runtime and hands off to lib.rs               │
//! │                                                                         │
//! │  lib.rs ─────► Startup (logging, config, database) + event loop         │
//! │                                                                         │
//! │  commands/ ──► login, registrar, nuevo, editar, eliminar, actualizar    │
//! │                                                                         │
//! │  state/ ─────► Navigator, Session, ListingView                          │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                          │  │
//! │  │  almacen.db (local file, WAL mode)                               │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

/// The app is single-window and event-driven; a current-thread runtime
/// is all it needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match almacen_desktop::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error fatal: {}", err);
            ExitCode::FAILURE
        }
    }
}
