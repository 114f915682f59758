//! # Almacén Desktop Library
//!
//! Core library for the Almacén desktop application: login, registration,
//! and the customer/product management windows over one shared database.
//!
//! ## Module Organization
//! ```text
//! almacen_desktop/
//! ├── lib.rs          ◄─── You are here (startup & event loop)
//! ├── config.rs       ◄─── App configuration (ALMACEN_* env vars)
//! ├── shell.rs        ◄─── Dialog surface (Shell trait)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Authenticated session
//! │   ├── listing.rs  ◄─── Listing rows/selection/phase per window
//! │   └── windows.rs  ◄─── Window stack & close semantics
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── auth.rs     ◄─── Login & registration commands
//! │   └── gestion.rs  ◄─── CRUD commands (generic over the store)
//! └── error.rs        ◄─── App error type for commands
//! ```
//!
//! ## State Management
//! Instead of a single `AppState` struct, focused state types:
//!
//! ```text
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐
//! │    Navigator     │ │   ListingView    │ │     AppConfig        │
//! │                  │ │                  │ │                      │
//! │  • Window stack  │ │  • Rows          │ │  • Database path     │
//! │  • Session       │ │  • Selection     │ │  • Close behavior    │
//! │  • Close policy  │ │  • Refresh phase │ │                      │
//! └──────────────────┘ └──────────────────┘ └──────────────────────┘
//! ```
//!
//! Each window works only with the state it needs.

pub mod commands;
pub mod config;
pub mod error;
pub mod shell;
pub mod state;

use std::io::{BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use almacen_core::{Cliente, ClienteDraft, Producto, ProductoDraft, RegistroDraft};
use almacen_db::Database;

use config::AppConfig;
use shell::{Shell, StdShell};
use state::{CloseOutcome, ListingView, Navigator, WindowKind};

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// 1. Initialize logging (tracing-subscriber, RUST_LOG overridable)
/// 2. Load configuration from ALMACEN_* environment variables
/// 3. Connect the database pool and run migrations
/// 4. Enter the window event loop at the login window
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Almacén");

    let config = AppConfig::from_env();
    let db_path = config.database_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!(?db_path, "Database path determined");

    let db = Database::new(config.db_config()).await?;
    info!("Database connected and migrations applied");

    let shell = StdShell;
    let mut nav = Navigator::new(config.exit_on_dashboard_close);

    event_loop(&shell, &mut nav, &db).await?;

    db.close().await;
    info!("Shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=almacen=trace` - Show trace for almacen crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,almacen=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Drives the window stack from terminal input until the user exits.
///
/// Each iteration renders the current window, reads one action, and
/// dispatches it. Closing the last confirmed window ends the loop.
async fn event_loop(
    shell: &StdShell,
    nav: &mut Navigator,
    db: &Database,
) -> Result<(), Box<dyn std::error::Error>> {
    let usuarios = db.usuarios();
    let clientes = db.clientes();
    let productos = db.productos();

    let mut vista_clientes = ListingView::<Cliente>::new();
    let mut vista_productos = ListingView::<Producto>::new();

    loop {
        let window = nav.current();
        render(nav, &vista_clientes, &vista_productos);

        match window {
            WindowKind::Login => {
                println!("  [1] Ingresar  [2] Registrarse  [0] Salir");
                match prompt("> ")?.as_str() {
                    "1" => {
                        let usuario = prompt("Usuario: ")?;
                        let contrasena = prompt("Contraseña: ")?;
                        reported(
                            shell,
                            commands::auth::login(shell, nav, &usuarios, &usuario, &contrasena)
                                .await,
                        );
                    }
                    "2" => nav.open(WindowKind::Registro)?,
                    "0" => {
                        if nav.request_close(|| confirm_exit(shell)) == CloseOutcome::Exit {
                            break;
                        }
                    }
                    _ => {}
                }
            }

            WindowKind::Registro => {
                let draft = RegistroDraft {
                    usuarios: prompt("Usuario: ")?,
                    nombre_usuario: prompt("Nombre: ")?,
                    contrasena: prompt("Contraseña: ")?,
                };
                if let Some(true) =
                    reported(shell, commands::auth::registrar(shell, &usuarios, &draft).await)
                {
                    nav.request_close(|| true);
                }
            }

            WindowKind::Dashboard => {
                println!("  [1] Gestión de Usuarios  [2] Gestión de Productos  [3] Cerrar sesión  [0] Salir");
                match prompt("> ")?.as_str() {
                    "1" => {
                        nav.open(WindowKind::GestionUsuarios)?;
                        commands::gestion::abrir(shell, &mut vista_clientes, &clientes)
                            .await
                            .ok();
                    }
                    "2" => {
                        nav.open(WindowKind::GestionProductos)?;
                        commands::gestion::abrir(shell, &mut vista_productos, &productos)
                            .await
                            .ok();
                    }
                    "3" => {
                        nav.logout(|| confirm_exit(shell));
                    }
                    "0" => {
                        if nav.request_close(|| confirm_exit(shell)) == CloseOutcome::Exit {
                            break;
                        }
                    }
                    _ => {}
                }
            }

            WindowKind::GestionUsuarios => {
                gestion_clientes(shell, nav, &mut vista_clientes, &clientes).await?;
            }

            WindowKind::GestionProductos => {
                gestion_productos(shell, nav, &mut vista_productos, &productos).await?;
            }

            // Dialog windows are handled inline by their management window.
            _ => {
                nav.request_close(|| true);
            }
        }
    }

    Ok(())
}

/// One event-loop iteration of the customer management window.
async fn gestion_clientes(
    shell: &StdShell,
    nav: &mut Navigator,
    view: &mut ListingView<Cliente>,
    store: &almacen_db::ClienteRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("  [1] Nuevo  [2] Editar  [3] Eliminar  [4] Seleccionar  [5] Actualizar  [0] Volver");
    match prompt("> ")?.as_str() {
        "1" => {
            let draft = ClienteDraft {
                nombre: prompt("Nombre: ")?,
                apellido: prompt("Apellido: ")?,
                telefono: prompt("Teléfono: ")?,
                correo_electronico: prompt("Correo: ")?,
                usuario: prompt("Usuario: ")?,
            };
            commands::gestion::nuevo(shell, view, store, &draft).await.ok();
        }
        "2" => {
            let draft = ClienteDraft {
                nombre: prompt("Nombre: ")?,
                apellido: prompt("Apellido: ")?,
                telefono: prompt("Teléfono: ")?,
                correo_electronico: prompt("Correo: ")?,
                usuario: prompt("Usuario: ")?,
            };
            commands::gestion::editar(shell, view, store, &draft).await.ok();
        }
        "3" => {
            commands::gestion::eliminar(shell, view, store).await.ok();
        }
        "4" => {
            if let Ok(index) = prompt("Fila: ")?.parse::<usize>() {
                commands::gestion::seleccionar(shell, view, index);
            }
        }
        "5" => {
            commands::gestion::actualizar(shell, view, store).await.ok();
        }
        "0" => {
            nav.request_close(|| true);
        }
        _ => {}
    }
    Ok(())
}

/// One event-loop iteration of the product management window.
async fn gestion_productos(
    shell: &StdShell,
    nav: &mut Navigator,
    view: &mut ListingView<Producto>,
    store: &almacen_db::ProductoRepository,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("  [1] Nuevo  [2] Editar  [3] Eliminar  [4] Seleccionar  [5] Actualizar  [0] Volver");
    match prompt("> ")?.as_str() {
        "1" => {
            let draft = ProductoDraft {
                nombre: prompt("Nombre: ")?,
                categoria: prompt("Categoría: ")?,
                precio: prompt("Precio: ")?,
                cantidad: prompt("Cantidad: ")?,
                descripcion: prompt("Descripción: ")?,
            };
            commands::gestion::nuevo(shell, view, store, &draft).await.ok();
        }
        "2" => {
            let draft = ProductoDraft {
                nombre: prompt("Nombre: ")?,
                categoria: prompt("Categoría: ")?,
                precio: prompt("Precio: ")?,
                cantidad: prompt("Cantidad: ")?,
                descripcion: prompt("Descripción: ")?,
            };
            commands::gestion::editar(shell, view, store, &draft).await.ok();
        }
        "3" => {
            commands::gestion::eliminar(shell, view, store).await.ok();
        }
        "4" => {
            if let Ok(index) = prompt("Fila: ")?.parse::<usize>() {
                commands::gestion::seleccionar(shell, view, index);
            }
        }
        "5" => {
            commands::gestion::actualizar(shell, view, store).await.ok();
        }
        "0" => {
            nav.request_close(|| true);
        }
        _ => {}
    }
    Ok(())
}

/// Renders the current window header and, for management windows, the rows.
fn render(
    nav: &Navigator,
    vista_clientes: &ListingView<Cliente>,
    vista_productos: &ListingView<Producto>,
) {
    let window = nav.current();
    println!();
    println!("=== {} ===", window.title());

    if let (WindowKind::Dashboard, Some(session)) = (window, nav.session()) {
        println!("{}", session.greeting());
    }

    match window {
        WindowKind::GestionUsuarios => {
            for (i, c) in vista_clientes.rows().iter().enumerate() {
                println!(
                    "  {:>3}  {:>4}  {} {}  {}  {}",
                    i, c.id_cliente, c.nombre, c.apellido, c.telefono, c.correo_electronico
                );
            }
        }
        WindowKind::GestionProductos => {
            for (i, p) in vista_productos.rows().iter().enumerate() {
                println!(
                    "  {:>3}  {:>4}  {}  {}  {}  {}",
                    i, p.id_producto, p.nombre, p.categoria, p.precio, p.cantidad
                );
            }
        }
        _ => {}
    }
}

fn confirm_exit(shell: &StdShell) -> bool {
    shell.confirm("Salir", "¿Está seguro que desea salir?")
}

/// Surfaces a command failure as an error dialog and keeps the event loop
/// running. No command error is fatal to the process.
fn reported<T>(shell: &impl Shell, result: Result<T, error::AppError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(%err, "Command failed");
            shell.show_error("Error", &err.message);
            None
        }
    }
}

/// Reads one trimmed line from stdin.
fn prompt(label: &str) -> std::io::Result<String> {
    print!("{}", label);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ErrorCode};
    use crate::shell::scripted::ScriptedShell;

    #[test]
    fn test_reported_shows_dialog_instead_of_failing() {
        let shell = ScriptedShell::new();

        let failed: Option<bool> = reported(
            &shell,
            Err(AppError::new(
                ErrorCode::DatabaseError,
                "Database operation failed",
            )),
        );

        assert_eq!(failed, None);
        assert_eq!(
            shell.last_error(),
            Some((
                "Error".to_string(),
                "Database operation failed".to_string()
            ))
        );
    }

    #[test]
    fn test_reported_passes_success_through() {
        let shell = ScriptedShell::new();
        assert_eq!(reported(&shell, Ok(true)), Some(true));
        assert_eq!(shell.error_count(), 0);
    }
}
