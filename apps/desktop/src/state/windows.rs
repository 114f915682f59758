//! # Window Navigation
//!
//! Tracks which windows are open and owns the session.
//!
//! ## Window Graph
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Window Navigation                               │
//! │                                                                         │
//! │   Login ──(login ok)──► Dashboard ──┬──► GestionUsuarios ──┬► Nuevo…    │
//! │     │ ▲                    │        │                      └► Editar…   │
//! │     │ └──(logout, flag     │        └──► GestionProductos ─┬► Nuevo…    │
//! │     │      off)────────────┘                               └► Editar…   │
//! │     ▼                                                                   │
//! │   Registro                                                              │
//! │                                                                         │
//! │   Closing Login or the Dashboard asks for confirmation; confirming      │
//! │   ends the process when `exit_on_dashboard_close` is set, otherwise     │
//! │   the Dashboard falls back to Login with the session cleared.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Windows form a stack: opening pushes, closing pops. Dashboard and the
//! windows above it require a live session.

use crate::error::AppError;
use crate::state::session::Session;

/// Every window the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Login,
    Registro,
    Dashboard,
    GestionUsuarios,
    GestionProductos,
    NuevoCliente,
    EditarCliente,
    NuevoProducto,
    EditarProducto,
}

impl WindowKind {
    /// Whether this window requires an authenticated session.
    fn requires_session(self) -> bool {
        !matches!(self, WindowKind::Login | WindowKind::Registro)
    }

    /// Whether closing this window asks for confirmation first.
    fn close_is_confirmed(self) -> bool {
        matches!(self, WindowKind::Login | WindowKind::Dashboard)
    }

    /// Window title, as shown in the title bar.
    pub fn title(self) -> &'static str {
        match self {
            WindowKind::Login => "Iniciar Sesión",
            WindowKind::Registro => "Registro de Usuario",
            WindowKind::Dashboard => "Menú Principal",
            WindowKind::GestionUsuarios => "Gestión de Usuarios",
            WindowKind::GestionProductos => "Gestión de Productos",
            WindowKind::NuevoCliente => "Nuevo Usuario",
            WindowKind::EditarCliente => "Editar Usuario",
            WindowKind::NuevoProducto => "Nuevo Producto",
            WindowKind::EditarProducto => "Editar Producto",
        }
    }
}

/// What happened when a window close was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The user declined the confirmation; nothing changed.
    Stay,

    /// The window closed; the one below it is current again.
    Closed,

    /// The whole process should end.
    Exit,
}

/// Owns the window stack and the session.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<WindowKind>,
    session: Option<Session>,
    exit_on_dashboard_close: bool,
}

impl Navigator {
    /// Starts at the login window.
    pub fn new(exit_on_dashboard_close: bool) -> Self {
        Navigator {
            stack: vec![WindowKind::Login],
            session: None,
            exit_on_dashboard_close,
        }
    }

    /// The window the user is currently looking at.
    pub fn current(&self) -> WindowKind {
        *self.stack.last().unwrap_or(&WindowKind::Login)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Opens a window on top of the current one.
    ///
    /// Session-gated windows refuse to open without a live session.
    pub fn open(&mut self, window: WindowKind) -> Result<(), AppError> {
        if window.requires_session() && self.session.is_none() {
            return Err(AppError::session_required());
        }

        tracing::debug!(window = window.title(), "Opening window");
        self.stack.push(window);
        Ok(())
    }

    /// Records a successful login: the session is established and the
    /// dashboard replaces the login window.
    pub fn login_succeeded(&mut self, session: Session) {
        tracing::info!(usuario = %session.usuarios, "Login succeeded");
        self.session = Some(session);
        self.stack.clear();
        self.stack.push(WindowKind::Dashboard);
    }

    /// Records a failed login. The login window stays; no session exists.
    pub fn login_failed(&mut self) {
        tracing::warn!("Login failed");
        self.session = None;
    }

    /// Handles a close request on the current window.
    ///
    /// Login and Dashboard ask `confirm` first; dialogs and management
    /// windows just pop. A confirmed Dashboard close either exits the
    /// process or falls back to Login, per `exit_on_dashboard_close`.
    pub fn request_close(&mut self, confirm: impl FnOnce() -> bool) -> CloseOutcome {
        let current = self.current();

        if current.close_is_confirmed() {
            if !confirm() {
                return CloseOutcome::Stay;
            }

            if current == WindowKind::Dashboard && !self.exit_on_dashboard_close {
                self.session = None;
                self.stack.clear();
                self.stack.push(WindowKind::Login);
                return CloseOutcome::Closed;
            }

            return CloseOutcome::Exit;
        }

        self.stack.pop();
        CloseOutcome::Closed
    }

    /// Logs out from the dashboard, back to the login window.
    ///
    /// Confirmation-gated like a dashboard close, but always returns to
    /// Login regardless of the exit flag.
    pub fn logout(&mut self, confirm: impl FnOnce() -> bool) -> CloseOutcome {
        if !confirm() {
            return CloseOutcome::Stay;
        }

        tracing::info!("Logging out");
        self.session = None;
        self.stack.clear();
        self.stack.push(WindowKind::Login);
        CloseOutcome::Closed
    }
}
