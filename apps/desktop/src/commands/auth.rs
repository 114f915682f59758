//! # Authentication Commands
//!
//! Login and registration, wired between the credential repository, the
//! navigator, and the dialog surface.
//!
//! ## Login Flow
//! ```text
//! "Ingresar" pressed
//!      │
//!      ▼
//! verify_login(usuarios, contraseña)
//!      │
//!      ├── Some(nombre) ──► session established, dashboard opens,
//!      │                    "Login exitoso" dialog
//!      │
//!      └── None ──────────► error dialog, login window stays
//! ```

use almacen_core::{Draft, RegistroDraft};
use almacen_db::UsuarioRepository;
use tracing::instrument;

use crate::error::AppError;
use crate::shell::Shell;
use crate::state::{Navigator, Session};

/// Attempts a login with the given credentials.
///
/// Returns `Ok(true)` when the session was established, `Ok(false)` when
/// the credentials were rejected. Both fields are matched exactly as
/// typed: no trimming, no case folding.
#[instrument(skip_all, fields(usuario = %usuarios))]
pub async fn login(
    shell: &impl Shell,
    nav: &mut Navigator,
    repo: &UsuarioRepository,
    usuarios: &str,
    contrasena: &str,
) -> Result<bool, AppError> {
    match repo.verify_login(usuarios, contrasena).await? {
        Some(nombre_usuario) => {
            nav.login_succeeded(Session::new(usuarios, nombre_usuario));
            shell.show_info("Login exitoso", "Bienvenido!");
            Ok(true)
        }
        None => {
            nav.login_failed();
            shell.show_error("Error", "Nombre de usuario o contraseña incorrectos.");
            Ok(false)
        }
    }
}

/// Registers a new credential record.
///
/// Empty fields abort with an error dialog before the database is
/// touched. Returns `Ok(true)` on success, `Ok(false)` on a validation
/// abort.
#[instrument(skip_all)]
pub async fn registrar(
    shell: &impl Shell,
    repo: &UsuarioRepository,
    draft: &RegistroDraft,
) -> Result<bool, AppError> {
    if let Err(err) = draft.validate() {
        shell.show_error("Error", "Por favor complete todos los campos.");
        tracing::debug!(%err, "Registration rejected by validation");
        return Ok(false);
    }

    let usuario = repo.register(draft).await?;
    tracing::info!(usuario = %usuario.usuarios, "Usuario registered");
    shell.show_info("Registro exitoso", "Usuario registrado correctamente.");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::scripted::ScriptedShell;
    use crate::state::WindowKind;
    use almacen_db::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn draft(usuarios: &str, nombre: &str, contrasena: &str) -> RegistroDraft {
        RegistroDraft {
            usuarios: usuarios.to_string(),
            nombre_usuario: nombre.to_string(),
            contrasena: contrasena.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_opens_dashboard() {
        let db = test_db().await;
        let repo = db.usuarios();
        let shell = ScriptedShell::new();
        let mut nav = Navigator::new(true);

        registrar(&shell, &repo, &draft("jdoe", "Jane Doe", "s3cret"))
            .await
            .unwrap();

        let ok = login(&shell, &mut nav, &repo, "jdoe", "s3cret")
            .await
            .unwrap();

        assert!(ok);
        assert_eq!(nav.current(), WindowKind::Dashboard);
        assert_eq!(
            nav.session().map(|s| s.nombre_usuario.clone()),
            Some("Jane Doe".to_string())
        );
        assert_eq!(
            shell.last_info(),
            Some(("Login exitoso".to_string(), "Bienvenido!".to_string()))
        );
    }

    #[tokio::test]
    async fn test_login_failure_stays_on_login() {
        let db = test_db().await;
        let repo = db.usuarios();
        let shell = ScriptedShell::new();
        let mut nav = Navigator::new(true);

        let ok = login(&shell, &mut nav, &repo, "nadie", "nada")
            .await
            .unwrap();

        assert!(!ok);
        assert_eq!(nav.current(), WindowKind::Login);
        assert!(nav.session().is_none());
        assert_eq!(
            shell.last_error(),
            Some((
                "Error".to_string(),
                "Nombre de usuario o contraseña incorrectos.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_registrar_rejects_empty_fields() {
        let db = test_db().await;
        let repo = db.usuarios();
        let shell = ScriptedShell::new();

        let ok = registrar(&shell, &repo, &draft("jdoe", "", "s3cret"))
            .await
            .unwrap();

        assert!(!ok);
        assert_eq!(shell.error_count(), 1);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_registered_user_can_log_in_immediately() {
        let db = test_db().await;
        let repo = db.usuarios();
        let shell = ScriptedShell::new();
        let mut nav = Navigator::new(true);

        registrar(&shell, &repo, &draft("ana", "Ana Pérez", "clave"))
            .await
            .unwrap();

        assert!(login(&shell, &mut nav, &repo, "ana", "clave").await.unwrap());
        // Exact match only.
        assert!(!login(&shell, &mut nav, &repo, "Ana", "clave").await.unwrap());
    }
}
