//! # Usuario Repository
//!
//! Credential verification and registration against the `usuarios` table.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operator submits (usuario, contraseña)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT nombre_usuario WHERE usuarios = ?1 AND contrasena = ?2          │
//! │       │                                                                 │
//! │       ├── row found ──► Some(nombre_usuario)  → session is created      │
//! │       └── no row    ──► None                  → session is cleared      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Credentials are exact-match plaintext by design: no hashing, no
//! rate-limiting, no lockout. This mirrors the deployed system and is an
//! explicit non-goal to change.

use chrono::Local;
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::DbResult;
use almacen_core::{RegistroDraft, Usuario, DEFAULT_ESTADO, DEFAULT_ROL, FECHA_CREACION_FORMATO};

/// Repository for credential operations.
#[derive(Debug, Clone)]
pub struct UsuarioRepository {
    pool: SqlitePool,
}

impl UsuarioRepository {
    /// Creates a new UsuarioRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UsuarioRepository { pool }
    }

    /// Verifies a login pair and returns the matched display name.
    ///
    /// ## Returns
    /// * `Ok(Some(nombre_usuario))` - exact match on both fields
    /// * `Ok(None)` - no matching credential
    pub async fn verify_login(
        &self,
        usuarios: &str,
        contrasena: &str,
    ) -> DbResult<Option<String>> {
        debug!(usuario = %usuarios, "Verifying login");

        let nombre: Option<String> = sqlx::query_scalar(
            r#"
            SELECT nombre_usuario FROM usuarios
            WHERE usuarios = ?1 AND contrasena = ?2
            "#,
        )
        .bind(usuarios)
        .bind(contrasena)
        .fetch_optional(&self.pool)
        .await?;

        if nombre.is_some() {
            info!(usuario = %usuarios, "Login verified");
        } else {
            info!(usuario = %usuarios, "Login rejected");
        }

        Ok(nombre)
    }

    /// Registers a new credential.
    ///
    /// Generates a fresh UUID token and the creation timestamp, then inserts
    /// with the default role and status. Returns the stored credential.
    pub async fn register(&self, draft: &RegistroDraft) -> DbResult<Usuario> {
        debug!(usuario = %draft.usuarios, "Registering credential");

        let usuario = Usuario {
            usuarios: draft.usuarios.clone(),
            nombre_usuario: draft.nombre_usuario.clone(),
            contrasena: draft.contrasena.clone(),
            rol: DEFAULT_ROL.to_string(),
            estado: DEFAULT_ESTADO.to_string(),
            token: Uuid::new_v4().to_string(),
            fecha_creacion: Local::now().format(FECHA_CREACION_FORMATO).to_string(),
        };

        sqlx::query(
            r#"
            INSERT INTO usuarios (usuarios, nombre_usuario, contrasena, rol, estado, token, fecha_creacion)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&usuario.usuarios)
        .bind(&usuario.nombre_usuario)
        .bind(&usuario.contrasena)
        .bind(&usuario.rol)
        .bind(&usuario.estado)
        .bind(&usuario.token)
        .bind(&usuario.fecha_creacion)
        .execute(&self.pool)
        .await?;

        info!(usuario = %usuario.usuarios, "Credential registered");
        Ok(usuario)
    }

    /// Counts stored credentials (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
