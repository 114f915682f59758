//! # Seed Data Generator
//!
//! Populates a database with demo data for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default file (./almacen.db)
//! cargo run -p almacen-db --bin seed
//!
//! # Specify database path
//! cargo run -p almacen-db --bin seed -- --db ./data/almacen.db
//! ```
//!
//! Creates one credential (admin / admin), a handful of clientes, and a
//! small product catalog across categories.

use std::env;

use almacen_core::{ClienteDraft, ProductoDraft, RegistroDraft};
use almacen_db::{Database, DbConfig, RecordStore};

const CLIENTES: &[(&str, &str, &str)] = &[
    ("Ana", "Gómez", "anag"),
    ("Luis", "Pérez", "luisp"),
    ("María", "Santos", "marias"),
    ("Jorge", "Díaz", "jorged"),
];

const PRODUCTOS: &[(&str, &str, &str, &str)] = &[
    ("Martillo", "Herramientas", "12.50", "25"),
    ("Destornillador", "Herramientas", "4.75", "60"),
    ("Taladro", "Herramientas", "89.00", "8"),
    ("Pintura Blanca 1L", "Pinturas", "15.25", "30"),
    ("Brocha 2\"", "Pinturas", "3.10", "45"),
    ("Cable 10m", "Eléctrico", "7.80", "50"),
    ("Bombillo LED", "Eléctrico", "2.99", "120"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = parse_db_arg().unwrap_or_else(|| "./almacen.db".to_string());
    println!("Seeding {db_path}");

    let db = Database::new(DbConfig::new(&db_path)).await?;

    db.usuarios()
        .register(&RegistroDraft {
            usuarios: "admin".to_string(),
            nombre_usuario: "Administrador".to_string(),
            contrasena: "admin".to_string(),
        })
        .await?;

    let clientes = db.clientes();
    for (nombre, apellido, usuario) in CLIENTES {
        clientes
            .create(&ClienteDraft {
                nombre: nombre.to_string(),
                apellido: apellido.to_string(),
                telefono: "555-0100".to_string(),
                correo_electronico: format!("{usuario}@example.com"),
                usuario: usuario.to_string(),
            })
            .await?;
    }

    let productos = db.productos();
    for (nombre, categoria, precio, cantidad) in PRODUCTOS {
        productos
            .create(&ProductoDraft {
                nombre: nombre.to_string(),
                categoria: categoria.to_string(),
                precio: precio.to_string(),
                cantidad: cantidad.to_string(),
                descripcion: format!("{nombre} ({categoria})"),
            })
            .await?;
    }

    println!(
        "Done: 1 usuario, {} clientes, {} productos",
        CLIENTES.len(),
        PRODUCTOS.len()
    );
    db.close().await;
    Ok(())
}

/// Reads `--db <path>` from the command line.
fn parse_db_arg() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|a| a == "--db")
        .and_then(|i| args.get(i + 1).cloned())
}
