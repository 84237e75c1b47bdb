//! Database bootstrap for development and tests. Deployments normally point
//! at a pre-existing schema; every statement here is idempotent, so running
//! it against one is a no-op.

use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

// Ordered: operador first, equipos carries the foreign key.
const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS operador (
        id_operador SERIAL PRIMARY KEY,
        nombre_operador VARCHAR(150) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS equipos (
        id_equipos SERIAL PRIMARY KEY,
        nombre VARCHAR(150) NOT NULL,
        numero_serie_equipo VARCHAR(100) NOT NULL UNIQUE,
        tecnico VARCHAR(150) NOT NULL,
        operador INTEGER REFERENCES operador (id_operador)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS instalaciones (
        id_instalaciones SERIAL PRIMARY KEY,
        numero_serie_equipo VARCHAR(100) NOT NULL UNIQUE,
        numero_de_orden VARCHAR(100) NOT NULL,
        fecha_cierre DATE,
        id_tecnico_empresa VARCHAR(50) NOT NULL,
        nombre_tecnico VARCHAR(150) NOT NULL,
        descripcion TEXT,
        tipo VARCHAR(100),
        tipo_orden VARCHAR(100)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS ordenes (
        id_orden SERIAL PRIMARY KEY,
        tipo_orden VARCHAR(100) NOT NULL,
        puntos_orden NUMERIC(10, 2),
        valor_orden_tecnico TEXT,
        valor_orden_empresa TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tecnicos (
        id_tecnico SERIAL PRIMARY KEY,
        nombre_tecnico VARCHAR(150) NOT NULL,
        id_tecnico_empresa VARCHAR(50) NOT NULL UNIQUE
    )
    "#,
];

/// Create the five entity tables when absent.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Create the database named in the URL when absent, via the `postgres`
/// maintenance database on the same server.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    let Some((base, db_name)) = split_db_name(database_url) else {
        return Ok(());
    };
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let admin_url = format!("{base}postgres");
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn split_db_name(url: &str) -> Option<(&str, &str)> {
    let path_start = url.rfind('/')? + 1;
    let db_name = url[path_start..].split('?').next().unwrap_or("").trim();
    Some((&url[..path_start], db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_db_name_from_url() {
        let (base, name) = split_db_name("postgres://localhost:5432/configuracion").unwrap();
        assert_eq!(base, "postgres://localhost:5432/");
        assert_eq!(name, "configuracion");
    }

    #[test]
    fn ignores_query_string() {
        let (_, name) =
            split_db_name("postgres://localhost/configuracion?sslmode=disable").unwrap();
        assert_eq!(name, "configuracion");
    }
}
