//! Equipment repository. Serial numbers are unique; `operador` references
//! the `operador` table and may be null.

use crate::error::AppError;
use crate::models::{Equipo, EquipoPatch, NewEquipo};
use crate::repo::{constraint_error, Repository};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

const UNIQUE: &[&str] = &["numero_serie_equipo"];
const FOREIGN: &[&str] = &["operador"];

#[derive(Clone)]
pub struct EquiposRepo {
    pool: PgPool,
}

impl EquiposRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for EquiposRepo {
    type Entity = Equipo;
    type Create = NewEquipo;
    type Patch = EquipoPatch;

    const RESOURCE: &'static str = "equipos";

    async fn list(&self) -> Result<Vec<Equipo>, AppError> {
        let rows = sqlx::query_as::<_, Equipo>(
            "SELECT id_equipos, nombre, numero_serie_equipo, tecnico, operador FROM equipos",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, fields: NewEquipo) -> Result<Equipo, AppError> {
        sqlx::query_as::<_, Equipo>(
            r#"
            INSERT INTO equipos (nombre, numero_serie_equipo, tecnico, operador)
            VALUES ($1, $2, $3, $4)
            RETURNING id_equipos, nombre, numero_serie_equipo, tecnico, operador
            "#,
        )
        .bind(fields.nombre)
        .bind(fields.numero_serie_equipo)
        .bind(fields.tecnico)
        .bind(fields.operador)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| constraint_error(e, UNIQUE, FOREIGN))
    }

    async fn get(&self, id: i32) -> Result<Equipo, AppError> {
        sqlx::query_as::<_, Equipo>(
            "SELECT id_equipos, nombre, numero_serie_equipo, tecnico, operador FROM equipos WHERE id_equipos = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }

    async fn update(&self, id: i32, fields: EquipoPatch) -> Result<Equipo, AppError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE equipos SET ");
        let mut set = qb.separated(", ");
        let mut touched = false;
        if let Some(v) = fields.nombre {
            set.push("nombre = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.numero_serie_equipo {
            set.push("numero_serie_equipo = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.tecnico {
            set.push("tecnico = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.operador {
            set.push("operador = ").push_bind_unseparated(v);
            touched = true;
        }
        if !touched {
            // Empty patch: nothing to write, still 404 on a missing id.
            return self.get(id).await;
        }
        qb.push(" WHERE id_equipos = ");
        qb.push_bind(id);
        qb.push(" RETURNING id_equipos, nombre, numero_serie_equipo, tecnico, operador");
        qb.build_query_as::<Equipo>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| constraint_error(e, UNIQUE, FOREIGN))?
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })
    }

    async fn delete(&self, id: i32) -> Result<Equipo, AppError> {
        sqlx::query_as::<_, Equipo>(
            "DELETE FROM equipos WHERE id_equipos = $1 RETURNING id_equipos, nombre, numero_serie_equipo, tecnico, operador",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }
}
