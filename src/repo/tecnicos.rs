//! Technician repository. The company-assigned technician id is unique.

use crate::error::AppError;
use crate::models::{NewTecnico, Tecnico, TecnicoPatch};
use crate::repo::{constraint_error, Repository};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id_tecnico, nombre_tecnico, id_tecnico_empresa";
const UNIQUE: &[&str] = &["id_tecnico_empresa"];

#[derive(Clone)]
pub struct TecnicosRepo {
    pool: PgPool,
}

impl TecnicosRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for TecnicosRepo {
    type Entity = Tecnico;
    type Create = NewTecnico;
    type Patch = TecnicoPatch;

    const RESOURCE: &'static str = "tecnicos";

    async fn list(&self) -> Result<Vec<Tecnico>, AppError> {
        let rows = sqlx::query_as::<_, Tecnico>(&format!("SELECT {COLUMNS} FROM tecnicos"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, fields: NewTecnico) -> Result<Tecnico, AppError> {
        sqlx::query_as::<_, Tecnico>(&format!(
            r#"
            INSERT INTO tecnicos (nombre_tecnico, id_tecnico_empresa)
            VALUES ($1, $2)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(fields.nombre_tecnico)
        .bind(fields.id_tecnico_empresa)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| constraint_error(e, UNIQUE, &[]))
    }

    async fn get(&self, id: i32) -> Result<Tecnico, AppError> {
        sqlx::query_as::<_, Tecnico>(&format!(
            "SELECT {COLUMNS} FROM tecnicos WHERE id_tecnico = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }

    async fn update(&self, id: i32, fields: TecnicoPatch) -> Result<Tecnico, AppError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE tecnicos SET ");
        let mut set = qb.separated(", ");
        let mut touched = false;
        if let Some(v) = fields.nombre_tecnico {
            set.push("nombre_tecnico = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.id_tecnico_empresa {
            set.push("id_tecnico_empresa = ").push_bind_unseparated(v);
            touched = true;
        }
        if !touched {
            return self.get(id).await;
        }
        qb.push(" WHERE id_tecnico = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));
        qb.build_query_as::<Tecnico>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| constraint_error(e, UNIQUE, &[]))?
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })
    }

    async fn delete(&self, id: i32) -> Result<Tecnico, AppError> {
        sqlx::query_as::<_, Tecnico>(&format!(
            "DELETE FROM tecnicos WHERE id_tecnico = $1 RETURNING {COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }
}
