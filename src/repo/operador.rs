//! Operator repository. Deleting an operator still referenced by equipment
//! surfaces the database's foreign-key policy as-is.

use crate::error::AppError;
use crate::models::{NewOperador, Operador, OperadorPatch};
use crate::repo::Repository;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct OperadorRepo {
    pool: PgPool,
}

impl OperadorRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for OperadorRepo {
    type Entity = Operador;
    type Create = NewOperador;
    type Patch = OperadorPatch;

    const RESOURCE: &'static str = "operador";

    async fn list(&self) -> Result<Vec<Operador>, AppError> {
        let rows =
            sqlx::query_as::<_, Operador>("SELECT id_operador, nombre_operador FROM operador")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn create(&self, fields: NewOperador) -> Result<Operador, AppError> {
        let row = sqlx::query_as::<_, Operador>(
            "INSERT INTO operador (nombre_operador) VALUES ($1) RETURNING id_operador, nombre_operador",
        )
        .bind(fields.nombre_operador)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get(&self, id: i32) -> Result<Operador, AppError> {
        sqlx::query_as::<_, Operador>(
            "SELECT id_operador, nombre_operador FROM operador WHERE id_operador = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }

    async fn update(&self, id: i32, fields: OperadorPatch) -> Result<Operador, AppError> {
        let Some(nombre) = fields.nombre_operador else {
            return self.get(id).await;
        };
        sqlx::query_as::<_, Operador>(
            "UPDATE operador SET nombre_operador = $2 WHERE id_operador = $1 RETURNING id_operador, nombre_operador",
        )
        .bind(id)
        .bind(nombre)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }

    async fn delete(&self, id: i32) -> Result<Operador, AppError> {
        sqlx::query_as::<_, Operador>(
            "DELETE FROM operador WHERE id_operador = $1 RETURNING id_operador, nombre_operador",
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
