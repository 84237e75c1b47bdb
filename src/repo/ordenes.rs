//! Order repository. No constraints beyond the primary key.

use crate::error::AppError;
use crate::models::{NewOrden, Orden, OrdenPatch};
use crate::repo::Repository;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

const COLUMNS: &str =
    "id_orden, tipo_orden, puntos_orden, valor_orden_tecnico, valor_orden_empresa";

#[derive(Clone)]
pub struct OrdenesRepo {
    pool: PgPool,
}

impl OrdenesRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for OrdenesRepo {
    type Entity = Orden;
    type Create = NewOrden;
    type Patch = OrdenPatch;

    const RESOURCE: &'static str = "ordenes";

    async fn list(&self) -> Result<Vec<Orden>, AppError> {
        let rows = sqlx::query_as::<_, Orden>(&format!("SELECT {COLUMNS} FROM ordenes"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, fields: NewOrden) -> Result<Orden, AppError> {
        let row = sqlx::query_as::<_, Orden>(&format!(
            r#"
            INSERT INTO ordenes (tipo_orden, puntos_orden, valor_orden_tecnico, valor_orden_empresa)
            VALUES ($1, $2, $3, $4)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(fields.tipo_orden)
        .bind(fields.puntos_orden)
        .bind(fields.valor_orden_tecnico)
        .bind(fields.valor_orden_empresa)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get(&self, id: i32) -> Result<Orden, AppError> {
        sqlx::query_as::<_, Orden>(&format!(
            "SELECT {COLUMNS} FROM ordenes WHERE id_orden = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }

    async fn update(&self, id: i32, fields: OrdenPatch) -> Result<Orden, AppError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE ordenes SET ");
        let mut set = qb.separated(", ");
        let mut touched = false;
        if let Some(v) = fields.tipo_orden {
            set.push("tipo_orden = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.puntos_orden {
            set.push("puntos_orden = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.valor_orden_tecnico {
            set.push("valor_orden_tecnico = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.valor_orden_empresa {
            set.push("valor_orden_empresa = ").push_bind_unseparated(v);
            touched = true;
        }
        if !touched {
            return self.get(id).await;
        }
        qb.push(" WHERE id_orden = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));
        qb.build_query_as::<Orden>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })
    }

    async fn delete(&self, id: i32) -> Result<Orden, AppError> {
        sqlx::query_as::<_, Orden>(&format!(
            "DELETE FROM ordenes WHERE id_orden = $1 RETURNING {COLUMNS}"
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
