//! Installation repository. The serial number is unique but only references
//! equipment by convention; there is no foreign key behind it.

use crate::error::AppError;
use crate::models::{Instalacion, InstalacionPatch, NewInstalacion};
use crate::repo::{constraint_error, Repository};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id_instalaciones, numero_serie_equipo, numero_de_orden, fecha_cierre, \
                       id_tecnico_empresa, nombre_tecnico, descripcion, tipo, tipo_orden";
const UNIQUE: &[&str] = &["numero_serie_equipo"];

#[derive(Clone)]
pub struct InstalacionesRepo {
    pool: PgPool,
}

impl InstalacionesRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for InstalacionesRepo {
    type Entity = Instalacion;
    type Create = NewInstalacion;
    type Patch = InstalacionPatch;

    const RESOURCE: &'static str = "instalaciones";

    async fn list(&self) -> Result<Vec<Instalacion>, AppError> {
        let rows = sqlx::query_as::<_, Instalacion>(&format!(
            "SELECT {COLUMNS} FROM instalaciones"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, fields: NewInstalacion) -> Result<Instalacion, AppError> {
        sqlx::query_as::<_, Instalacion>(&format!(
            r#"
            INSERT INTO instalaciones
                (numero_serie_equipo, numero_de_orden, fecha_cierre, id_tecnico_empresa,
                 nombre_tecnico, descripcion, tipo, tipo_orden)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        ))
        .bind(fields.numero_serie_equipo)
        .bind(fields.numero_de_orden)
        .bind(fields.fecha_cierre)
        .bind(fields.id_tecnico_empresa)
        .bind(fields.nombre_tecnico)
        .bind(fields.descripcion)
        .bind(fields.tipo)
        .bind(fields.tipo_orden)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| constraint_error(e, UNIQUE, &[]))
    }

    async fn get(&self, id: i32) -> Result<Instalacion, AppError> {
        sqlx::query_as::<_, Instalacion>(&format!(
            "SELECT {COLUMNS} FROM instalaciones WHERE id_instalaciones = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound {
            resource: Self::RESOURCE,
            id,
        })
    }

    async fn update(&self, id: i32, fields: InstalacionPatch) -> Result<Instalacion, AppError> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE instalaciones SET ");
        let mut set = qb.separated(", ");
        let mut touched = false;
        if let Some(v) = fields.numero_serie_equipo {
            set.push("numero_serie_equipo = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.numero_de_orden {
            set.push("numero_de_orden = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.fecha_cierre {
            set.push("fecha_cierre = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.id_tecnico_empresa {
            set.push("id_tecnico_empresa = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.nombre_tecnico {
            set.push("nombre_tecnico = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.descripcion {
            set.push("descripcion = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.tipo {
            set.push("tipo = ").push_bind_unseparated(v);
            touched = true;
        }
        if let Some(v) = fields.tipo_orden {
            set.push("tipo_orden = ").push_bind_unseparated(v);
            touched = true;
        }
        if !touched {
            return self.get(id).await;
        }
        qb.push(" WHERE id_instalaciones = ");
        qb.push_bind(id);
        qb.push(format!(" RETURNING {COLUMNS}"));
        qb.build_query_as::<Instalacion>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| constraint_error(e, UNIQUE, &[]))?
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })
    }

    async fn delete(&self, id: i32) -> Result<Instalacion, AppError> {
        sqlx::query_as::<_, Instalacion>(&format!(
            "DELETE FROM instalaciones WHERE id_instalaciones = $1 RETURNING {COLUMNS}"
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
