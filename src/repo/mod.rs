//! Entity repositories: one per table, uniform list/create/get/update/delete.
//!
//! Every operation is a single independent statement against the pool; the
//! database serializes concurrent writes to the same row. `delete` returns
//! the removed row so the handler can put it in the response envelope.

mod equipos;
mod instalaciones;
mod operador;
mod ordenes;
mod tecnicos;

pub use equipos::EquiposRepo;
pub use instalaciones::InstalacionesRepo;
pub use operador::OperadorRepo;
pub use ordenes::OrdenesRepo;
pub use tecnicos::TecnicosRepo;

use crate::error::AppError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[async_trait]
pub trait Repository: Clone + Send + Sync + 'static {
    type Entity: Serialize + Send + Sync + 'static;
    type Create: DeserializeOwned + Send + 'static;
    type Patch: DeserializeOwned + Send + 'static;

    /// Path segment and resource name used in error detail.
    const RESOURCE: &'static str;

    async fn list(&self) -> Result<Vec<Self::Entity>, AppError>;
    async fn create(&self, fields: Self::Create) -> Result<Self::Entity, AppError>;
    async fn get(&self, id: i32) -> Result<Self::Entity, AppError>;
    async fn update(&self, id: i32, fields: Self::Patch) -> Result<Self::Entity, AppError>;
    async fn delete(&self, id: i32) -> Result<Self::Entity, AppError>;
}

/// Map constraint violations raised on INSERT/UPDATE to field-level
/// validation errors. `unique` and `fk` list the columns carrying a unique
/// or foreign-key constraint; the offending column is recovered from the
/// constraint name. Anything unrecognized stays a database error.
pub(crate) fn constraint_error(
    e: sqlx::Error,
    unique: &[&'static str],
    fk: &[&'static str],
) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        let constraint = db.constraint().unwrap_or_default();
        if db.is_unique_violation() {
            if let Some(field) = unique.iter().copied().find(|c| constraint.contains(*c)) {
                return AppError::Validation {
                    field,
                    message: format!("a row with this {field} already exists"),
                };
            }
        }
        if db.is_foreign_key_violation() {
            if let Some(field) = fk.iter().copied().find(|c| constraint.contains(*c)) {
                return AppError::Validation {
                    field,
                    message: format!("referenced {field} does not exist"),
                };
            }
        }
    }
    AppError::Db(e)
}
