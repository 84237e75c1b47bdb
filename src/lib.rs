//! Configuracion API: CRUD backend for field equipment configuration.

pub mod error;
pub mod handlers;
pub mod models;
pub mod repo;
pub mod response;
pub mod routes;
pub mod schema;
pub mod state;

pub use error::AppError;
pub use repo::{
    EquiposRepo, InstalacionesRepo, OperadorRepo, OrdenesRepo, Repository, TecnicosRepo,
};
pub use response::{success_created, success_ok, Envelope};
pub use routes::{api_routes, common_routes, common_routes_with_ready, resource_routes};
pub use schema::{ensure_database_exists, ensure_schema};
pub use state::AppState;
