//! Shared state for operational routes. Entity routes carry their own
//! repository as router state instead.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
