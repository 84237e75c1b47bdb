//! Entity routes: a collection group and an item group per repository,
//! instantiated explicitly per entity (no runtime dispatch on the path).

use crate::handlers::resource::{create, destroy, list, retrieve, update};
use crate::repo::{
    EquiposRepo, InstalacionesRepo, OperadorRepo, OrdenesRepo, Repository, TecnicosRepo,
};
use axum::{routing::get, Router};
use sqlx::PgPool;

/// Collection at `/`, item at `/:id/`. PUT and PATCH both hit the update
/// handler. Unknown ids 404 before any envelope wrapping happens.
pub fn resource_routes<R: Repository>(repo: R) -> Router {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/:id/",
            get(retrieve::<R>)
                .put(update::<R>)
                .patch(update::<R>)
                .delete(destroy::<R>),
        )
        .with_state(repo)
}

/// The five entity route groups; the caller mounts this under `/api`.
pub fn api_routes(pool: &PgPool) -> Router {
    Router::new()
        .nest("/equipos", resource_routes(EquiposRepo::new(pool.clone())))
        .nest(
            "/instalaciones",
            resource_routes(InstalacionesRepo::new(pool.clone())),
        )
        .nest("/operador", resource_routes(OperadorRepo::new(pool.clone())))
        .nest("/ordenes", resource_routes(OrdenesRepo::new(pool.clone())))
        .nest("/tecnicos", resource_routes(TecnicosRepo::new(pool.clone())))
}
