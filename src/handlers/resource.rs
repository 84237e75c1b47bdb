//! Generic CRUD handlers, monomorphized once per entity repository.
//!
//! Handlers only wrap successful repository results in the envelope; every
//! failure converts through `AppError::into_response` untouched.

use crate::error::AppError;
use crate::repo::Repository;
use crate::response::{success_created, success_ok};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub async fn list<R: Repository>(State(repo): State<R>) -> Result<impl IntoResponse, AppError> {
    let rows = repo.list().await?;
    Ok(success_ok(rows))
}

pub async fn create<R: Repository>(
    State(repo): State<R>,
    Json(fields): Json<R::Create>,
) -> Result<impl IntoResponse, AppError> {
    let row = repo.create(fields).await?;
    Ok(success_created(row))
}

pub async fn retrieve<R: Repository>(
    State(repo): State<R>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let row = repo.get(id).await?;
    Ok(success_ok(row))
}

/// Serves both PUT and PATCH: the payload carries only the fields to change.
pub async fn update<R: Repository>(
    State(repo): State<R>,
    Path(id): Path<i32>,
    Json(fields): Json<R::Patch>,
) -> Result<impl IntoResponse, AppError> {
    let row = repo.update(id, fields).await?;
    Ok(success_ok(row))
}

/// DELETE answers 200 with the removed row in the envelope, not an empty 204.
pub async fn destroy<R: Repository>(
    State(repo): State<R>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let row = repo.delete(id).await?;
    Ok(success_ok(row))
}
