//! HTTP contract tests: envelope shape and status codes, driven through the
//! generic resource routes with in-memory repositories. No database needed.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use configuracion_api::models::{
    NewOperador, NewTecnico, Operador, OperadorPatch, Tecnico, TecnicoPatch,
};
use configuracion_api::{resource_routes, AppError, Repository};
use serde_json::{json, Value};
use tower::ServiceExt;

#[derive(Clone, Default)]
struct MemOperador {
    rows: Arc<Mutex<Vec<Operador>>>,
    next: Arc<AtomicI32>,
}

#[async_trait]
impl Repository for MemOperador {
    type Entity = Operador;
    type Create = NewOperador;
    type Patch = OperadorPatch;

    const RESOURCE: &'static str = "operador";

    async fn list(&self) -> Result<Vec<Operador>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, fields: NewOperador) -> Result<Operador, AppError> {
        let id = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        let row = Operador {
            id_operador: id,
            nombre_operador: fields.nombre_operador,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn get(&self, id: i32) -> Result<Operador, AppError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id_operador == id)
            .cloned()
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })
    }

    async fn update(&self, id: i32, fields: OperadorPatch) -> Result<Operador, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id_operador == id)
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })?;
        if let Some(v) = fields.nombre_operador {
            row.nombre_operador = v;
        }
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<Operador, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows
            .iter()
            .position(|r| r.id_operador == id)
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })?;
        Ok(rows.remove(pos))
    }
}

#[derive(Clone, Default)]
struct MemTecnicos {
    rows: Arc<Mutex<Vec<Tecnico>>>,
    next: Arc<AtomicI32>,
}

#[async_trait]
impl Repository for MemTecnicos {
    type Entity = Tecnico;
    type Create = NewTecnico;
    type Patch = TecnicoPatch;

    const RESOURCE: &'static str = "tecnicos";

    async fn list(&self) -> Result<Vec<Tecnico>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, fields: NewTecnico) -> Result<Tecnico, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|r| r.id_tecnico_empresa == fields.id_tecnico_empresa)
        {
            return Err(AppError::Validation {
                field: "id_tecnico_empresa",
                message: "a row with this id_tecnico_empresa already exists".into(),
            });
        }
        let id = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        let row = Tecnico {
            id_tecnico: id,
            nombre_tecnico: fields.nombre_tecnico,
            id_tecnico_empresa: fields.id_tecnico_empresa,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn get(&self, id: i32) -> Result<Tecnico, AppError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id_tecnico == id)
            .cloned()
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })
    }

    async fn update(&self, id: i32, fields: TecnicoPatch) -> Result<Tecnico, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|r| r.id_tecnico == id)
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })?;
        if let Some(v) = fields.nombre_tecnico {
            row.nombre_tecnico = v;
        }
        if let Some(v) = fields.id_tecnico_empresa {
            row.id_tecnico_empresa = v;
        }
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<Tecnico, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows
            .iter()
            .position(|r| r.id_tecnico == id)
            .ok_or(AppError::NotFound {
                resource: Self::RESOURCE,
                id,
            })?;
        Ok(rows.remove(pos))
    }
}

fn operador_app() -> Router {
    Router::new().nest("/api/operador", resource_routes(MemOperador::default()))
}

fn tecnicos_app() -> Router {
    Router::new().nest("/api/tecnicos", resource_routes(MemTecnicos::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn create_wraps_row_in_envelope_with_201() {
    let app = operador_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/operador/",
        Some(json!({"nombre_operador": "Acme"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "data": {"id_operador": 1, "nombre_operador": "Acme"}
        })
    );
}

#[tokio::test]
async fn list_wraps_all_rows() {
    let app = operador_app();
    for name in ["Acme", "Globex"] {
        send(
            &app,
            Method::POST,
            "/api/operador/",
            Some(json!({"nombre_operador": name})),
        )
        .await;
    }
    let (status, body) = send(&app, Method::GET, "/api/operador/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn retrieve_wraps_single_row() {
    let app = operador_app();
    send(
        &app,
        Method::POST,
        "/api/operador/",
        Some(json!({"nombre_operador": "Acme"})),
    )
    .await;
    let (status, body) = send(&app, Method::GET, "/api/operador/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nombre_operador"], "Acme");
}

#[tokio::test]
async fn missing_id_is_unwrapped_404() {
    let app = operador_app();
    let (status, body) = send(&app, Method::GET, "/api/operador/999/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    // Only 2xx bodies carry the envelope.
    assert!(body.get("status").is_none());
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn update_and_patch_both_mutate() {
    let app = operador_app();
    send(
        &app,
        Method::POST,
        "/api/operador/",
        Some(json!({"nombre_operador": "Acme"})),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/operador/1/",
        Some(json!({"nombre_operador": "Acme SA"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nombre_operador"], "Acme SA");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/operador/1/",
        Some(json!({"nombre_operador": "Acme SRL"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nombre_operador"], "Acme SRL");

    let (_, body) = send(&app, Method::GET, "/api/operador/1/", None).await;
    assert_eq!(body["data"]["nombre_operador"], "Acme SRL");
}

#[tokio::test]
async fn update_missing_id_is_404() {
    let app = operador_app();
    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/operador/5/",
        Some(json!({"nombre_operador": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_200_with_removed_row() {
    let app = operador_app();
    send(
        &app,
        Method::POST,
        "/api/operador/",
        Some(json!({"nombre_operador": "Acme"})),
    )
    .await;

    let (status, body) = send(&app, Method::DELETE, "/api/operador/1/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "status": "success",
            "data": {"id_operador": 1, "nombre_operador": "Acme"}
        })
    );

    let (status, _) = send(&app, Method::GET, "/api/operador/1/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_company_id_is_field_level_400() {
    let app = tecnicos_app();
    let payload = json!({"nombre_tecnico": "J. Prado", "id_tecnico_empresa": "T-042"});
    let (status, _) = send(&app, Method::POST, "/api/tecnicos/", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/api/tecnicos/", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    // Raw field-level detail, not wrapped in the envelope.
    assert!(body["id_tecnico_empresa"].is_array());
    assert!(body.get("status").is_none());
}

#[tokio::test]
async fn patch_leaves_unmentioned_fields_unchanged() {
    let app = tecnicos_app();
    send(
        &app,
        Method::POST,
        "/api/tecnicos/",
        Some(json!({"nombre_tecnico": "J. Prado", "id_tecnico_empresa": "T-042"})),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/tecnicos/1/",
        Some(json!({"nombre_tecnico": "J. Prado Jr."})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["nombre_tecnico"], "J. Prado Jr.");
    assert_eq!(body["data"]["id_tecnico_empresa"], "T-042");
}
