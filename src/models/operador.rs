use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `operador`, referenced by `equipos.operador`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Operador {
    pub id_operador: i32,
    pub nombre_operador: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewOperador {
    pub nombre_operador: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperadorPatch {
    pub nombre_operador: Option<String>,
}
