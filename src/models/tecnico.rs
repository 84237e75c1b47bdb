use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `tecnicos`. `id_tecnico_empresa` is the company-assigned technician
/// id, unique across the table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tecnico {
    pub id_tecnico: i32,
    pub nombre_tecnico: String,
    pub id_tecnico_empresa: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTecnico {
    pub nombre_tecnico: String,
    pub id_tecnico_empresa: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TecnicoPatch {
    pub nombre_tecnico: Option<String>,
    pub id_tecnico_empresa: Option<String>,
}
