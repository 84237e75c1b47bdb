use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `equipos`. `operador` is a raw foreign-key id, never expanded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Equipo {
    pub id_equipos: i32,
    pub nombre: String,
    pub numero_serie_equipo: String,
    pub tecnico: String,
    pub operador: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEquipo {
    pub nombre: String,
    pub numero_serie_equipo: String,
    pub tecnico: String,
    #[serde(default)]
    pub operador: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EquipoPatch {
    pub nombre: Option<String>,
    pub numero_serie_equipo: Option<String>,
    pub tecnico: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub operador: Option<Option<i32>>,
}
