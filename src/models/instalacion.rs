use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `instalaciones`. `numero_serie_equipo` points at an equipment
/// serial number by convention only; the schema does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Instalacion {
    pub id_instalaciones: i32,
    pub numero_serie_equipo: String,
    pub numero_de_orden: String,
    pub fecha_cierre: Option<NaiveDate>,
    pub id_tecnico_empresa: String,
    pub nombre_tecnico: String,
    pub descripcion: Option<String>,
    pub tipo: Option<String>,
    pub tipo_orden: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewInstalacion {
    pub numero_serie_equipo: String,
    pub numero_de_orden: String,
    #[serde(default)]
    pub fecha_cierre: Option<NaiveDate>,
    pub id_tecnico_empresa: String,
    pub nombre_tecnico: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub tipo_orden: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstalacionPatch {
    pub numero_serie_equipo: Option<String>,
    pub numero_de_orden: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub fecha_cierre: Option<Option<NaiveDate>>,
    pub id_tecnico_empresa: Option<String>,
    pub nombre_tecnico: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub descripcion: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub tipo: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub tipo_orden: Option<Option<String>>,
}
