use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of `ordenes`. `puntos_orden` is NUMERIC(10,2); the two `valor_*`
/// columns are plain text (the upstream schema never settled on a numeric
/// type for them).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Orden {
    pub id_orden: i32,
    pub tipo_orden: String,
    pub puntos_orden: Option<Decimal>,
    pub valor_orden_tecnico: Option<String>,
    pub valor_orden_empresa: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewOrden {
    pub tipo_orden: String,
    #[serde(default)]
    pub puntos_orden: Option<Decimal>,
    #[serde(default)]
    pub valor_orden_tecnico: Option<String>,
    #[serde(default)]
    pub valor_orden_empresa: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrdenPatch {
    pub tipo_orden: Option<String>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub puntos_orden: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub valor_orden_tecnico: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::models::double_option")]
    pub valor_orden_empresa: Option<Option<String>>,
}
