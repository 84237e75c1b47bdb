//! Entity rows and request payloads. Field names match the table columns and
//! the wire format exactly; no renaming layer in between.
//!
//! Each entity has three shapes: the row itself (`FromRow` + `Serialize`),
//! a `New*` create payload (all columns except the id) and a `*Patch` update
//! payload (everything optional). Nullable columns in a patch use
//! `Option<Option<T>>` so that an absent key leaves the column unchanged
//! while an explicit `null` clears it.

mod equipo;
mod instalacion;
mod operador;
mod orden;
mod tecnico;

pub use equipo::{Equipo, EquipoPatch, NewEquipo};
pub use instalacion::{Instalacion, InstalacionPatch, NewInstalacion};
pub use operador::{NewOperador, Operador, OperadorPatch};
pub use orden::{NewOrden, Orden, OrdenPatch};
pub use tecnico::{NewTecnico, Tecnico, TecnicoPatch};

/// Deserializer for patch fields on nullable columns: the outer `Option` is
/// only `Some` when the key was present in the request body.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(de).map(Some)
}
