use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::timeline::ScoreTimeline;
use crate::types::{ComparativeType, ReplayError};

/// Directorio raíz donde se guardan los comparativos, creado bajo demanda
pub const COMPARATIVES_ROOT: &str = "Comparatives";

/// Artefacto comparativo: una línea de tiempo (o los valores de referencia
/// grabados) etiquetada con el mapa y la variante que la produjo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparativeJson {
    pub map_name: String,
    pub comparative_type: ComparativeType,
    pub values: Value,
}

/// Construye el comparativo de una línea de tiempo generada por un backend
pub fn comparative_from_timeline(
    map_name: &str,
    comparative_type: ComparativeType,
    timeline: ScoreTimeline,
) -> Result<ComparativeJson, ReplayError> {
    Ok(ComparativeJson {
        map_name: map_name.to_string(),
        comparative_type,
        values: serde_json::to_value(timeline.into_entries())?,
    })
}

/// Construye el comparativo de referencia: los valores grabados pasan sin
/// modificación alguna
pub fn comparative_from_reference(map_name: &str, recorded_score: Value) -> ComparativeJson {
    ComparativeJson {
        map_name: map_name.to_string(),
        comparative_type: ComparativeType::Jdnext,
        values: recorded_score,
    }
}

/// Escribe el comparativo en `<root>/Comparatives/<mapa>/<variante>.json`,
/// creando los directorios que falten. Devuelve la ruta escrita.
pub fn write_comparative(
    root: impl AsRef<Path>,
    comparative: &ComparativeJson,
) -> Result<PathBuf, ReplayError> {
    let dir = root
        .as_ref()
        .join(COMPARATIVES_ROOT)
        .join(&comparative.map_name);
    fs::create_dir_all(&dir)?;
    let path = dir.join(comparative.comparative_type.file_name());
    fs::write(&path, serde_json::to_string_pretty(comparative)?)?;
    Ok(path)
}
