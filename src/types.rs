use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Presupuesto total de puntos de una sesión completa
pub const TOTAL_BUDGET: f32 = 13333.0;

/// Porción del presupuesto reservada para los movimientos dorados
pub const GOLD_BUDGET: f32 = 1000.0;

/// Sesgo fijo (segundos) restado al timestamp de cada muestra antes de
/// entregarla al backend: los motores esperan muestreo ligeramente adelantado
pub const PRE_SAMPLE_EPSILON: f32 = 0.1;

/// Canales de señal expuestos por el backend agregado (1..=19)
pub const SIGNAL_CHANNELS: u8 = 19;

/// Centinela "sin datos" del backend agregado: el máximo de 32 bits sin signo
/// llevado a f32 (2^32, patrón de bits 0x4F80_0000). Se compara por bits,
/// nunca formateando el float como texto
pub const NO_DATA_SENTINEL: f32 = 4_294_967_296.0;

/// Un movimiento de la coreografía grabada
#[derive(Debug, Clone)]
pub struct RecordedMove {
    /// Descriptor binario opaco del movimiento (el backend lo interpreta)
    pub descriptor: Vec<u8>,
    /// Inicio del movimiento en segundos relativos a la sesión
    pub time: f32,
    /// Duración en segundos
    pub duration: f32,
    /// Movimiento dorado (puntúa contra el presupuesto dorado)
    pub gold_move: bool,
}

impl RecordedMove {
    pub fn end_time(&self) -> f32 {
        self.time + self.duration
    }
}

/// Una muestra del acelerómetro grabado
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccelSample {
    pub acc_x: f32,
    pub acc_y: f32,
    pub acc_z: f32,
    /// Timestamp en segundos relativo al inicio del mapa
    pub map_time: f32,
}

/// Una entrada de la línea de tiempo de puntuación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub feedback: String,
    pub added_score: f32,
    pub total_score: f32,
}

/// Variante de comparativo generado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparativeType {
    /// Puntuación de referencia grabada, copiada sin modificar
    #[serde(rename = "JDNEXT")]
    Jdnext,
    /// Backend de puntaje directo (rating + total por movimiento)
    #[serde(rename = "JDNOW")]
    Jdnow,
    /// Backend de señales agregadas (19 canales por movimiento)
    #[serde(rename = "UAF")]
    Uaf,
}

impl ComparativeType {
    pub fn tag(&self) -> &'static str {
        match self {
            ComparativeType::Jdnext => "JDNEXT",
            ComparativeType::Jdnow => "JDNOW",
            ComparativeType::Uaf => "UAF",
        }
    }

    /// Nombre de archivo del comparativo dentro del directorio del mapa
    pub fn file_name(&self) -> &'static str {
        match self {
            ComparativeType::Jdnext => "jdnext.json",
            ComparativeType::Jdnow => "jdnow.json",
            ComparativeType::Uaf => "uaf.json",
        }
    }
}

/// Sesión grabada completa, de solo lectura una vez cargada
#[derive(Debug, Clone)]
pub struct RecordedSession {
    pub map_name: String,
    /// Movimientos ordenados por tiempo de inicio (pueden solaparse)
    pub moves: Vec<RecordedMove>,
    /// Muestras del acelerómetro ordenadas por timestamp
    pub acc_data: Vec<AccelSample>,
    /// Valores de referencia grabados, opacos: se copian tal cual al
    /// comparativo JDNEXT
    pub recorded_score: serde_json::Value,
}

impl RecordedSession {
    /// Cuenta (dorados, regulares)
    pub fn category_counts(&self) -> (usize, usize) {
        let gold = self.moves.iter().filter(|m| m.gold_move).count();
        (gold, self.moves.len() - gold)
    }
}

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("invalid session file: {reason}")]
    InvalidSessionFile { reason: String },

    #[error("classifier load failed ({loaded} loaded, {failed} failed)")]
    ClassifierLoadFailure { loaded: usize, failed: usize },

    #[error("session has no {category} moves, cannot split the score budget")]
    DegenerateSession { category: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
