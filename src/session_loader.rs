use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use crate::types::{AccelSample, RecordedMove, RecordedSession, ReplayError};

/// Estructura cruda del JSON que escribe el grabador. Todos los campos son
/// opcionales a propósito: la validación decide qué falta, no serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecorder {
    #[serde(default)]
    map_name: Option<String>,
    #[serde(default)]
    moves: Option<Vec<RawMove>>,
    #[serde(default)]
    recorded_acc_data: Option<Vec<AccelSample>>,
    #[serde(default)]
    recorded_score: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMove {
    /// Descriptor del movimiento en base64
    data: String,
    time: f32,
    duration: f32,
    #[serde(default)]
    gold_move: i64,
}

fn invalid(reason: impl Into<String>) -> ReplayError {
    ReplayError::InvalidSessionFile {
        reason: reason.into(),
    }
}

/// Carga y valida una sesión grabada desde un archivo JSON
pub fn load_session(path: impl AsRef<Path>) -> Result<RecordedSession, ReplayError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    parse_session(&raw)
}

/// Valida el contenido crudo del grabador y lo convierte al modelo de sesión
pub fn parse_session(raw: &str) -> Result<RecordedSession, ReplayError> {
    let raw: RawRecorder =
        serde_json::from_str(raw).map_err(|e| invalid(format!("malformed JSON: {}", e)))?;

    let map_name = match raw.map_name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(invalid("mapName is empty or missing")),
    };
    let raw_moves = raw.moves.ok_or_else(|| invalid("missing moves"))?;
    if raw_moves.is_empty() {
        return Err(invalid("moves is empty"));
    }
    let acc_data = raw
        .recorded_acc_data
        .ok_or_else(|| invalid("missing recordedAccData"))?;
    let recorded_score = raw
        .recorded_score
        .ok_or_else(|| invalid("missing recordedScore"))?;

    let mut moves = Vec::with_capacity(raw_moves.len());
    for (idx, raw_move) in raw_moves.into_iter().enumerate() {
        let descriptor = STANDARD
            .decode(&raw_move.data)
            .map_err(|e| invalid(format!("move {} has an invalid descriptor: {}", idx, e)))?;
        moves.push(RecordedMove {
            descriptor,
            time: raw_move.time,
            duration: raw_move.duration,
            gold_move: raw_move.gold_move != 0,
        });
    }

    Ok(RecordedSession {
        map_name,
        moves,
        acc_data,
        recorded_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_json() -> String {
        // "AAEC" = [0, 1, 2] en base64
        r#"{
            "mapName": "TestMap",
            "moves": [
                {"data": "AAEC", "time": 1.0, "duration": 2.0, "goldMove": 0},
                {"data": "AAEC", "time": 3.5, "duration": 1.5, "goldMove": 1}
            ],
            "recordedAccData": [
                {"accX": 0.1, "accY": -0.2, "accZ": 9.8, "mapTime": 1.2}
            ],
            "recordedScore": [{"feedback": "GOOD", "addedScore": 100.0, "totalScore": 100.0}]
        }"#
        .to_string()
    }

    #[test]
    fn test_parse_valid_session() {
        let session = parse_session(&session_json()).unwrap();
        assert_eq!(session.map_name, "TestMap");
        assert_eq!(session.moves.len(), 2);
        assert_eq!(session.moves[0].descriptor, vec![0, 1, 2]);
        assert!(!session.moves[0].gold_move);
        assert!(session.moves[1].gold_move);
        assert_eq!(session.acc_data.len(), 1);
        assert_eq!(session.acc_data[0].map_time, 1.2);
        assert!(session.recorded_score.is_array());
    }

    #[test]
    fn test_missing_moves_is_rejected() {
        let raw = session_json().replace("\"moves\"", "\"ignored\"");
        let err = parse_session(&raw).unwrap_err();
        assert!(matches!(err, ReplayError::InvalidSessionFile { .. }));
    }

    #[test]
    fn test_empty_map_name_is_rejected() {
        let raw = session_json().replace("TestMap", "");
        let err = parse_session(&raw).unwrap_err();
        assert!(matches!(err, ReplayError::InvalidSessionFile { .. }));
    }

    #[test]
    fn test_empty_move_list_is_rejected() {
        let raw = r#"{
            "mapName": "TestMap",
            "moves": [],
            "recordedAccData": [],
            "recordedScore": []
        }"#;
        let err = parse_session(raw).unwrap_err();
        assert!(matches!(err, ReplayError::InvalidSessionFile { .. }));
    }

    #[test]
    fn test_bad_base64_descriptor_is_rejected() {
        let raw = session_json().replace("AAEC", "no-es-base64!!");
        let err = parse_session(&raw).unwrap_err();
        assert!(matches!(err, ReplayError::InvalidSessionFile { .. }));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_session("{ esto no es json").unwrap_err();
        assert!(matches!(err, ReplayError::InvalidSessionFile { .. }));
    }
}
