use crate::types::NO_DATA_SENTINEL;

/// Resultado del último movimiento puntuado por el backend directo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    /// Índice del movimiento al que pertenece el resultado
    pub move_num: i32,
    /// Calificación 0..=4 (MISS..YEAH)
    pub rating: i32,
    pub is_gold_move: bool,
    /// Puntuación absoluta acumulada que reporta el backend
    pub total_score: f32,
}

/// Capacidad del backend de puntaje directo: se cargan clasificador y
/// movimiento por cada movimiento de la sesión, se alimentan todas las
/// muestras en orden y el backend publica resultados absolutos por movimiento.
///
/// Los resultados afloran con un retraso de exactamente una muestra respecto
/// al orden de alimentación: el llamador lee el último resultado disponible
/// antes de alimentar cada muestra y debe drenar los pendientes al terminar.
pub trait DirectScoreApi {
    fn load_classifier(&mut self, descriptor: &[u8]) -> bool;

    fn load_move(
        &mut self,
        descriptor: &[u8],
        start_ms: i32,
        duration_ms: i32,
        is_gold: bool,
        is_last: bool,
    ) -> bool;

    fn add_sample(&mut self, x: f32, y: f32, z: f32, time: f32);

    /// Último resultado disponible; puede repetir un resultado ya consumido
    fn get_last_score(&mut self) -> ScoreResult;
}

/// Capacidad del backend de señales agregadas: un ciclo begin/feed/end por
/// movimiento y lectura de 19 canales de magnitud al cerrar cada ciclo.
pub trait SignalApi {
    fn start_move_analysis(&mut self, descriptor: &[u8], duration: f32);

    /// Alimenta una muestra cuyo progreso cae dentro del movimiento en curso
    fn update_from_progress_and_accels(&mut self, progress: f32, x: f32, y: f32, z: f32);

    fn stop_move_analysis(&mut self);

    /// Lectura del canal 1..=19 tras cerrar el análisis de un movimiento
    fn signal_value(&mut self, channel: u8) -> f32;

    /// Factor de impacto direccional del último movimiento (solo diagnóstico)
    fn last_move_direction_impact_factor(&mut self) -> f32;
}

/// Detecta el centinela "sin datos" comparando el patrón de bits exacto
pub fn is_no_data(value: f32) -> bool {
    value.to_bits() == NO_DATA_SENTINEL.to_bits()
}
