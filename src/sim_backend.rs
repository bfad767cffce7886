//! Backends sintéticos deterministas. Implementan el mismo contrato que los
//! motores de puntuación nativos y derivan sus resultados únicamente de las
//! muestras alimentadas: la misma sesión produce siempre el mismo comparativo.
//! Sirven como banco de pruebas del pipeline completo cuando los motores
//! reales no están disponibles.

use crate::scoring_backend::{DirectScoreApi, ScoreResult, SignalApi};
use crate::types::{NO_DATA_SENTINEL, SIGNAL_CHANNELS, TOTAL_BUDGET};

const CHANNELS: usize = SIGNAL_CHANNELS as usize;

/// Calificación 0..=4 según la magnitud media de aceleración del movimiento
fn rating_for_mean(mean: f32) -> i32 {
    match mean {
        m if m >= 8.0 => 4,
        m if m >= 6.0 => 3,
        m if m >= 4.0 => 2,
        m if m >= 2.0 => 1,
        _ => 0,
    }
}

struct LoadedMove {
    end_ms: i32,
    is_gold: bool,
}

/// Backend directo sintético. Publica a lo sumo un resultado por muestra
/// alimentada; el resultado de un movimiento aflora con la primera muestra
/// cuyo tiempo alcanza el final del movimiento, así que la grabación debe
/// extenderse hasta el final del último movimiento.
pub struct SimDirectBackend {
    moves: Vec<LoadedMove>,
    completed: usize,
    energy: f32,
    samples: u32,
    total: f32,
    last: ScoreResult,
}

impl SimDirectBackend {
    pub fn new() -> Self {
        Self {
            moves: Vec::new(),
            completed: 0,
            energy: 0.0,
            samples: 0,
            total: 0.0,
            last: ScoreResult {
                move_num: -1,
                rating: 0,
                is_gold_move: false,
                total_score: 0.0,
            },
        }
    }

    fn finish_move(&mut self) {
        let mv = &self.moves[self.completed];
        let mean = if self.samples == 0 {
            0.0
        } else {
            self.energy / self.samples as f32
        };
        let rating = rating_for_mean(mean);
        let per_move = TOTAL_BUDGET / self.moves.len() as f32;
        self.total += per_move * rating as f32 / 4.0;
        self.last = ScoreResult {
            move_num: self.completed as i32,
            rating,
            is_gold_move: mv.is_gold,
            total_score: self.total,
        };
        self.completed += 1;
        self.energy = 0.0;
        self.samples = 0;
    }
}

impl Default for SimDirectBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectScoreApi for SimDirectBackend {
    fn load_classifier(&mut self, descriptor: &[u8]) -> bool {
        !descriptor.is_empty()
    }

    fn load_move(
        &mut self,
        descriptor: &[u8],
        start_ms: i32,
        duration_ms: i32,
        is_gold: bool,
        _is_last: bool,
    ) -> bool {
        self.moves.push(LoadedMove {
            end_ms: start_ms + duration_ms,
            is_gold,
        });
        !descriptor.is_empty()
    }

    fn add_sample(&mut self, x: f32, y: f32, z: f32, time: f32) {
        let time_ms = (time * 1000.0) as i32;
        if self.completed < self.moves.len() && time_ms >= self.moves[self.completed].end_ms {
            self.finish_move();
        }
        self.energy += x.abs() + y.abs() + z.abs();
        self.samples += 1;
    }

    fn get_last_score(&mut self) -> ScoreResult {
        self.last
    }
}

/// Backend de señales sintético. Distribuye la magnitud media del movimiento
/// entre los primeros 12 canales con pesos crecientes; los canales restantes
/// reportan el centinela "sin datos", como un sensor con cobertura parcial.
pub struct SimSignalBackend {
    active: bool,
    energy: f32,
    samples: u32,
    channels: [f32; CHANNELS],
    impact: f32,
}

impl SimSignalBackend {
    pub fn new() -> Self {
        Self {
            active: false,
            energy: 0.0,
            samples: 0,
            channels: [NO_DATA_SENTINEL; CHANNELS],
            impact: 0.0,
        }
    }
}

impl Default for SimSignalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalApi for SimSignalBackend {
    fn start_move_analysis(&mut self, _descriptor: &[u8], _duration: f32) {
        self.active = true;
        self.energy = 0.0;
        self.samples = 0;
    }

    fn update_from_progress_and_accels(&mut self, _progress: f32, x: f32, y: f32, z: f32) {
        if !self.active {
            return;
        }
        self.energy += x.abs() + y.abs() + z.abs();
        self.samples += 1;
    }

    fn stop_move_analysis(&mut self) {
        self.active = false;
        if self.samples == 0 {
            self.channels = [NO_DATA_SENTINEL; CHANNELS];
            self.impact = 0.0;
            return;
        }
        let mean = self.energy / self.samples as f32;
        for (idx, slot) in self.channels.iter_mut().enumerate() {
            *slot = if idx < 12 {
                mean * (0.5 + 0.25 * idx as f32)
            } else {
                NO_DATA_SENTINEL
            };
        }
        self.impact = mean / 10.0;
    }

    fn signal_value(&mut self, channel: u8) -> f32 {
        self.channels[channel as usize - 1]
    }

    fn last_move_direction_impact_factor(&mut self) -> f32 {
        self.impact
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring_backend::is_no_data;

    #[test]
    fn test_direct_results_surface_one_sample_late() {
        let mut backend = SimDirectBackend::new();
        assert!(backend.load_classifier(&[1]));
        assert!(backend.load_move(&[1], 0, 1000, false, true));

        backend.add_sample(3.0, 3.0, 3.0, 0.5);
        assert_eq!(backend.get_last_score().move_num, -1);

        // La primera muestra que alcanza el final del movimiento lo cierra
        backend.add_sample(3.0, 3.0, 3.0, 1.0);
        let result = backend.get_last_score();
        assert_eq!(result.move_num, 0);
        // media 9.0 -> rating 4 -> presupuesto completo del movimiento
        assert_eq!(result.rating, 4);
        assert!((result.total_score - TOTAL_BUDGET).abs() < 1e-2);
    }

    #[test]
    fn test_direct_rejects_empty_descriptor() {
        let mut backend = SimDirectBackend::new();
        assert!(!backend.load_classifier(&[]));
        assert!(!backend.load_move(&[], 0, 1000, false, true));
    }

    #[test]
    fn test_direct_is_deterministic() {
        let run = || {
            let mut backend = SimDirectBackend::new();
            backend.load_classifier(&[1]);
            backend.load_move(&[1], 0, 500, false, false);
            backend.load_move(&[1], 500, 500, true, true);
            for i in 0..20 {
                backend.add_sample(1.5, 2.5, 0.5, i as f32 * 0.1);
            }
            backend.get_last_score()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_signal_channels_cover_first_twelve() {
        let mut backend = SimSignalBackend::new();
        backend.start_move_analysis(&[1], 1.0);
        backend.update_from_progress_and_accels(0.5, 2.0, 2.0, 2.0);
        backend.stop_move_analysis();

        for channel in 1..=SIGNAL_CHANNELS {
            let value = backend.signal_value(channel);
            if channel <= 12 {
                assert!(value > 0.0);
                assert!(!is_no_data(value));
            } else {
                assert!(is_no_data(value));
            }
        }
    }

    #[test]
    fn test_signal_move_without_samples_reports_no_data() {
        let mut backend = SimSignalBackend::new();
        backend.start_move_analysis(&[1], 1.0);
        backend.stop_move_analysis();

        for channel in 1..=SIGNAL_CHANNELS {
            assert!(is_no_data(backend.signal_value(channel)));
        }
    }

    #[test]
    fn test_end_to_end_comparatives_are_deterministic() {
        let raw = r#"{
            "mapName": "MapaSim",
            "moves": [
                {"data": "AAEC", "time": 0.0, "duration": 1.0, "goldMove": 1},
                {"data": "AAEC", "time": 1.0, "duration": 1.0, "goldMove": 0}
            ],
            "recordedAccData": [
                {"accX": 2.0, "accY": 3.0, "accZ": 4.0, "mapTime": 0.3},
                {"accX": 1.0, "accY": 1.0, "accZ": 1.0, "mapTime": 0.6},
                {"accX": 5.0, "accY": 0.0, "accZ": 2.0, "mapTime": 0.9},
                {"accX": 2.0, "accY": 2.0, "accZ": 2.0, "mapTime": 1.3},
                {"accX": 3.0, "accY": 1.0, "accZ": 0.5, "mapTime": 1.6},
                {"accX": 4.0, "accY": 4.0, "accZ": 4.0, "mapTime": 1.9},
                {"accX": 0.5, "accY": 0.5, "accZ": 0.5, "mapTime": 2.2}
            ],
            "recordedScore": []
        }"#;

        let run_direct = || {
            let session = crate::session_loader::parse_session(raw).unwrap();
            let mut backend = SimDirectBackend::new();
            crate::direct_replay::replay_direct(&session, &mut backend)
                .unwrap()
                .into_entries()
        };
        let direct = run_direct();
        assert_eq!(direct.len(), 2);
        assert_eq!(direct, run_direct());

        let run_signals = || {
            let session = crate::session_loader::parse_session(raw).unwrap();
            let mut backend = SimSignalBackend::new();
            crate::signal_replay::replay_signals(&session, &mut backend)
                .unwrap()
                .into_entries()
        };
        let signals = run_signals();
        assert_eq!(signals.len(), 2);
        assert_eq!(signals, run_signals());
    }

    #[test]
    fn updates_outside_an_analysis_are_ignored() {
        let mut backend = SimSignalBackend::new();
        backend.update_from_progress_and_accels(0.5, 9.0, 9.0, 9.0);
        backend.start_move_analysis(&[1], 1.0);
        backend.stop_move_analysis();

        assert!(is_no_data(backend.signal_value(1)));
    }
}
