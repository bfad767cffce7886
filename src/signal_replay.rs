use crate::move_window::window_samples;
use crate::scoring_backend::{is_no_data, SignalApi};
use crate::timeline::ScoreTimeline;
use crate::types::{RecordedSession, ReplayError, GOLD_BUDGET, SIGNAL_CHANNELS, TOTAL_BUDGET};

/// Interpolación lineal sin recortar el parámetro
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Suma las lecturas válidas de los 19 canales. El centinela "sin datos" y
/// los valores no positivos no aportan.
fn sum_valid_channels<B: SignalApi>(backend: &mut B) -> f32 {
    let mut sum = 0.0f32;
    for channel in 1..=SIGNAL_CHANNELS {
        let value = backend.signal_value(channel);
        if is_no_data(value) || value <= 0.0 {
            continue;
        }
        sum += value;
    }
    sum
}

/// Reproduce la sesión contra un backend de señales agregadas.
///
/// El presupuesto se reparte por adelantado: el presupuesto dorado entre los
/// movimientos dorados y el resto entre los regulares, siempre entre el
/// conteo real de cada categoría. Por movimiento se alimentan las muestras de
/// su ventana con el progreso mapeado, se leen los 19 canales y la suma
/// recortada a 6.0 se usa directamente como parámetro de interpolación sobre
/// el presupuesto del movimiento, en su rango 0..6, sin dividir entre 6:
/// los motores comparados interpolan con ese mismo parámetro crudo.
pub fn replay_signals<B: SignalApi>(
    session: &RecordedSession,
    backend: &mut B,
) -> Result<ScoreTimeline, ReplayError> {
    let (gold_count, move_count) = session.category_counts();
    if gold_count == 0 {
        return Err(ReplayError::DegenerateSession { category: "gold" });
    }
    if move_count == 0 {
        return Err(ReplayError::DegenerateSession { category: "regular" });
    }
    let gold_budget = GOLD_BUDGET / gold_count as f32;
    let move_budget = (TOTAL_BUDGET - GOLD_BUDGET) / move_count as f32;

    let mut timeline = ScoreTimeline::new();
    for mv in &session.moves {
        backend.start_move_analysis(&mv.descriptor, mv.duration);
        for windowed in window_samples(mv, &session.acc_data) {
            backend.update_from_progress_and_accels(
                windowed.progress,
                windowed.sample.acc_x,
                windowed.sample.acc_y,
                windowed.sample.acc_z,
            );
        }
        backend.stop_move_analysis();

        let mut fraction = sum_valid_channels(backend) / 100.0;
        if fraction > 6.0 {
            fraction = 6.0;
        }
        let budget = if mv.gold_move { gold_budget } else { move_budget };
        let score = lerp(0.0, budget, fraction);
        timeline.push("UNKNOWN", score);

        let tag = if mv.gold_move { "GOLD" } else { "MOVE" };
        println!(
            "[UAF] {}: {} | Tendencia: {}",
            tag,
            fraction,
            backend.last_move_direction_impact_factor()
        );
    }

    Ok(timeline)
}
