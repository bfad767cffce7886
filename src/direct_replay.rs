use crate::scoring_backend::{DirectScoreApi, ScoreResult};
use crate::timeline::ScoreTimeline;
use crate::types::{RecordedSession, ReplayError, PRE_SAMPLE_EPSILON};

/// Etiqueta de feedback para la calificación del backend directo
fn feedback_for_rating(rating: i32, is_gold: bool) -> &'static str {
    match rating {
        0 if is_gold => "MISSYEAH",
        0 => "MISS",
        1 => "OK",
        2 => "GOOD",
        3 => "PERFECT",
        4 => "YEAH",
        _ => "",
    }
}

/// Consume el resultado si corresponde al movimiento esperado: agrega la
/// entrada a la línea de tiempo y avanza el contador de movimientos
fn consume_result(
    result: &ScoreResult,
    move_id: &mut i32,
    last_total: &mut f32,
    timeline: &mut ScoreTimeline,
) {
    if result.move_num != *move_id {
        return;
    }
    let feedback = feedback_for_rating(result.rating, result.is_gold_move);
    timeline.push(feedback, result.total_score - *last_total);
    *move_id += 1;
    *last_total = result.total_score;
}

/// Reproduce la sesión contra un backend de puntaje directo.
///
/// Primero carga clasificador y movimiento por cada movimiento de la sesión;
/// si alguno es rechazado, la reproducción completa falla sin emitir línea de
/// tiempo. Después alimenta todas las muestras en orden, leyendo el último
/// resultado disponible antes de cada muestra (los resultados afloran con una
/// muestra de retraso) y drena los pendientes al terminar.
pub fn replay_direct<B: DirectScoreApi>(
    session: &RecordedSession,
    backend: &mut B,
) -> Result<ScoreTimeline, ReplayError> {
    let total_moves = session.moves.len();
    let mut loaded = 0usize;
    let mut failed = 0usize;
    for (idx, mv) in session.moves.iter().enumerate() {
        let is_last = idx + 1 == total_moves;
        let classifier_ok = backend.load_classifier(&mv.descriptor);
        let move_ok = backend.load_move(
            &mv.descriptor,
            (mv.time * 1000.0) as i32,
            (mv.duration * 1000.0) as i32,
            mv.gold_move,
            is_last,
        );
        if classifier_ok && move_ok {
            loaded += 1;
        } else {
            failed += 1;
        }
    }
    if failed != 0 {
        return Err(ReplayError::ClassifierLoadFailure { loaded, failed });
    }
    println!("[JDNOW] {} movimientos cargados en el backend", loaded);

    let mut timeline = ScoreTimeline::new();
    let mut move_id: i32 = 0;
    let mut last_total = 0.0f32;
    for sample in &session.acc_data {
        let result = backend.get_last_score();
        consume_result(&result, &mut move_id, &mut last_total, &mut timeline);
        backend.add_sample(
            sample.acc_x,
            sample.acc_y,
            sample.acc_z,
            sample.map_time - PRE_SAMPLE_EPSILON,
        );
    }

    // Drenar los resultados que el retraso de una muestra dejó pendientes
    while (move_id as usize) < total_moves {
        let result = backend.get_last_score();
        if result.move_num != move_id {
            break;
        }
        consume_result(&result, &mut move_id, &mut last_total, &mut timeline);
    }

    Ok(timeline)
}
