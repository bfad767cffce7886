use crate::types::ScoreEntry;

/// Acumulador de la línea de tiempo de puntuación: una entrada por movimiento
/// procesado, en orden, con el total corriendo de forma explícita. No guarda
/// más estado que la suma acumulada.
#[derive(Debug, Clone, Default)]
pub struct ScoreTimeline {
    entries: Vec<ScoreEntry>,
    total: f32,
}

impl ScoreTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade la contribución de un movimiento y devuelve el total acumulado
    pub fn push(&mut self, feedback: impl Into<String>, added_score: f32) -> f32 {
        self.total += added_score;
        self.entries.push(ScoreEntry {
            feedback: feedback.into(),
            added_score,
            total_score: self.total,
        });
        self.total
    }

    pub fn final_score(&self) -> f32 {
        self.total
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<ScoreEntry> {
        self.entries
    }
}
