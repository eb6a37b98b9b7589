use crate::api::error::{LogError, ValidationError};
use crate::api::types::{Direction, SolvedRecord};

/// Solved words in the order the player cleared them.
///
/// Each navigation choice appends a movement; the finish action appends the
/// terminal record and closes the log until [`restart`](Self::restart).
#[derive(Debug, Clone, Default)]
pub struct SolvedLog {
    records: Vec<SolvedRecord>,
    finished: bool,
}

impl SolvedLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a solved word. A `Terminal` direction finishes the log.
    pub fn record(&mut self, word: &str, direction: Direction) -> Result<(), LogError> {
        if self.finished {
            return Err(LogError::AlreadyFinished);
        }
        let word = word.trim();
        if word.is_empty() {
            return Err(ValidationError::EmptyWord {
                index: self.records.len(),
            }
            .into());
        }
        self.records.push(SolvedRecord::new(word, direction));
        self.finished = direction.is_terminal();
        Ok(())
    }

    /// Append a solved word using a button label such as `"상단"` or `"left"`.
    pub fn record_label(&mut self, word: &str, label: &str) -> Result<(), LogError> {
        let direction = Direction::from_label(label).ok_or_else(|| ValidationError::UnknownDirection {
            index: self.records.len(),
            label: label.to_string(),
        })?;
        self.record(word, direction)
    }

    /// Append the final word as the terminal record.
    pub fn finish(&mut self, word: &str) -> Result<(), LogError> {
        self.record(word, Direction::Terminal)
    }

    /// Number of movement records, i.e. questions answered before finishing.
    pub fn solved_count(&self) -> usize {
        self.records.iter().filter(|r| !r.direction.is_terminal()).count()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn records(&self) -> &[SolvedRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SolvedRecord> {
        self.records
    }

    /// Drop every record and reopen the log.
    pub fn restart(&mut self) {
        self.records.clear();
        self.finished = false;
    }
}
