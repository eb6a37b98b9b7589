//! Validation of raw `(word, direction label)` pairs into [`SolvedRecord`]s.

use crate::api::error::ValidationError;
use crate::api::types::{Direction, RawRecord, SolvedRecord};

/// Check an already-typed record sequence.
///
/// Words must be non-blank and `Terminal` may only appear on the last record.
/// A list without any `Terminal` is valid.
pub fn validate(records: &[SolvedRecord]) -> Result<(), ValidationError> {
    let last = records.len().saturating_sub(1);
    for (index, record) in records.iter().enumerate() {
        if record.word.trim().is_empty() {
            return Err(ValidationError::EmptyWord { index });
        }
        if record.direction.is_terminal() && index != last {
            return Err(ValidationError::MisplacedTerminal { index });
        }
    }
    Ok(())
}

/// Parse one raw record. `index` is only used for error reporting.
pub fn parse_record(index: usize, raw: &RawRecord) -> Result<SolvedRecord, ValidationError> {
    let direction =
        Direction::from_label(&raw.direction).ok_or_else(|| ValidationError::UnknownDirection {
            index,
            label: raw.direction.clone(),
        })?;
    if raw.word.trim().is_empty() {
        return Err(ValidationError::EmptyWord { index });
    }
    Ok(SolvedRecord::new(raw.word.trim(), direction))
}

/// Parse and validate a whole batch. The first offending record rejects the batch.
pub fn ingest(raw: &[RawRecord]) -> Result<Vec<SolvedRecord>, ValidationError> {
    let result = raw
        .iter()
        .enumerate()
        .map(|(index, r)| parse_record(index, r))
        .collect::<Result<Vec<_>, _>>()
        .and_then(|records| validate(&records).map(|()| records));

    if let Err(err) = &result {
        log::warn!("rejected batch of {} records: {}", raw.len(), err);
    }
    result
}

/// Parse a JSON array of `{ "word": ..., "direction": ... }` objects.
pub fn raw_records_from_json(json: &str) -> Result<Vec<RawRecord>, serde_json::Error> {
    serde_json::from_str(json)
}
