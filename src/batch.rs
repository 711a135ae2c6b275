//! Batch processing of value sequences
//!
//! Applies seal or open independently to each item of an ordered input
//! sequence. A failed item becomes an error outcome in its position and the
//! remaining items still run, so one malformed value never aborts a batch.

use crate::crypto::KdfParams;
use crate::envelope::{open_value_with, seal_value_with};
use crate::error::SealboxError;

/// Direction of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    /// Encrypt every item
    Seal,
    /// Decrypt every item
    Open,
}

/// Result of one batch item, tagged with its 1-based input position
#[derive(Debug)]
pub struct BatchOutcome {
    pub position: usize,
    pub result: Result<String, SealboxError>,
}

impl BatchOutcome {
    /// Check whether this item failed
    pub fn is_err(&self) -> bool {
        self.result.is_err()
    }

    /// Render for file output: the produced text, or an error marker row
    /// that keeps the item's position visible in the result sequence.
    pub fn into_output_text(self) -> String {
        match self.result {
            Ok(text) => text,
            Err(e) => format!("ERROR (item {}): {}", self.position, e),
        }
    }
}

/// Process every item with the given mode and password
///
/// Returns one outcome per input item, in input order.
pub fn process_batch(
    items: &[String],
    password: &str,
    mode: BatchMode,
    params: &KdfParams,
) -> Vec<BatchOutcome> {
    process_batch_with(items, password, mode, params, |_, _| {})
}

/// Like [`process_batch`], invoking `progress(done, total)` after each item
///
/// The callback lets a caller report progress on long batches without the
/// processor doing any I/O of its own.
pub fn process_batch_with(
    items: &[String],
    password: &str,
    mode: BatchMode,
    params: &KdfParams,
    mut progress: impl FnMut(usize, usize),
) -> Vec<BatchOutcome> {
    let total = items.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, item) in items.iter().enumerate() {
        let result = match mode {
            BatchMode::Seal => seal_value_with(item, password, params),
            BatchMode::Open => open_value_with(item, password, params),
        };
        outcomes.push(BatchOutcome {
            position: index + 1,
            result,
        });
        progress(index + 1, total);
    }

    outcomes
}
