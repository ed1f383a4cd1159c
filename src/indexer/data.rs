use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::metadata::NoteRecord;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IndexDocument {
    pub generated_at: String,
    pub count: usize,
    pub notes: Vec<NoteRecord>,
}

impl IndexDocument {
    /// Stamps the document with the current UTC time, e.g. `2024-06-01T09:30:00.123Z`.
    pub fn new(notes: Vec<NoteRecord>) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            count: notes.len(),
            notes,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Summary {
    pub out_path: PathBuf,
    pub count: usize,
}
