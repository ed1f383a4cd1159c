use std::path::Path;

use log::info;

use crate::{error::IndexError, indexer::IndexDocument};

/// Pretty-prints `doc` and replaces `path` with it in a single write.
pub(crate) fn write_index(path: &Path, doc: &IndexDocument) -> Result<(), IndexError> {
    let mut json = serde_json::to_string_pretty(doc)?;
    json.push('\n');
    std::fs::write(path, json).map_err(|source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} notes to {path:?}", doc.count);

    Ok(())
}
