use std::path::{Path, PathBuf};

pub(crate) const DEFAULT_NOTES_DIR: &str = "mission-control/ops-notes/distilled";
pub(crate) const INDEX_FILE_NAME: &str = "index.json";

/// Paths a single indexing run works with.
#[derive(Debug, Clone)]
pub(crate) struct Context {
    pub root: PathBuf,
    pub notes_dir: PathBuf,
    pub out_path: PathBuf,
}

impl Context {
    /// `notes_dir` and `out_path` are resolved against `root` when relative.
    /// Without an explicit `out_path` the index lands next to the notes.
    pub fn new(root: PathBuf, notes_dir: &Path, out_path: Option<&Path>) -> Self {
        let notes_dir = root.join(notes_dir);
        let out_path = match out_path {
            Some(p) => root.join(p),
            None => notes_dir.join(INDEX_FILE_NAME),
        };
        Self {
            root,
            notes_dir,
            out_path,
        }
    }

    /// `path` as seen from `root`, walking up with `..` when it lies elsewhere.
    pub fn relative_to_root(&self, path: &Path) -> PathBuf {
        pathdiff::diff_paths(path, &self.root).unwrap_or_else(|| path.to_path_buf())
    }
}
