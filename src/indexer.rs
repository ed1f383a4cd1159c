use std::path::PathBuf;

use log::{debug, info, warn};

use crate::{
    context::Context,
    error::IndexError,
    metadata::NoteRecord,
    output::write_index,
    parser::{parse_note, slug_for},
};

mod data;
mod utils;

pub(crate) use data::{IndexDocument, Summary};

const RESERVED_NOTE_NAME: &str = "index.md";

fn check_paths(ctx: &Context) -> Result<(), IndexError> {
    let meta = std::fs::metadata(&ctx.notes_dir).map_err(|source| IndexError::Discover {
        path: ctx.notes_dir.clone(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(IndexError::NotADirectory {
            path: ctx.notes_dir.clone(),
        });
    }
    if ctx.out_path.is_dir() {
        return Err(IndexError::OutputIsDirectory {
            path: ctx.out_path.clone(),
        });
    }
    Ok(())
}

fn is_note_file_name(name: &str) -> bool {
    slug_for(name).len() != name.len() && !name.eq_ignore_ascii_case(RESERVED_NOTE_NAME)
}

/// Markdown files directly inside the notes directory, ordered by file name.
pub(crate) fn discover(ctx: &Context) -> Result<Vec<PathBuf>, IndexError> {
    let discover_err = |source: std::io::Error| IndexError::Discover {
        path: ctx.notes_dir.clone(),
        source,
    };

    let mut found = vec![];
    for entry in std::fs::read_dir(&ctx.notes_dir).map_err(discover_err)? {
        let entry = entry.map_err(discover_err)?;
        if !entry.file_type().map_err(discover_err)?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(name) => name.to_string(),
            None => {
                warn!("File name {file_name:?} is not valid UTF-8. indexing it under a lossy name...");
                file_name.to_string_lossy().into_owned()
            }
        };
        if !is_note_file_name(&name) {
            debug!("Skipping {name}");
            continue;
        }
        found.push((name, entry.path()));
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    info!("Found {} notes in {:?}", found.len(), ctx.notes_dir);

    Ok(found.into_iter().map(|(_, path)| path).collect())
}

/// Reads and parses every discovered note. The first unreadable file aborts the run.
pub(crate) fn collect_notes(ctx: &Context) -> Result<Vec<NoteRecord>, IndexError> {
    let mut notes = vec![];
    for path in discover(ctx)? {
        let content = std::fs::read_to_string(&path).map_err(|source| IndexError::Read {
            path: path.clone(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let rel_path = ctx.relative_to_root(&path).to_string_lossy().into_owned();

        let note = parse_note(&file_name, rel_path, &content);
        debug!("Parsed {:?}: {:?} ({})", note.slug, note.title, note.date);
        notes.push(note);
    }
    Ok(notes)
}

pub(crate) fn build_index(ctx: &Context) -> Result<IndexDocument, IndexError> {
    check_paths(ctx)?;
    let mut notes = collect_notes(ctx)?;
    let collator = utils::title_collator()?;
    notes.sort_by(|a, b| utils::sort_note(&collator, a, b));
    Ok(IndexDocument::new(notes))
}

pub(crate) fn run(ctx: &Context) -> Result<Summary, IndexError> {
    let doc = build_index(ctx)?;
    write_index(&ctx.out_path, &doc)?;

    Ok(Summary {
        out_path: ctx.relative_to_root(&ctx.out_path),
        count: doc.count,
    })
}
