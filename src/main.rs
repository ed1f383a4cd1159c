use anyhow::Context as _;
use clap::{command, value_parser, Arg};
use context::{Context, DEFAULT_NOTES_DIR};
use std::path::PathBuf;

mod context;
mod error;
mod indexer;
mod metadata;
mod output;
mod parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("root")
                .long("root")
                .help("Working root. Note paths in the index and the report are relative to it.")
                .value_parser(value_parser!(PathBuf))
                .default_value("."),
            Arg::new("notes_dir")
                .long("notes-dir")
                .help("Directory of notes, relative to the root")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_NOTES_DIR),
            Arg::new("out")
                .long("out")
                .help("Output file, relative to the root. Defaults to index.json in the notes directory. Existing content will be replaced.")
                .value_parser(value_parser!(PathBuf)),
        ])
        .get_matches();

    let root: &PathBuf = matches.get_one("root").context("root has a default")?;
    let notes_dir: &PathBuf = matches
        .get_one("notes_dir")
        .context("notes-dir has a default")?;
    let out: Option<&PathBuf> = matches.get_one("out");

    let root = std::path::absolute(root).with_context(|| format!("while resolving {root:?}"))?;
    let ctx = Context::new(root, notes_dir, out.map(PathBuf::as_path));
    let summary = indexer::run(&ctx)
        .with_context(|| format!("while indexing {:?}", ctx.notes_dir))?;

    println!(
        "Wrote {} with {} notes",
        summary.out_path.display(),
        summary.count
    );

    Ok(())
}
