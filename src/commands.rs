//! Subcommand implementations behind the `ldforge` binary

use anyhow::Context;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::domain::{ClipboardExporter, SchemaType};
use crate::forms::{load_form_state, load_forms_from_dir, FormState};
use crate::mapper::SchemaMapper;
use crate::preview::{self, FileExporter};
use crate::validation;

pub fn run<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> anyhow::Result<()> {
    let mapper = SchemaMapper::new(settings.mapper.clone());
    match &cli.command {
        Command::Generate {
            file,
            schema_type,
            output,
            json,
        } => {
            let state = load(file, *schema_type)?;
            let text = if *json {
                preview::to_pretty_json(&mapper.generate(&state)?)?
            } else {
                mapper.render(&state)?
            };
            match output {
                Some(path) => FileExporter::new(path).write_text(&text)?,
                None => writeln!(out, "{}", text)?,
            }
        }
        Command::Validate { file, schema_type } => {
            let state = load(file, *schema_type)?;
            let report = validation::validate(&state, state.schema_type);
            if !report.is_empty() {
                writeln!(out, "{} form in {}:", state.schema_type, file.display())?;
                writeln!(out, "{}", report)?;
                anyhow::bail!("{} issue(s) found", report.len());
            }
            writeln!(out, "{}: no issues", file.display())?;
        }
        Command::Batch { dir, out_dir } => {
            let written = batch(&mapper, dir, out_dir)?;
            writeln!(out, "Generated {} script(s) in {}", written, out_dir.display())?;
        }
        Command::Types => {
            for schema_type in SchemaType::ALL {
                writeln!(
                    out,
                    "{:<14} {}",
                    schema_type.as_str(),
                    schema_type.schema_org_type()
                )?;
            }
        }
    }
    Ok(())
}

fn load(file: &Path, schema_type: Option<SchemaType>) -> anyhow::Result<FormState> {
    let mut state = load_form_state(file)?;
    if let Some(schema_type) = schema_type {
        state.select(schema_type);
    }
    Ok(state)
}

fn script_path(out_dir: &Path, form: &Path) -> PathBuf {
    let stem = form
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("schema");
    out_dir.join(format!("{}.html", stem))
}

/// Render every form file in `dir` to `{out_dir}/{stem}.html`.
///
/// Nothing is written when two forms share a stem. Forms that fail to
/// generate are logged and skipped; the batch fails once every other form
/// has been written.
pub fn batch(mapper: &SchemaMapper, dir: &Path, out_dir: &Path) -> anyhow::Result<usize> {
    let forms = load_forms_from_dir(dir)
        .with_context(|| format!("Failed to load forms from {}", dir.display()))?;

    let mut targets: BTreeMap<PathBuf, Vec<String>> = BTreeMap::new();
    for (path, _) in &forms {
        targets
            .entry(script_path(out_dir, path))
            .or_default()
            .push(path.display().to_string());
    }
    let collisions: Vec<String> = targets
        .iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(target, sources)| format!("{} <- {}", target.display(), sources.join(", ")))
        .collect();
    if !collisions.is_empty() {
        anyhow::bail!(
            "Form files share an output name: {}",
            collisions.join("; ")
        );
    }

    let mut written = 0;
    let mut failed = Vec::new();
    for (path, state) in forms {
        match mapper.render(&state) {
            Ok(script) => {
                FileExporter::new(script_path(out_dir, &path)).write_text(&script)?;
                written += 1;
            }
            Err(e) => {
                tracing::error!("Skipping {}: {}", path.display(), e);
                failed.push(path.display().to_string());
            }
        }
    }

    if !failed.is_empty() {
        anyhow::bail!("Failed to generate: {}", failed.join(", "));
    }
    tracing::info!("Generated {} script(s) from {}", written, dir.display());
    Ok(written)
}
