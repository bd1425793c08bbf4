use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use registrar::Roster;
use std::{collections::BTreeMap, fs, path::PathBuf};

#[derive(Parser)]
#[command(name = "xtask", about = "Registrar workspace tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Check an enrollments JSON file: schema shape, record validity,
    /// and duplicate enrollments
    ValidateRoster { file: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::ValidateRoster { file } => validate_roster(&file),
    }
}

fn validate_roster(path: &PathBuf) -> Result<()> {
    let data_text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let data: serde_json::Value = serde_json::from_str(&data_text).with_context(|| "parse json")?;

    let schema: serde_json::Value =
        serde_json::from_str(include_str!("../../schemas/enrollments.schema.json"))?;
    let compiled = jsonschema::validator_for(&schema)?;
    let schema_errors: Vec<String> = compiled.iter_errors(&data).map(|e| e.to_string()).collect();

    // The schema cannot express the domain rules (a whitespace-only
    // field counts as empty); loading through the library applies them.
    let roster = match Roster::load(path) {
        Ok(roster) if schema_errors.is_empty() => roster,
        loaded => {
            eprintln!("Invalid: {}", path.display());
            for e in &schema_errors {
                eprintln!("- schema: {e}");
            }
            if let Err(err) = loaded {
                eprintln!("- records: {err:#}");
            }
            std::process::exit(1)
        }
    };

    for note in duplicate_enrollments(&roster) {
        println!("note: duplicate enrollment {note}");
    }
    println!("OK: {} ({} records)", path.display(), roster.len());
    Ok(())
}

/// Duplicates are legal in a roster; the validator only points them out.
fn duplicate_enrollments(roster: &Roster) -> Vec<String> {
    let mut seen = BTreeMap::<String, usize>::new();
    for student in roster.students() {
        let key = format!(
            "{} {} / {}",
            student.first_name(),
            student.last_name(),
            student.course_name()
        );
        *seen.entry(key).or_default() += 1;
    }
    seen.into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, count)| format!("{key} (x{count})"))
        .collect()
}
