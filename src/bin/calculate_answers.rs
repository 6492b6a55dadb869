//! Calculate a footprint from a saved answers file
//!
//! Usage: cargo run --bin calculate_answers -- answers.json [activities.json project_id]
//!
//! Prints the markdown summary. With an activities store and a project id,
//! the project's shared activities are included.

use anyhow::{bail, Context, Result};
use greendex_calculator::report::{EmissionReport, MarkdownFormatter};
use greendex_calculator::{ParticipantAnswers, ProjectActivityStore};
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (answers_path, store_args) = match args.as_slice() {
        [answers] => (answers, None),
        [answers, store, project] => (answers, Some((store, project))),
        _ => bail!("usage: calculate_answers <answers.json> [<activities.json> <project_id>]"),
    };

    let contents = fs::read_to_string(answers_path)
        .with_context(|| format!("Failed to read answers file: {}", answers_path))?;
    let answers: ParticipantAnswers = serde_json::from_str(&contents)
        .with_context(|| "Failed to parse answers JSON")?;

    let activities = match store_args {
        Some((store_path, project_id)) => {
            let store = ProjectActivityStore::load(Path::new(store_path))?;
            if !store.contains(project_id) {
                bail!("Project '{}' not found in {}", project_id, store_path);
            }
            store.activities(project_id).to_vec()
        }
        None => Vec::new(),
    };

    let report = EmissionReport::build(&answers, &activities);
    println!("{}", MarkdownFormatter::format(&report));

    Ok(())
}
