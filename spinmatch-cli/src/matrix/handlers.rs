use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::Serialize;

use spinmatch_compare::SimilarityMatrix;

use crate::common::{load_project, load_table, resolve_settings};

/// One line of the matrix output.
#[derive(Debug, Serialize)]
struct MatrixEntry {
    a: u32,
    b: u32,
    deviation: Option<f64>,
    is_match: bool,
}

fn entries(matrix: &SimilarityMatrix) -> Vec<MatrixEntry> {
    matrix
        .iter()
        .map(|result| MatrixEntry {
            a: result.spin_system_a,
            b: result.spin_system_b,
            deviation: result.deviation,
            is_match: result.is_match,
        })
        .collect()
}

pub fn write_tsv<W: Write>(out: &mut W, matrix: &SimilarityMatrix) -> io::Result<()> {
    writeln!(out, "a\tb\tdeviation\tmatch")?;
    for entry in entries(matrix) {
        let deviation = match entry.deviation {
            Some(deviation) => format!("{:.4}", deviation),
            None => "NA".to_string(),
        };
        writeln!(out, "{}\t{}\t{}\t{}", entry.a, entry.b, deviation, entry.is_match)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, matrix: &SimilarityMatrix) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &entries(matrix))?;
    writeln!(out)?;
    Ok(())
}

pub fn run_matrix(matches: &ArgMatches) -> Result<()> {
    let project = load_project(matches)?;
    let settings = resolve_settings(matches, &project)?;
    let table = load_table(matches)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} [{elapsed_precise}] {msg}")?);
    spinner.set_message(format!(
        "Comparing {} spin systems",
        project.spin_systems.len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let matrix = SimilarityMatrix::build(&project.spin_systems, &table, &settings)
        .context("Failed to build the similarity matrix");
    spinner.finish_and_clear();
    let matrix = matrix?;

    let matched = matrix.iter().filter(|r| r.is_match).count();
    info!("{} of {} ordered pairs match", matched, matrix.len());

    match matches.get_one::<String>("output") {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path))?;
            let mut writer = BufWriter::new(file);

            let is_json = Path::new(path)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json {
                write_json(&mut writer, &matrix)?;
            } else {
                write_tsv(&mut writer, &matrix)?;
            }
            writer.flush()?;
            info!("Wrote similarity matrix to {}", path);
        }
        None => {
            let stdout = io::stdout();
            write_tsv(&mut stdout.lock(), &matrix)?;
        }
    }

    Ok(())
}
