use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;

use spinmatch_compare::{CompareSpinSystems, SpinSystemComparisonResult, UniqueResonance};
use spinmatch_core::models::SpinSystem;

use crate::common::{load_project, load_table, resolve_settings};

fn format_uniques(uniques: &[UniqueResonance]) -> String {
    match uniques.is_empty() {
        true => "-".to_string(),
        false => uniques
            .iter()
            .map(|u| u.resonance.name.clone())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

///
/// Human readable report: one line per comparison, then the leftovers and
/// the verdict.
///
pub fn write_report<W: Write>(
    out: &mut W,
    a: &SpinSystem,
    b: &SpinSystem,
    result: &SpinSystemComparisonResult,
) -> io::Result<()> {
    writeln!(
        out,
        "Spin system {} ({}) vs {} ({})",
        a.serial,
        a.describe(),
        b.serial,
        b.describe()
    )?;

    for pair in &result.matched {
        for comparison in &pair.comparisons {
            writeln!(
                out,
                "{:<10}\t{:>10}\t{:<10}\t{:>10}\t{:.3}{}",
                pair.a.name_under(comparison.condition()),
                comparison.a.to_string(),
                pair.b.name_under(comparison.condition()),
                comparison.b.to_string(),
                comparison.distance(),
                if comparison.is_match() { "" } else { " !" }
            )?;
        }
    }

    writeln!(out, "Unique to {}: {}", a.serial, format_uniques(&result.unique_a))?;
    writeln!(out, "Unique to {}: {}", b.serial, format_uniques(&result.unique_b))?;

    match result.deviation {
        Some(deviation) => writeln!(out, "Deviation: {:.3}", deviation)?,
        None => writeln!(out, "Deviation: -")?,
    }
    writeln!(out, "Match: {}", if result.is_match { "yes" } else { "no" })?;

    Ok(())
}

pub fn run_compare(matches: &ArgMatches) -> Result<()> {
    let serial_a = *matches
        .get_one::<u32>("spin-system-a")
        .context("The first spin system is required")?;
    let serial_b = *matches
        .get_one::<u32>("spin-system-b")
        .context("The second spin system is required")?;

    let project = load_project(matches)?;
    let settings = resolve_settings(matches, &project)?;
    let table = load_table(matches)?;

    let a = project.get(serial_a)?;
    let b = project.get(serial_b)?;

    let result = a
        .compare_with(b, &table, &settings)
        .with_context(|| format!("Failed to compare spin systems {} and {}", serial_a, serial_b))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match matches.get_flag("json") {
        true => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
        false => write_report(&mut out, a, b, &result)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use spinmatch_compare::CompareSettings;
    use spinmatch_core::models::{NmrProject, ShiftListId};
    use spinmatch_isotope::IsotopeCorrectionTable;

    fn get_test_path(file_name: &str) -> String {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/projects")
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }

    #[rstest]
    fn test_report() {
        let project = NmrProject::try_from(get_test_path("small.json").as_str()).unwrap();
        let table = IsotopeCorrectionTable::talos().unwrap();
        let settings = CompareSettings::new(ShiftListId(1), ShiftListId(2));

        let a = project.get(1).unwrap();
        let b = project.get(2).unwrap();
        let result = a.compare_with(b, &table, &settings).unwrap();

        let mut buffer = Vec::new();
        write_report(&mut buffer, a, b, &result).unwrap();
        let report = String::from_utf8(buffer).unwrap();

        assert!(report.starts_with("Spin system 1 (Ala) vs 2 (Ala)"));
        assert!(report.contains("CA (D)"));
        assert!(report.contains("51.527?"));
        assert!(report.contains("Unique to 1: N"));
        assert!(report.contains("Unique to 2: -"));
        assert_eq!(report.lines().last(), Some("Match: yes"));
    }

    #[rstest]
    fn test_run_compare() {
        let project = get_test_path("small.json");
        let matches = crate::compare::cli::create_compare_cli()
            .try_get_matches_from(["compare", project.as_str(), "1", "3", "--json"])
            .unwrap();
        assert!(run_compare(&matches).is_ok());

        let matches = crate::compare::cli::create_compare_cli()
            .try_get_matches_from(["compare", project.as_str(), "1", "42"])
            .unwrap();
        assert!(run_compare(&matches).is_err());
    }
}
