use std::io::{self, Write};

use anyhow::Result;
use clap::ArgMatches;

use spinmatch_isotope::venters::compare_models;
use spinmatch_isotope::{CorrectableAtom, IsotopeCorrectionTable};

use crate::common::load_table;

fn format_offset(offset: Option<f64>) -> String {
    match offset {
        Some(offset) => format!("{:.3}", offset),
        None => "NA".to_string(),
    }
}

pub fn write_table<W: Write>(out: &mut W, table: &IsotopeCorrectionTable) -> io::Result<()> {
    if let Some(source) = table.source() {
        writeln!(out, "# {}", source)?;
    }
    writeln!(out, "residue\tCA\tCB")?;
    for (residue, offsets) in table.iter() {
        writeln!(
            out,
            "{}\t{}\t{}",
            residue,
            format_offset(offsets.ca),
            format_offset(offsets.cb)
        )?;
    }
    Ok(())
}

///
/// Model prediction, deviation adjusted prediction and table value per
/// residue, with the differences to the table.
///
pub fn write_model_report<W: Write>(
    out: &mut W,
    table: &IsotopeCorrectionTable,
) -> io::Result<()> {
    writeln!(out, "atom\tresidue\tpredicted\tadjusted\ttable\tdiff\tadjusted_diff")?;
    for atom in CorrectableAtom::ALL {
        for row in compare_models(table, atom) {
            writeln!(
                out,
                "{}\t{}\t{:.3}\t{:.3}\t{:.3}\t{:.3}\t{:.3}",
                atom,
                row.residue,
                row.predicted,
                row.adjusted,
                row.table,
                row.difference(),
                row.adjusted_difference()
            )?;
        }
    }
    Ok(())
}

pub fn run_table(matches: &ArgMatches) -> Result<()> {
    let table = load_table(matches)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if matches.get_flag("venters") {
        write_model_report(&mut out, &table)?;
    } else if matches.get_flag("toml") {
        write!(out, "{}", table.to_toml()?)?;
    } else {
        write_table(&mut out, &table)?;
    }

    Ok(())
}
