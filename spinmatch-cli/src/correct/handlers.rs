use anyhow::{Context, Result};
use clap::ArgMatches;
use log::debug;

use spinmatch_core::models::{AtomType, IsotopicCondition, ResidueType};
use spinmatch_isotope::correct;

use crate::common::load_table;

pub fn run_correct(matches: &ArgMatches) -> Result<()> {
    let residue = matches
        .get_one::<String>("residue")
        .context("--residue is required")?;
    let atom = matches
        .get_one::<String>("atom")
        .context("--atom is required")?;
    let shift = *matches
        .get_one::<f64>("shift")
        .context("--shift is required")?;

    let measured = match matches.get_flag("deuterated") {
        true => IsotopicCondition::Deuterated,
        false => IsotopicCondition::Protonated,
    };

    let table = load_table(matches)?;
    let residue: ResidueType = residue.parse()?;
    let atom = AtomType::from(atom.as_str());

    let corrected = correct(&table, &residue, &atom, shift, measured)
        .with_context(|| format!("Can not correct {} {}", residue, atom))?;

    debug!(
        "{} {} {:.3} ({}) -> {:.3} ({})",
        residue,
        atom,
        shift,
        measured,
        corrected,
        measured.opposite()
    );
    println!("{:.3}", corrected);

    Ok(())
}
