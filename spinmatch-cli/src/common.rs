use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, arg, value_parser};
use log::{info, warn};

use spinmatch_compare::CompareSettings;
use spinmatch_core::models::{IsotopicCondition, NmrProject, ShiftListId};
use spinmatch_isotope::IsotopeCorrectionTable;

pub fn table_arg() -> Arg {
    arg!(--table <TABLE>)
        .required(false)
        .help("Isotope correction table in TOML format (default: built-in TALOS+ values)")
}

///
/// Arguments selecting the shift lists to compare and the correction mode.
///
pub fn settings_args() -> [Arg; 3] {
    [
        arg!(--protonated <ID>)
            .required(false)
            .value_parser(value_parser!(u32))
            .help("Serial of the shift list measured on the protonated sample"),
        arg!(--deuterated <ID>)
            .required(false)
            .value_parser(value_parser!(u32))
            .help("Serial of the shift list measured on the deuterated sample"),
        Arg::new("no-correction")
            .long("no-correction")
            .action(ArgAction::SetTrue)
            .help("Compare measured values only, without estimating isotope shifts"),
    ]
}

pub fn load_table(matches: &ArgMatches) -> Result<IsotopeCorrectionTable> {
    let table = match matches.get_one::<String>("table") {
        Some(path) => IsotopeCorrectionTable::try_from(Path::new(path))
            .with_context(|| format!("Failed to load correction table {}", path))?,
        None => IsotopeCorrectionTable::talos()?,
    };
    Ok(table)
}

pub fn load_project(matches: &ArgMatches) -> Result<NmrProject> {
    let path = matches
        .get_one::<String>("project")
        .context("A project file is required")?;

    NmrProject::try_from(Path::new(path))
        .with_context(|| format!("Failed to load project {}", path))
}

fn shift_list(
    matches: &ArgMatches,
    project: &NmrProject,
    condition: IsotopicCondition,
) -> Result<ShiftListId> {
    let name = condition.to_string();
    if let Some(serial) = matches.get_one::<u32>(&name) {
        return Ok(ShiftListId(*serial));
    }

    match project.shift_list_for(condition) {
        Some(serial) => {
            warn!(
                "No --{} shift list given, using shift list {} declared as {}",
                name, serial, name
            );
            Ok(serial)
        }
        None => bail!(
            "No --{} shift list given and the project declares none as {}",
            name,
            name
        ),
    }
}

///
/// Comparison settings from the command line, falling back to the
/// conditions the project declares on its shift lists.
///
pub fn resolve_settings(matches: &ArgMatches, project: &NmrProject) -> Result<CompareSettings> {
    let protonated = shift_list(matches, project, IsotopicCondition::Protonated)?;
    let deuterated = shift_list(matches, project, IsotopicCondition::Deuterated)?;

    if protonated == deuterated {
        bail!(
            "The protonated and deuterated shift list are the same ({})",
            protonated
        );
    }

    let apply_correction = !matches.get_flag("no-correction");
    info!(
        "Comparing shift list {} (protonated) with {} (deuterated), isotope correction {}",
        protonated,
        deuterated,
        if apply_correction { "on" } else { "off" }
    );

    Ok(CompareSettings::new(protonated, deuterated).with_correction(apply_correction))
}
