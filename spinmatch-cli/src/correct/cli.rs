use clap::{Arg, ArgAction, Command, arg, value_parser};

use crate::common::table_arg;

pub const CORRECT_CMD: &str = "correct";

pub fn create_correct_cli() -> Command {
    Command::new(CORRECT_CMD)
        .about("Estimate the shift of a CA or CB nucleus under the opposite isotopic condition.")
        .arg(
            arg!(--residue <RESIDUE>)
                .required(true)
                .help("Residue type code, e.g. Ala"),
        )
        .arg(
            arg!(--atom <ATOM>)
                .required(true)
                .help("Atom type, CA or CB"),
        )
        .arg(
            arg!(--shift <SHIFT>)
                .required(true)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Measured chemical shift in ppm"),
        )
        .arg(
            Arg::new("deuterated")
                .long("deuterated")
                .action(ArgAction::SetTrue)
                .help("The shift was measured on the deuterated sample (default: protonated)"),
        )
        .arg(table_arg())
}
