use clap::{Arg, ArgAction, Command};

use crate::common::table_arg;

pub const TABLE_CMD: &str = "table";

pub fn create_table_cli() -> Command {
    Command::new(TABLE_CMD)
        .about("Print the isotope correction table.")
        .arg(table_arg())
        .arg(
            Arg::new("venters")
                .long("venters")
                .action(ArgAction::SetTrue)
                .help("Compare the table with the per-deuteron model of Venters et al."),
        )
        .arg(
            Arg::new("toml")
                .long("toml")
                .action(ArgAction::SetTrue)
                .conflicts_with("venters")
                .help("Print the table in its TOML file format"),
        )
}
