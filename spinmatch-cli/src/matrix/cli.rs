use clap::{Arg, Command, arg};

use crate::common::{settings_args, table_arg};

pub const MATRIX_CMD: &str = "matrix";

pub fn create_matrix_cli() -> Command {
    Command::new(MATRIX_CMD)
        .about("Compare every spin system of a project with every other one.")
        .arg(
            Arg::new("project")
                .required(true)
                .help("Project file (.json, .yaml, optionally .gz)"),
        )
        .args(settings_args())
        .arg(table_arg())
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output file, .tsv or .json (default: TSV on stdout)"),
        )
}
