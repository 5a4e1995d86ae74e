use clap::{Arg, ArgAction, Command, value_parser};

use crate::common::{settings_args, table_arg};

pub const COMPARE_CMD: &str = "compare";

pub fn create_compare_cli() -> Command {
    Command::new(COMPARE_CMD)
        .about("Compare two spin systems of a project and report matched and unique resonances.")
        .arg(
            Arg::new("project")
                .required(true)
                .help("Project file (.json, .yaml, optionally .gz)"),
        )
        .arg(
            Arg::new("spin-system-a")
                .required(true)
                .value_parser(value_parser!(u32))
                .help("Serial of the first spin system"),
        )
        .arg(
            Arg::new("spin-system-b")
                .required(true)
                .value_parser(value_parser!(u32))
                .help("Serial of the second spin system"),
        )
        .args(settings_args())
        .arg(table_arg())
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the full comparison result as JSON"),
        )
}
