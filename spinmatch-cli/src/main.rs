mod common;
mod compare;
mod correct;
mod matrix;
mod table;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "spinmatch";
    pub const BIN_NAME: &str = "spinmatch";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Isotope aware comparison of NMR spin systems measured in protonated and deuterated samples.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log every comparison decision"),
        )
        .subcommand(correct::cli::create_correct_cli())
        .subcommand(compare::cli::create_compare_cli())
        .subcommand(matrix::cli::create_matrix_cli())
        .subcommand(table::cli::create_table_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    let level = match matches.get_flag("verbose") {
        true => "debug",
        false => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match matches.subcommand() {
        //
        // CORRECT
        //
        Some((correct::cli::CORRECT_CMD, matches)) => {
            correct::handlers::run_correct(matches)?;
        }

        //
        // COMPARE
        //
        Some((compare::cli::COMPARE_CMD, matches)) => {
            compare::handlers::run_compare(matches)?;
        }

        //
        // MATRIX
        //
        Some((matrix::cli::MATRIX_CMD, matches)) => {
            matrix::handlers::run_matrix(matches)?;
        }

        //
        // TABLE
        //
        Some((table::cli::TABLE_CMD, matches)) => {
            table::handlers::run_table(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    fn test_verbose_is_global() {
        let matches = build_parser()
            .try_get_matches_from(["spinmatch", "table", "--verbose"])
            .unwrap();
        assert_eq!(matches.get_flag("verbose"), true);
    }
}
