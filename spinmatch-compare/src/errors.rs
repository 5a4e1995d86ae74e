use thiserror::Error;

use spinmatch_isotope::IsotopeError;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error(
        "Resonance {serial} does not have a shift in either of the two shift lists {protonated} and {deuterated}"
    )]
    MissingShiftData {
        serial: u32,
        protonated: u32,
        deuterated: u32,
    },

    #[error("Spin system serial {0} appears more than once")]
    DuplicateSpinSystem(u32),

    #[error(transparent)]
    Isotope(#[from] IsotopeError),
}

pub type CompareResult<T> = std::result::Result<T, CompareError>;
