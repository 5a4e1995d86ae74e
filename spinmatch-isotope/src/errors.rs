use thiserror::Error;

#[derive(Error, Debug)]
pub enum IsotopeError {
    #[error("Only isotope correction data available for CA and CB, not for {0}")]
    UnsupportedAtom(String),

    #[error("No isotope correction data for residue type {0}")]
    UnknownResidue(String),

    #[error("Residue type {residue} has no isotope correction offset for {atom}")]
    MissingOffset { residue: String, atom: String },

    #[error("Invalid isotope correction table: {0}")]
    InvalidTable(String),

    #[error("Unsupported isotope correction table version {0}")]
    UnsupportedVersion(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

pub type IsotopeResult<T> = std::result::Result<T, IsotopeError>;
