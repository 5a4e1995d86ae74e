use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error(
        "Missing or invalid file extension for project file. It must be `json`, `yaml`, `yml` or any of those followed by `.gz`"
    )]
    InvalidFileType,

    #[error("Duplicate spin system serial in project: {0}")]
    DuplicateSpinSystem(u32),

    #[error("Duplicate resonance serial in project: {0}")]
    DuplicateResonance(u32),

    #[error("Duplicate shift list serial in project: {0}")]
    DuplicateShiftList(u32),

    #[error("Resonance {resonance} refers to unknown shift list {shift_list}")]
    UnknownShiftList { resonance: u32, shift_list: u32 },

    #[error("Spin system not found in project: {0}")]
    SpinSystemNotFound(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type ProjectResult<T> = std::result::Result<T, ProjectError>;
