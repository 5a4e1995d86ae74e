use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{ProjectError, ProjectResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectFileType {
    Json,
    Yaml,
}

pub struct FileInfo {
    pub file_type: ProjectFileType,
    pub is_gzipped: bool,
}

impl ProjectFileType {
    fn from_extension(ext: Option<&str>) -> ProjectResult<Self> {
        match ext.map(|e| e.to_lowercase()).as_deref() {
            Some("json") => Ok(ProjectFileType::Json),
            Some("yaml") | Some("yml") => Ok(ProjectFileType::Yaml),
            _ => Err(ProjectError::InvalidFileType),
        }
    }
}

///
/// Determine the format of a project file from its extension. A trailing
/// `.gz` is looked through.
///
/// # Arguments
/// * `path` - path of the project file
///
pub fn get_file_info(path: &Path) -> ProjectResult<FileInfo> {
    match path.extension().and_then(OsStr::to_str) {
        Some("gz") => {
            let file_stem = path.file_stem().ok_or(ProjectError::InvalidFileType)?;
            let ext = Path::new(file_stem).extension().and_then(OsStr::to_str);
            Ok(FileInfo {
                file_type: ProjectFileType::from_extension(ext)?,
                is_gzipped: true,
            })
        }
        ext => Ok(FileInfo {
            file_type: ProjectFileType::from_extension(ext)?,
            is_gzipped: false,
        }),
    }
}

///
/// Get a reader for either a gzip'd or a plain file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> ProjectResult<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}
