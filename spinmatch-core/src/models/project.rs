use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{ProjectError, ProjectResult};
use crate::models::{IsotopicCondition, ShiftList, ShiftListId, SpinSystem};
use crate::utils::{ProjectFileType, get_dynamic_reader, get_file_info};

///
/// NmrProject struct, a snapshot of the shift lists and spin systems of
/// one NMR project.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NmrProject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub shift_lists: Vec<ShiftList>,
    #[serde(default)]
    pub spin_systems: Vec<SpinSystem>,
}

impl TryFrom<&Path> for NmrProject {
    type Error = ProjectError;

    ///
    /// Load a project from a `json` or `yaml` file, optionally gzip'd.
    ///
    /// # Arguments:
    /// - value: path to the project file on disk.
    fn try_from(value: &Path) -> ProjectResult<Self> {
        let info = get_file_info(value)?;
        let reader = get_dynamic_reader(value)?;

        let project: NmrProject = match info.file_type {
            ProjectFileType::Json => serde_json::from_reader(reader)?,
            ProjectFileType::Yaml => serde_yaml::from_reader(reader)?,
        };
        project.validate()?;

        info!(
            "Loaded project {:?} with {} spin systems and {} shift lists",
            value,
            project.spin_systems.len(),
            project.shift_lists.len()
        );

        Ok(project)
    }
}

impl TryFrom<&str> for NmrProject {
    type Error = ProjectError;

    fn try_from(value: &str) -> ProjectResult<Self> {
        NmrProject::try_from(Path::new(value))
    }
}

impl NmrProject {
    ///
    /// Check that serials are unique and every shift refers to a declared
    /// shift list. Shift lists are only checked when the project declares any.
    ///
    pub fn validate(&self) -> ProjectResult<()> {
        let mut lists = HashSet::new();
        for list in &self.shift_lists {
            if !lists.insert(list.serial) {
                return Err(ProjectError::DuplicateShiftList(list.serial.0));
            }
        }

        let mut groups = HashSet::new();
        let mut resonances = HashSet::new();
        for spin_system in &self.spin_systems {
            if !groups.insert(spin_system.serial) {
                return Err(ProjectError::DuplicateSpinSystem(spin_system.serial));
            }
            for resonance in &spin_system.resonances {
                if !resonances.insert(resonance.serial) {
                    return Err(ProjectError::DuplicateResonance(resonance.serial));
                }
                if lists.is_empty() {
                    continue;
                }
                if let Some(shift) = resonance
                    .shifts
                    .iter()
                    .find(|s| !lists.contains(&s.shift_list))
                {
                    return Err(ProjectError::UnknownShiftList {
                        resonance: resonance.serial,
                        shift_list: shift.shift_list.0,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn get(&self, serial: u32) -> ProjectResult<&SpinSystem> {
        self.spin_systems
            .iter()
            .find(|s| s.serial == serial)
            .ok_or(ProjectError::SpinSystemNotFound(serial))
    }

    pub fn iter_spin_systems(&self) -> impl Iterator<Item = &SpinSystem> {
        self.spin_systems.iter()
    }

    ///
    /// The first shift list declared as measured under the given condition.
    ///
    pub fn shift_list_for(&self, condition: IsotopicCondition) -> Option<ShiftListId> {
        self.shift_lists
            .iter()
            .find(|list| list.condition == Some(condition))
            .map(|list| list.serial)
    }

    ///
    /// Write the project as pretty printed json.
    ///
    pub fn to_json(&self, path: &Path) -> ProjectResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resonance;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/projects")
            .join(file_name)
    }

    #[fixture]
    fn project() -> NmrProject {
        NmrProject {
            name: Some("test".to_string()),
            shift_lists: vec![
                ShiftList {
                    serial: ShiftListId(1),
                    name: Some("HN-CA protonated".to_string()),
                    condition: Some(IsotopicCondition::Protonated),
                },
                ShiftList {
                    serial: ShiftListId(2),
                    name: None,
                    condition: Some(IsotopicCondition::Deuterated),
                },
            ],
            spin_systems: vec![
                SpinSystem::new(1)
                    .with_resonance(Resonance::new(1, Some("CA")).with_shift(ShiftListId(1), 52.0)),
                SpinSystem::new(2)
                    .with_resonance(Resonance::new(2, Some("CA")).with_shift(ShiftListId(2), 52.4)),
            ],
        }
    }

    #[rstest]
    fn test_load_json_project() {
        let project = NmrProject::try_from(get_test_path("small.json").as_path()).unwrap();
        assert_eq!(project.spin_systems.len(), 4);
        assert_eq!(project.shift_lists.len(), 2);
        assert_eq!(
            project.shift_list_for(IsotopicCondition::Deuterated),
            Some(ShiftListId(2))
        );
    }

    #[rstest]
    fn test_load_yaml_project() {
        let project = NmrProject::try_from(get_test_path("small.yaml").as_path()).unwrap();
        assert_eq!(project.spin_systems.len(), 2);
        let spin_system = project.get(20).unwrap();
        assert_eq!(spin_system.describe(), "Ala");
    }

    #[rstest]
    fn test_json_round_trip_through_disk(project: NmrProject) {
        let file = NamedTempFile::with_suffix(".json").unwrap();
        project.to_json(file.path()).unwrap();

        let loaded = NmrProject::try_from(file.path()).unwrap();
        assert_eq!(loaded, project);
    }

    #[rstest]
    fn test_get_missing_spin_system(project: NmrProject) {
        assert!(matches!(
            project.get(99),
            Err(ProjectError::SpinSystemNotFound(99))
        ));
    }

    #[rstest]
    fn test_validate_duplicate_spin_system(mut project: NmrProject) {
        project.spin_systems.push(SpinSystem::new(1));
        assert!(matches!(
            project.validate(),
            Err(ProjectError::DuplicateSpinSystem(1))
        ));
    }

    #[rstest]
    fn test_validate_duplicate_resonance(mut project: NmrProject) {
        project.spin_systems[1].resonances.push(Resonance::new(1, Some("CB")));
        assert!(matches!(
            project.validate(),
            Err(ProjectError::DuplicateResonance(1))
        ));
    }

    #[rstest]
    fn test_validate_unknown_shift_list(mut project: NmrProject) {
        project.spin_systems[0].resonances[0]
            .shifts
            .push(crate::models::Shift {
                shift_list: ShiftListId(9),
                value: 1.0,
            });
        assert!(matches!(
            project.validate(),
            Err(ProjectError::UnknownShiftList {
                resonance: 1,
                shift_list: 9
            })
        ));
    }

    #[rstest]
    fn test_invalid_extension() {
        let result = NmrProject::try_from(Path::new("project.csv"));
        assert!(matches!(result, Err(ProjectError::InvalidFileType)));
    }
}
