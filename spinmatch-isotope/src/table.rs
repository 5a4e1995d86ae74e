use std::collections::BTreeMap;
use std::fs::{read_to_string, write};
use std::path::Path;
use std::str::FromStr;

use fxhash::FxHashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use spinmatch_core::models::ResidueType;

use crate::atoms::CorrectableAtom;
use crate::consts::{TABLE_VERSION, TALOS_TABLE};
use crate::errors::{IsotopeError, IsotopeResult};

fn default_fallback() -> String {
    ResidueType::AVERAGE.to_string()
}

///
/// On-disk layout of a correction table, keyed by residue type and then
/// by atom type.
///
#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub struct TableConfig {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default = "default_fallback")]
    pub fallback: String,
    pub residues: BTreeMap<String, BTreeMap<String, f64>>,
}

///
/// Isotope shift offsets of one residue type. An offset is the shift in a
/// deuterated sample minus the shift in a protonated sample.
///
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResidueOffsets {
    pub ca: Option<f64>,
    pub cb: Option<f64>,
}

impl ResidueOffsets {
    pub fn new(ca: f64, cb: f64) -> Self {
        ResidueOffsets {
            ca: Some(ca),
            cb: Some(cb),
        }
    }

    pub fn get(&self, atom: CorrectableAtom) -> Option<f64> {
        match atom {
            CorrectableAtom::CA => self.ca,
            CorrectableAtom::CB => self.cb,
        }
    }

    fn set(&mut self, atom: CorrectableAtom, value: f64) {
        match atom {
            CorrectableAtom::CA => self.ca = Some(value),
            CorrectableAtom::CB => self.cb = Some(value),
        }
    }
}

///
/// Residue specific isotope shift offsets for CA and CB. Immutable once
/// built; pass it explicitly to whatever needs to correct shifts.
///
#[derive(Debug, Clone, PartialEq)]
pub struct IsotopeCorrectionTable {
    version: u32,
    source: Option<String>,
    fallback: ResidueType,
    offsets: FxHashMap<ResidueType, ResidueOffsets>,
}

impl IsotopeCorrectionTable {
    ///
    /// The built-in table with the TALOS+ offsets of Maltsev et al.
    ///
    pub fn talos() -> IsotopeResult<Self> {
        IsotopeCorrectionTable::from_str(TALOS_TABLE)
    }

    ///
    /// Build a table from explicit offsets.
    ///
    /// # Arguments
    /// * `source` - free text provenance of the values
    /// * `fallback` - residue type used when a residue is unknown, must be in `offsets`
    /// * `offsets` - per residue offsets
    ///
    pub fn from_offsets<I>(
        source: Option<String>,
        fallback: ResidueType,
        offsets: I,
    ) -> IsotopeResult<Self>
    where
        I: IntoIterator<Item = (ResidueType, ResidueOffsets)>,
    {
        let offsets: FxHashMap<ResidueType, ResidueOffsets> = offsets.into_iter().collect();

        if !offsets.contains_key(&fallback) {
            return Err(IsotopeError::InvalidTable(format!(
                "fallback residue type {} has no entry",
                fallback
            )));
        }

        for (residue, entry) in offsets.iter() {
            for atom in CorrectableAtom::ALL {
                if let Some(value) = entry.get(atom) {
                    if !value.is_finite() {
                        return Err(IsotopeError::InvalidTable(format!(
                            "offset of {} {} is not a finite number",
                            residue, atom
                        )));
                    }
                }
            }
        }

        Ok(IsotopeCorrectionTable {
            version: TABLE_VERSION,
            source,
            fallback,
            offsets,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    ///
    /// Residue type whose entry stands in for unknown residue types.
    ///
    pub fn fallback(&self) -> &ResidueType {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn contains(&self, residue: &ResidueType) -> bool {
        self.offsets.contains_key(residue)
    }

    pub fn offsets(&self, residue: &ResidueType) -> Option<&ResidueOffsets> {
        self.offsets.get(residue)
    }

    ///
    /// Offset for one residue and atom type. Never falls back: an unknown
    /// residue type is an error.
    ///
    pub fn offset(&self, residue: &ResidueType, atom: CorrectableAtom) -> IsotopeResult<f64> {
        let entry = self
            .offsets
            .get(residue)
            .ok_or_else(|| IsotopeError::UnknownResidue(residue.to_string()))?;

        entry.get(atom).ok_or_else(|| IsotopeError::MissingOffset {
            residue: residue.to_string(),
            atom: atom.to_string(),
        })
    }

    ///
    /// Pick the residue type to correct with: the given one when the table
    /// knows it, the fallback entry otherwise.
    ///
    pub fn residue_or_fallback<'a>(&'a self, residue: Option<&'a ResidueType>) -> &'a ResidueType {
        match residue {
            Some(residue) if self.contains(residue) => residue,
            Some(residue) => {
                debug!(
                    "No isotope correction data for residue type {}, using {}",
                    residue, self.fallback
                );
                &self.fallback
            }
            None => &self.fallback,
        }
    }

    ///
    /// Entries sorted by residue code.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (&ResidueType, &ResidueOffsets)> {
        let mut entries: Vec<_> = self.offsets.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn to_config(&self) -> TableConfig {
        let residues = self
            .offsets
            .iter()
            .map(|(residue, entry)| {
                let atoms = CorrectableAtom::ALL
                    .iter()
                    .filter_map(|atom| entry.get(*atom).map(|v| (atom.label().to_string(), v)))
                    .collect();
                (residue.code().to_string(), atoms)
            })
            .collect();

        TableConfig {
            version: self.version,
            source: self.source.clone(),
            fallback: self.fallback.code().to_string(),
            residues,
        }
    }

    pub fn to_toml(&self) -> IsotopeResult<String> {
        Ok(toml::to_string(&self.to_config())?)
    }

    pub fn save(&self, path: &Path) -> IsotopeResult<()> {
        write(path, self.to_toml()?)?;
        Ok(())
    }
}

impl TryFrom<TableConfig> for IsotopeCorrectionTable {
    type Error = IsotopeError;

    fn try_from(config: TableConfig) -> IsotopeResult<Self> {
        if config.version != TABLE_VERSION {
            return Err(IsotopeError::UnsupportedVersion(config.version));
        }

        let mut offsets = Vec::with_capacity(config.residues.len());
        for (residue, atoms) in config.residues {
            let mut entry = ResidueOffsets::default();
            for (atom, value) in atoms {
                let atom = CorrectableAtom::from_str(&atom).map_err(|_| {
                    IsotopeError::InvalidTable(format!(
                        "atom type {} of residue {} is not correctable",
                        atom, residue
                    ))
                })?;
                entry.set(atom, value);
            }
            let residue = ResidueType::new(residue);
            if offsets.iter().any(|(known, _)| known == &residue) {
                return Err(IsotopeError::InvalidTable(format!(
                    "residue type {} is listed more than once",
                    residue
                )));
            }
            offsets.push((residue, entry));
        }

        let fallback = ResidueType::new(config.fallback);
        IsotopeCorrectionTable::from_offsets(config.source, fallback, offsets)
    }
}

impl FromStr for IsotopeCorrectionTable {
    type Err = IsotopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: TableConfig = toml::from_str(s)?;
        IsotopeCorrectionTable::try_from(config)
    }
}

impl TryFrom<&Path> for IsotopeCorrectionTable {
    type Error = IsotopeError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let table = IsotopeCorrectionTable::from_str(&toml_str)?;
        info!(
            "Loaded isotope correction table {:?} with {} residue types",
            path,
            table.len()
        );
        Ok(table)
    }
}
