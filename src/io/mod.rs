// src/io/mod.rs
pub mod magmom;
pub mod vector_file;
pub mod vesta;

use crate::error::{Error, Result};
use crate::model::{MomentArray, SpinAxis};
use std::path::PathBuf;

/// Where the arrows come from.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorSource {
    Magmom {
        text: String,
        natoms: usize,
        axis: SpinAxis,
    },
    File(PathBuf),
}

impl VectorSource {
    /// Picks exactly one source; both or neither is a configuration error.
    pub fn select(
        magmom: Option<String>,
        vector_file: Option<PathBuf>,
        natoms: Option<usize>,
        axis: SpinAxis,
    ) -> Result<Self> {
        match (magmom, vector_file) {
            (Some(_), Some(_)) => Err(Error::config(
                "vector source conflict: --magmom and --vector_file cannot both be specified, pick one",
            )),
            (None, None) => Err(Error::config(
                "no vectors to add: specify either a MAGMOM string (--magmom) or a vector file (--vector_file)",
            )),
            (Some(text), None) => {
                let natoms = natoms.ok_or_else(|| {
                    Error::config("--natoms is required to decode a MAGMOM string")
                })?;
                Ok(VectorSource::Magmom { text, natoms, axis })
            }
            (None, Some(path)) => Ok(VectorSource::File(path)),
        }
    }

    /// Sets the axis collinear MAGMOM values are placed on; a file source is unchanged.
    pub fn with_axis(self, axis: SpinAxis) -> Self {
        match self {
            VectorSource::Magmom { text, natoms, .. } => VectorSource::Magmom { text, natoms, axis },
            other => other,
        }
    }

    pub fn load(&self) -> Result<MomentArray> {
        match self {
            VectorSource::Magmom { text, natoms, axis } => {
                log::info!("Decoding MAGMOM string for {} atoms", natoms);
                magmom::parse_magmom(text, *natoms, *axis)
            }
            VectorSource::File(path) => {
                log::info!("Reading vectors from {}", path.display());
                vector_file::load(path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_sources_rejected() {
        let err = VectorSource::select(
            Some("2*1".into()),
            Some(PathBuf::from("vec_file")),
            Some(2),
            SpinAxis::Z,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("conflict")));
    }

    #[test]
    fn test_no_source_rejected() {
        let err = VectorSource::select(None, None, Some(2), SpinAxis::Z).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_magmom_requires_natoms() {
        let err = VectorSource::select(Some("2*1".into()), None, None, SpinAxis::Z).unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("--natoms")));
    }

    #[test]
    fn test_magmom_source_loads() {
        let source =
            VectorSource::select(Some("1 -1".into()), None, Some(2), SpinAxis::Y).unwrap();
        let m = source.load().unwrap();
        assert_eq!(m.rows(), &[[0.0, 1.0, 0.0], [0.0, -1.0, 0.0]]);
    }

    #[test]
    fn test_with_axis_moves_collinear_moments() {
        let source = VectorSource::select(Some("2".into()), None, Some(1), SpinAxis::Z)
            .unwrap()
            .with_axis(SpinAxis::X);
        assert_eq!(source.load().unwrap().rows(), &[[2.0, 0.0, 0.0]]);

        let file = VectorSource::File(PathBuf::from("vec_file"));
        assert_eq!(file.clone().with_axis(SpinAxis::X), file);
    }

    #[test]
    fn test_file_source_needs_no_natoms() {
        let source =
            VectorSource::select(None, Some(PathBuf::from("vec_file")), None, SpinAxis::Z)
                .unwrap();
        assert_eq!(source, VectorSource::File(PathBuf::from("vec_file")));
    }
}
