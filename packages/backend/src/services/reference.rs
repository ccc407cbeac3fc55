use std::path::{Path, PathBuf};

use pathwise_algo::{ConceptHierarchy, ResourceCatalog};
use serde::{Deserialize, Serialize};

use crate::seed;

#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("failed to read reference data {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid reference data {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("reference data {} defines no subjects", .path.display())]
    Empty { path: PathBuf },
}

/// Static concept hierarchy and resource catalog, read-only after startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub hierarchy: ConceptHierarchy,
    #[serde(default)]
    pub resources: ResourceCatalog,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self {
            hierarchy: seed::builtin_hierarchy(),
            resources: seed::builtin_catalog(),
        }
    }

    /// Load from a JSON file, or the built-in dataset when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ReferenceDataError> {
        let Some(path) = path else {
            tracing::info!("using built-in reference data");
            return Ok(Self::builtin());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ReferenceDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data: ReferenceData =
            serde_json::from_str(&raw).map_err(|source| ReferenceDataError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if data.hierarchy.is_empty() {
            return Err(ReferenceDataError::Empty {
                path: path.to_path_buf(),
            });
        }

        tracing::info!(
            path = %path.display(),
            subjects = data.hierarchy.subjects().count(),
            catalogued = data.resources.len(),
            "loaded reference data"
        );
        Ok(data)
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        !self.hierarchy.levels(subject).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_without_path_is_builtin() {
        let data = ReferenceData::load(None).unwrap();
        assert!(data.has_subject("Physics"));
        assert!(!data.has_subject("Alchemy"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "hierarchy": {{"Astronomy": [{{"name": "foundational", "concepts": ["Planets", "Stars"]}}]}},
                "resources": {{"Planets": {{"visual": ["Orbit Diagrams"]}}}}
            }}"#
        )
        .unwrap();

        let data = ReferenceData::load(Some(file.path())).unwrap();
        assert!(data.has_subject("Astronomy"));
        assert!(!data.has_subject("Physics"));
        assert_eq!(data.resources.all_resources("Planets"), vec!["Orbit Diagrams"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ReferenceData::load(Some(Path::new("/nonexistent/reference.json"))).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Io { .. }));
    }

    #[test]
    fn test_load_empty_hierarchy() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"hierarchy": {{}}}}"#).unwrap();
        let err = ReferenceData::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ReferenceDataError::Empty { .. }));
    }
}
