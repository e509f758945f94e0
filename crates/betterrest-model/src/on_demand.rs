//! Lazily loaded sleep model
//!
//! The artifact is read on the first inference rather than at startup, so a
//! missing or broken file surfaces as an ordinary inference failure and the
//! caller stays usable. A failed load is not cached: the next inference tries
//! again.

use crate::linear::LinearSleepModel;
use crate::ModelError;
use betterrest_domain::{SleepFeatures, SleepModel, SleepPrediction};
use std::cell::RefCell;
use std::path::PathBuf;
use tracing::{info, warn};

/// Where a model artifact comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// The artifact compiled into the binary
    Bundled,

    /// A JSON artifact on disk
    File(PathBuf),
}

impl ModelSource {
    /// Bundled unless a path is given
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(ModelSource::File).unwrap_or(ModelSource::Bundled)
    }

    /// Load the model this source points to
    pub fn load(&self) -> Result<LinearSleepModel, ModelError> {
        match self {
            ModelSource::Bundled => LinearSleepModel::bundled(),
            ModelSource::File(path) => LinearSleepModel::from_path(path),
        }
    }

    /// Short human-readable description
    pub fn describe(&self) -> String {
        match self {
            ModelSource::Bundled => "bundled".to_string(),
            ModelSource::File(path) => path.display().to_string(),
        }
    }
}

/// Model that loads its artifact on first use
#[derive(Debug)]
pub struct OnDemandModel {
    source: ModelSource,
    loaded: RefCell<Option<LinearSleepModel>>,
}

impl OnDemandModel {
    /// Create a model for the given source without loading it
    pub fn new(source: ModelSource) -> Self {
        Self {
            source,
            loaded: RefCell::new(None),
        }
    }

    /// Whether the artifact has been loaded successfully
    pub fn is_loaded(&self) -> bool {
        self.loaded.borrow().is_some()
    }

    /// Load now if not yet loaded, returning a copy of the loaded model
    pub fn ensure_loaded(&self) -> Result<LinearSleepModel, ModelError> {
        if let Some(model) = self.loaded.borrow().as_ref() {
            return Ok(model.clone());
        }

        match self.source.load() {
            Ok(model) => {
                info!(
                    "Loaded sleep model {} v{} from {}",
                    model.artifact().name,
                    model.artifact().version,
                    self.source.describe()
                );
                *self.loaded.borrow_mut() = Some(model.clone());
                Ok(model)
            }
            Err(e) => {
                warn!("Failed to load sleep model from {}: {}", self.source.describe(), e);
                Err(e)
            }
        }
    }
}

impl SleepModel for OnDemandModel {
    type Error = ModelError;

    fn infer(&self, features: &SleepFeatures) -> Result<SleepPrediction, Self::Error> {
        if !self.is_loaded() {
            self.ensure_loaded()?;
        }

        match self.loaded.borrow().as_ref() {
            Some(model) => model.infer(features),
            None => Err(ModelError::Load(self.source.describe())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn features() -> SleepFeatures {
        SleepFeatures {
            wake: 25_200.0,
            estimated_sleep: 8.0,
            coffee: 1.0,
        }
    }

    #[test]
    fn test_bundled_loads_lazily() {
        let model = OnDemandModel::new(ModelSource::Bundled);
        assert!(!model.is_loaded());

        model.infer(&features()).unwrap();
        assert!(model.is_loaded());
    }

    #[test]
    fn test_missing_file_fails_each_time() {
        let model = OnDemandModel::new(ModelSource::File("/nonexistent/sleep.json".into()));

        assert!(matches!(model.infer(&features()), Err(ModelError::Load(_))));
        assert!(!model.is_loaded());
        assert!(model.infer(&features()).is_err());
    }

    #[test]
    fn test_recovers_once_file_appears() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sleep.json");
        let model = OnDemandModel::new(ModelSource::File(path.clone()));

        assert!(model.infer(&features()).is_err());

        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(crate::artifact::BUNDLED_ARTIFACT.as_bytes()).unwrap();

        assert!(model.infer(&features()).is_ok());
        assert!(model.is_loaded());
    }

    #[test]
    fn test_source_from_path() {
        assert_eq!(ModelSource::from_path(None), ModelSource::Bundled);
        assert_eq!(
            ModelSource::from_path(Some("m.json".into())),
            ModelSource::File("m.json".into())
        );
        assert_eq!(ModelSource::Bundled.describe(), "bundled");
    }
}
