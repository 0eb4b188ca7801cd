//! Flat-file persistence for generated artifacts

use std::path::{Path, PathBuf};

use crate::pipeline::{render_artifact, ArtifactKind, ArtifactResult, GeneratedArtifact};
use crate::Result;

/// Writes `summary.txt` and `email_draft.txt` into one directory.
///
/// Every save overwrites the previous file; there is no versioning or locking.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an artifact of `kind` is saved to
    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Save a generated artifact and return the file path.
    pub fn save(&self, artifact: &GeneratedArtifact) -> Result<PathBuf> {
        self.write(artifact.kind, &artifact.text)
    }

    /// Save a result, writing the error line for failures.
    pub fn save_rendered(&self, kind: ArtifactKind, result: &ArtifactResult) -> Result<PathBuf> {
        self.write(kind, &render_artifact(result))
    }

    fn write(&self, kind: ArtifactKind, contents: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(kind);
        std::fs::write(&path, contents)?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), contents.len());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::GenerationError;
    use tempfile::tempdir;

    #[test]
    fn saves_each_kind_to_its_own_file() {
        let tmp = tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path());

        let summary_path = store
            .save(&GeneratedArtifact::new(ArtifactKind::Summary, "The summary"))
            .unwrap();
        let email_path = store
            .save(&GeneratedArtifact::new(ArtifactKind::Email, "The email"))
            .unwrap();

        assert_eq!(summary_path, tmp.path().join("summary.txt"));
        assert_eq!(email_path, tmp.path().join("email_draft.txt"));
        assert_eq!(std::fs::read_to_string(summary_path).unwrap(), "The summary");
        assert_eq!(std::fs::read_to_string(email_path).unwrap(), "The email");
    }

    #[test]
    fn overwrites_previous_run() {
        let tmp = tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path());

        store
            .save(&GeneratedArtifact::new(ArtifactKind::Summary, "first run, longer text"))
            .unwrap();
        let path = store
            .save(&GeneratedArtifact::new(ArtifactKind::Summary, "second"))
            .unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn creates_missing_directory() {
        let tmp = tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path().join("out").join("nested"));

        let path = store
            .save(&GeneratedArtifact::new(ArtifactKind::Email, "hi"))
            .unwrap();

        assert!(path.exists());
        assert_eq!(store.dir(), tmp.path().join("out").join("nested"));
    }

    #[test]
    fn rendered_failure_writes_error_line() {
        let tmp = tempdir().unwrap();
        let store = ArtifactStore::new(tmp.path());
        let failed: ArtifactResult = Err(GenerationError::new(ArtifactKind::Email, "boom"));

        let path = store.save_rendered(ArtifactKind::Email, &failed).unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "Error generating email: boom"
        );
    }
}
