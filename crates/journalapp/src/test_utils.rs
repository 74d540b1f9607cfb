use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway working directory with the default document names.
pub struct TestEnv {
    // Keeps the directory alive for the duration of the test.
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn journal_path(&self) -> PathBuf {
        self.root.join("journal.yaml")
    }

    pub fn demo_path(&self) -> PathBuf {
        self.root.join("dummy_journal.yaml")
    }

    pub fn with_journal(self, content: &str) -> Self {
        fs::write(self.journal_path(), content).expect("failed to write journal");
        self
    }

    pub fn with_demo(self, content: &str) -> Self {
        fs::write(self.demo_path(), content).expect("failed to write demo journal");
        self
    }
}
