//! Helpers for integration tests.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Temporary product export used in integration tests.
///
/// The file is removed when the fixture is dropped.
pub struct TestCsv {
    file: NamedTempFile,
}

impl TestCsv {
    /// Writes `rows` of `(id, cluster, title)` below the pandas-style header.
    pub fn new(rows: &[(i64, i64, &str)]) -> Self {
        let mut contents = String::from(",title,description,cluster\n");
        for (id, cluster, title) in rows {
            contents.push_str(&format!("{id},{title},About {title},{cluster}\n"));
        }
        Self::from_contents(&contents)
    }

    pub fn from_contents(contents: &str) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temporary CSV.");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temporary CSV.");
        TestCsv { file }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
