use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::ProblemRecord;

pub type Problems = IndexMap<String, ProblemRecord>;

/// The problems JSON file. Every save replaces the whole file.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<Problems> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::NotInitialized(self.path.clone()))
            }
            Err(e) => return Err(e.into()),
        };

        let problems: Problems = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %self.path.display(), count = problems.len(), "read problems file");
        Ok(problems)
    }

    // Write to a sibling temp file, then rename over the target
    pub fn save(&self, problems: &Problems) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut tmp, formatter);
        problems.serialize(&mut ser)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!(path = %self.path.display(), count = problems.len(), "wrote problems file");
        Ok(())
    }
}
