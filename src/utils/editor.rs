//! Editor utilities for editing environment configurations.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;
use uuid::Uuid;

use crate::error::{AwsenvError, Result};

/// Something that lets the operator change a file in place.
pub trait Editor {
    /// Block until editing of `path` is finished.
    fn edit(&self, path: &Path) -> Result<()>;
}

/// Runs an editor command line (e.g. `code --wait`) with the file appended.
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Editor for ExternalEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        let mut argv = shell_words::split(&self.command)
            .map_err(|e| AwsenvError::editor(format!("invalid editor '{}': {}", self.command, e)))?;
        if argv.is_empty() {
            return Err(AwsenvError::editor("editor command is empty"));
        }
        let program = argv.remove(0);

        // The exit status is not inspected; the file contents decide.
        let status = Command::new(&program)
            .args(&argv)
            .arg(path)
            .status()
            .map_err(|e| AwsenvError::editor(format!("failed to launch '{}': {}", program, e)))?;
        debug!(%status, editor = %program, "editor exited");

        Ok(())
    }
}

/// Owner-only temp file that is removed when dropped.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Create a uniquely named `.json` file in the temp dir holding `contents`.
    pub fn create(contents: &str) -> Result<Self> {
        let path = std::env::temp_dir().join(format!("awsenv_{}.json", Uuid::new_v4()));
        let scratch = Self { path };
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        options.open(&scratch.path)?.write_all(contents.as_bytes())?;
        Ok(scratch)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
