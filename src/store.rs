use anyhow::{ensure, Context as _, Result};

use std::ffi::OsString;
use std::io::Write as _;
use std::process::{Command, Stdio};

/// Handle to the external password store. Every entry is created with the
/// store's multiline insert (`pass insert -m <name>`), the entry body piped
/// on stdin in full so the store never re-prompts.
pub struct PassStore {
    program: OsString,
}

impl Default for PassStore {
    fn default() -> Self {
        Self::new("pass")
    }
}

impl PassStore {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn insert(&self, name: &str, content: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(["insert", "-m", name])
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to run {:?}", self.program))?;
        child
            .stdin
            .take()
            .context("stdin of the store process is not piped")?
            .write_all(content.as_bytes())
            .context("failed to write entry content")?;
        let status = child.wait()?;
        ensure!(status.success(), "insert command exited with {}", status);
        Ok(())
    }
}
