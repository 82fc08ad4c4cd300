//! Best-effort clipboard writes
//!
//! A copy first goes through the primary backend when it is available. If
//! that is missing or fails, the text is staged in a temporary file and handed
//! to a fallback backend that copies from the file. The staging file is removed
//! whether the fallback succeeds or not. Callers only ever see `true`/`false`.

use crate::error::{PlannerError, Result};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, error, warn};

/// Writes text straight to the clipboard
#[async_trait]
pub trait ClipboardBackend: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// Whether this backend can be used on the current machine
    fn is_available(&self) -> bool;

    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Copies the contents of a staged file to the clipboard
#[async_trait]
pub trait StagedCopyBackend: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    /// `Ok(false)` means the tool ran but reported that nothing was copied
    async fn copy_file(&self, path: &Path) -> Result<bool>;
}

/// Primary-then-fallback clipboard writer
#[derive(Debug)]
pub struct Clipboard {
    primary: Option<Box<dyn ClipboardBackend>>,
    fallback: Box<dyn StagedCopyBackend>,
}

impl Clipboard {
    pub fn new<P, F>(primary: P, fallback: F) -> Self
    where
        P: ClipboardBackend + 'static,
        F: StagedCopyBackend + 'static,
    {
        Self {
            primary: Some(Box::new(primary)),
            fallback: Box::new(fallback),
        }
    }

    /// Clipboard with no primary backend at all
    pub fn fallback_only<F: StagedCopyBackend + 'static>(fallback: F) -> Self {
        Self {
            primary: None,
            fallback: Box::new(fallback),
        }
    }

    /// Command-line clipboard tools: `wl-copy` or `pbcopy` first, `xclip` as
    /// the staged fallback.
    pub fn system() -> Self {
        let primary = [
            CommandClipboard::new("wl-copy", &[]),
            CommandClipboard::new("pbcopy", &[]),
        ]
        .into_iter()
        .find(|backend| backend.is_available());

        Self {
            primary: primary.map(|backend| Box::new(backend) as Box<dyn ClipboardBackend>),
            fallback: Box::new(CommandFileCopy::new(
                "xclip",
                &["-selection", "clipboard", "-i"],
            )),
        }
    }

    /// Copy `text`, returning whether it landed on the clipboard.
    pub async fn copy(&self, text: &str) -> bool {
        if let Some(primary) = &self.primary {
            if primary.is_available() {
                match primary.write_text(text).await {
                    Ok(()) => {
                        debug!(backend = primary.name(), "copied to clipboard");
                        return true;
                    }
                    Err(err) => {
                        error!(backend = primary.name(), "Failed to copy using primary backend: {}", err);
                    }
                }
            } else {
                debug!(backend = primary.name(), "primary clipboard backend unavailable");
            }
        }

        self.copy_via_fallback(text).await
    }

    async fn copy_via_fallback(&self, text: &str) -> bool {
        let staged = match stage_text(text) {
            Ok(staged) => staged,
            Err(err) => {
                error!("Fallback copy failed to stage text: {}", err);
                return false;
            }
        };

        let outcome = self.fallback.copy_file(staged.path()).await;

        if let Err(err) = staged.close() {
            warn!("Failed to remove clipboard staging file: {}", err);
        }

        match outcome {
            Ok(true) => {
                debug!(backend = self.fallback.name(), "copied to clipboard via fallback");
                true
            }
            Ok(false) => {
                error!(backend = self.fallback.name(), "Fallback copy reported failure");
                false
            }
            Err(err) => {
                error!(backend = self.fallback.name(), "Fallback copy failed: {}", err);
                false
            }
        }
    }
}

fn stage_text(text: &str) -> Result<NamedTempFile> {
    let mut staged = tempfile::Builder::new()
        .prefix("chinatrip-copy-")
        .suffix(".txt")
        .tempfile()?;
    staged.write_all(text.as_bytes())?;
    staged.flush()?;
    Ok(staged)
}

/// Pipes text into a clipboard command's stdin
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: &'static str,
    args: Vec<&'static str>,
}

impl CommandClipboard {
    pub fn new(program: &'static str, args: &[&'static str]) -> Self {
        Self {
            program,
            args: args.to_vec(),
        }
    }
}

#[async_trait]
impl ClipboardBackend for CommandClipboard {
    fn name(&self) -> &'static str {
        self.program
    }

    fn is_available(&self) -> bool {
        find_in_path(self.program).is_some()
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let mut child = Command::new(self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if status.success() {
            Ok(())
        } else {
            Err(PlannerError::Clipboard(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

/// Runs a clipboard command with the staged file path as its last argument
#[derive(Debug, Clone)]
pub struct CommandFileCopy {
    program: &'static str,
    args: Vec<&'static str>,
}

impl CommandFileCopy {
    pub fn new(program: &'static str, args: &[&'static str]) -> Self {
        Self {
            program,
            args: args.to_vec(),
        }
    }
}

#[async_trait]
impl StagedCopyBackend for CommandFileCopy {
    fn name(&self) -> &'static str {
        self.program
    }

    async fn copy_file(&self, path: &Path) -> Result<bool> {
        if find_in_path(self.program).is_none() {
            return Err(PlannerError::Clipboard(format!(
                "{} not found on PATH",
                self.program
            )));
        }

        let status = Command::new(self.program)
            .args(&self.args)
            .arg(path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        Ok(status.success())
    }
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}
