//! Window activation, pointer dispatch, and screen capture around the
//! decode core.
//!
//! Every operation builds a small command that dot-sources the
//! configured helper script and calls one of its functions, then checks
//! a sentinel token on stdout. The helper script is the external
//! recognition tool's entry point; its path is runtime configuration,
//! supplied by the caller.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::runner::{CommandOutput, CommandRunner};
use crate::decode::{from_ocr_json_str, OcrMatch};
use crate::error::OcrMatchError;

const ACTIVATE_SENTINEL: &str = "SUCCESS";
const CLICK_SENTINEL: &str = "CLICK_SUCCESS";

/// Runtime configuration for a workflow session.
#[derive(Clone, Debug)]
pub struct WorkflowConfig {
    /// Path to the helper script exposing the window, pointer, and
    /// recognition functions.
    pub script_path: PathBuf,

    /// Wait applied after a window activation so the desktop settles
    /// before a capture or click.
    pub settle: Duration,
}

impl WorkflowConfig {
    /// Configuration with the default two-second settle wait.
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
            settle: Duration::from_secs(2),
        }
    }

    /// Overrides the post-activation settle wait.
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }
}

/// Drives the external recognition tool and consumes its output through
/// the decoder.
///
/// All operations are synchronous and blocking. The runner is injected
/// so tests can script every command's output deterministically.
pub struct OcrWorkflow<R> {
    config: WorkflowConfig,
    runner: R,
}

impl<R: CommandRunner> OcrWorkflow<R> {
    pub fn new(config: WorkflowConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Brings the first window whose title contains `title` to the
    /// foreground, then waits for the configured settle time.
    pub fn activate_window(&self, title: &str) -> Result<(), OcrMatchError> {
        let command = format!(
            ". {script}\n\
             $windows = Find-WindowByTitle -Title '{title}'\n\
             if ($windows.Count -eq 0) {{ throw 'no window with title: {title}' }}\n\
             [Win32]::SetForegroundWindow($windows[0])\n\
             Start-Sleep -Milliseconds 500\n\
             Write-Output '{sentinel}'",
            script = self.script_arg(),
            title = single_quoted(title),
            sentinel = ACTIVATE_SENTINEL,
        );

        let output = self.run_checked(&command)?;
        if !output.stdout.contains(ACTIVATE_SENTINEL) {
            return Err(OcrMatchError::WindowActivation {
                title: title.to_string(),
            });
        }

        thread::sleep(self.config.settle);
        Ok(())
    }

    /// Dispatches a pointer click at absolute screen coordinates.
    pub fn click_at(&self, x: i32, y: i32) -> Result<(), OcrMatchError> {
        let command = format!(
            ". {script}\n\
             Click-Coordinates -X {x} -Y {y}\n\
             Write-Output '{sentinel}'",
            script = self.script_arg(),
            sentinel = CLICK_SENTINEL,
        );

        let output = self.run_checked(&command)?;
        if !output.stdout.contains(CLICK_SENTINEL) {
            return Err(OcrMatchError::ClickDispatch { x, y });
        }
        Ok(())
    }

    /// Clicks the centroid of a decoded match.
    pub fn click_match(&self, m: &OcrMatch) -> Result<(), OcrMatchError> {
        self.click_at(m.center_x, m.center_y)
    }

    /// Runs a screen recognition pass and decodes its output into match
    /// records.
    pub fn capture_matches(&self) -> Result<Vec<OcrMatch>, OcrMatchError> {
        let command = format!(
            ". {script}\n\
             Invoke-ScreenRecognition | ConvertTo-Json -Depth 4",
            script = self.script_arg(),
        );

        let output = self.run_checked(&command)?;
        from_ocr_json_str(&output.stdout)
    }

    /// Captures the screen and keeps the matches whose text contains
    /// `term`, ignoring ASCII case. Capture order is preserved.
    pub fn find_text(&self, term: &str) -> Result<Vec<OcrMatch>, OcrMatchError> {
        let matches = self.capture_matches()?;
        let found: Vec<OcrMatch> = matches
            .into_iter()
            .filter(|m| m.text_contains(term))
            .collect();
        debug!(term, count = found.len(), "screen search finished");
        Ok(found)
    }

    fn run_checked(&self, command: &str) -> Result<CommandOutput, OcrMatchError> {
        let output = self.runner.run(command)?;
        if !output.success() {
            return Err(OcrMatchError::CommandFailed {
                status: output.status,
                stderr: output.stderr,
            });
        }
        if !output.stderr.trim().is_empty() {
            warn!(stderr = %output.stderr.trim(), "command succeeded but wrote to stderr");
        }
        Ok(output)
    }

    fn script_arg(&self) -> String {
        format!("'{}'", single_quoted(&self.config.script_path.display().to_string()))
    }
}

/// Escapes text for a PowerShell single-quoted literal: quotes double.
fn single_quoted(raw: &str) -> String {
    raw.replace('\'', "''")
}
