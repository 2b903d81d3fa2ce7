//! Tesseract OCR adapter
//!
//! Pipes the decoded image into `tesseract stdin stdout` and reads the text
//! back. The process is killed if it outlives the configured timeout.

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::core::error::PipelineError;
use crate::core::models::DocumentImage;
use crate::core::ports::OcrEngine;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// OCR engine backed by the `tesseract` binary
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    binary: PathBuf,
    language: String,
    timeout: Duration,
}

impl TesseractOcr {
    /// Create an adapter for the given binary and language pack
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>, language: &str, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            language: language.to_string(),
            timeout,
        }
    }

    fn spawn(&self) -> Result<Child, PipelineError> {
        Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", &self.language])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                PipelineError::OcrFailure(format!("failed to start {}: {e}", self.binary.display()))
            })
    }

    /// Wait for the child, killing it once the deadline passes
    fn wait_with_deadline(&self, child: &mut Child) -> Result<std::process::ExitStatus, PipelineError> {
        let started = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if started.elapsed() >= self.timeout => {
                    warn!("tesseract exceeded {:?}, killing it", self.timeout);
                    let _ = child.kill();
                    let _ = child.wait();
                    let message = format!("timed out after {:?}", self.timeout);
                    return Err(PipelineError::OcrFailure(message));
                },
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => return Err(PipelineError::OcrFailure(format!("wait failed: {e}"))),
            }
        }
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize(&self, image: &DocumentImage) -> Result<String, PipelineError> {
        let bytes = image.to_bytes()?;
        debug!("Running tesseract on {} bytes ({})", bytes.len(), image.kind());

        let mut child = self.spawn()?;

        // Feed and drain on separate threads so neither pipe can fill up and stall the child
        let stdin = child.stdin.take();
        let writer = thread::spawn(move || {
            if let Some(mut stdin) = stdin {
                stdin.write_all(&bytes)?;
            }
            Ok::<(), std::io::Error>(())
        });
        let stdout = child.stdout.take();
        let reader = thread::spawn(move || read_all(stdout));
        let stderr = child.stderr.take();
        let err_reader = thread::spawn(move || read_all(stderr));

        let status = self.wait_with_deadline(&mut child)?;

        let write_result = writer.join().map_err(|_| pipe_panicked())?;
        let text = reader.join().map_err(|_| pipe_panicked())?;
        let diagnostics = err_reader.join().map_err(|_| pipe_panicked())?;

        if !status.success() {
            return Err(PipelineError::OcrFailure(format!(
                "tesseract exited with {status}: {}",
                String::from_utf8_lossy(&diagnostics).trim()
            )));
        }
        if let Err(e) = write_result {
            // tesseract may stop reading early on a truncated image yet still exit cleanly
            debug!("tesseract closed stdin early: {e}");
        }

        Ok(String::from_utf8_lossy(&text).into_owned())
    }
}

fn read_all<R: Read>(pipe: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf);
    }
    buf
}

fn pipe_panicked() -> PipelineError {
    PipelineError::OcrFailure("tesseract pipe thread panicked".to_string())
}
