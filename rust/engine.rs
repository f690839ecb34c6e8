//! Text engines that turn a PDF into one string per page.
//!
//! The builtin engine runs [`pdf_extract`] in-process. The `pdftotext` engine
//! shells out to poppler and splits its output on form feeds.

use std::{
    panic::{self, AssertUnwindSafe},
    path::{Path, PathBuf},
    process::Command,
};

use clap::ValueEnum;
use gag::Gag;
use tracing::debug;

use crate::error::{ExtractError, Result};

pub const PDFTOTEXT_PROGRAM: &str = "pdftotext";
const PDFTOTEXT_HINT: &str = "install poppler-utils (or pass --pdftotext <PATH>) and retry";
const PAGE_BREAK: char = '\x0c';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EngineKind {
    #[default]
    Builtin,
    Pdftotext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Engine {
    Builtin,
    Pdftotext { program: PathBuf },
}

impl Engine {
    pub fn new(kind: EngineKind, pdftotext: impl Into<PathBuf>) -> Self {
        match kind {
            EngineKind::Builtin => Engine::Builtin,
            EngineKind::Pdftotext => Engine::Pdftotext {
                program: pdftotext.into(),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Engine::Builtin => "pdf-extract",
            Engine::Pdftotext { .. } => PDFTOTEXT_PROGRAM,
        }
    }

    /// Startup capability check. Must pass before any input is touched.
    pub fn ensure_available(&self) -> Result<()> {
        match self {
            Engine::Builtin => Ok(()),
            Engine::Pdftotext { program } => {
                let probe = Command::new(program).arg("-v").output();
                match probe {
                    Ok(output) => {
                        debug!(
                            program = %program.display(),
                            status = %output.status,
                            "pdftotext probe succeeded"
                        );
                        Ok(())
                    }
                    Err(e) => {
                        debug!(program = %program.display(), error = %e, "pdftotext probe failed");
                        Err(ExtractError::MissingDependency {
                            tool: PDFTOTEXT_PROGRAM,
                            hint: PDFTOTEXT_HINT,
                        })
                    }
                }
            }
        }
    }

    /// Extract the text of every page, in file order.
    ///
    /// `bytes` is the content already read from `path`; the subprocess engine
    /// reads the file itself and only uses `path`.
    pub fn load_pages(&self, path: &Path, bytes: &[u8]) -> Result<Vec<String>> {
        match self {
            Engine::Builtin => extract_with_pdf_extract_quiet(path, bytes),
            Engine::Pdftotext { program } => extract_with_pdftotext(program, path),
        }
    }
}

fn extract_with_pdf_extract_quiet(path: &Path, bytes: &[u8]) -> Result<Vec<String>> {
    // Suppress noisy stdout/stderr from the pdf-extract parser.
    let _gag_out = Gag::stdout().ok();
    let _gag_err = Gag::stderr().ok();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));
    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractError::parse(path, e.to_string())),
        Err(_) => Err(ExtractError::parse(
            path,
            "pdf-extract panicked (malformed document)",
        )),
    }
}

fn extract_with_pdftotext(program: &Path, path: &Path) -> Result<Vec<String>> {
    let output = Command::new(program)
        .arg("-layout")
        .arg("-enc")
        .arg("UTF-8")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| ExtractError::parse(path, format!("failed to spawn pdftotext: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExtractError::parse(
            path,
            format!("pdftotext exited with status {}: {}", output.status, stderr.trim()),
        ));
    }

    let text = String::from_utf8(output.stdout)
        .map_err(|_| ExtractError::parse(path, "pdftotext output was not valid UTF-8"))?;
    Ok(split_pdftotext_pages(&text))
}

/// pdftotext terminates every page, including the last, with a form feed.
fn split_pdftotext_pages(text: &str) -> Vec<String> {
    let mut pages: Vec<String> = text.split(PAGE_BREAK).map(str::to_string).collect();
    if pages.last().is_some_and(|last| last.is_empty()) {
        pages.pop();
    }
    pages
}
