//! Page-by-page extraction: report each page on the console, accumulate the
//! text, and save it next to the input.

use std::{
    fs::{self, File},
    io::{self, Read, Write},
    iter::Enumerate,
    path::{Path, PathBuf},
    vec,
};

use tracing::{debug, info, warn};

use crate::{
    config::ExtractConfig,
    error::{ExtractError, Result},
};

const RULE_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub text: String,
}

/// Pages in file order, numbered from 1. Consumes the engine output, so it
/// can be walked only once.
#[derive(Debug)]
pub struct Pages {
    inner: Enumerate<vec::IntoIter<String>>,
}

impl Pages {
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            inner: texts.into_iter().enumerate(),
        }
    }
}

impl Iterator for Pages {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        self.inner.next().map(|(index, text)| Page {
            number: index + 1,
            text,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Pages {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pages: Vec<Page>,
    text: String,
    output_path: PathBuf,
}

impl ExtractionResult {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every page's text in page order, with nothing inserted between pages.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Run an extraction, reporting to stdout.
pub fn extract(config: &ExtractConfig) -> Result<ExtractionResult> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    extract_to(config, &mut out)
}

/// Run an extraction, reporting to `out`.
///
/// Nothing is written to `out` or to disk until every page has been
/// extracted, so a failed run leaves no partial report or output file.
pub fn extract_to<W: Write>(config: &ExtractConfig, out: &mut W) -> Result<ExtractionResult> {
    let path = config.pdf_path.as_path();
    config.engine.ensure_available()?;

    let bytes = read_input(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");

    let texts = config.engine.load_pages(path, &bytes)?;
    drop(bytes);
    info!(
        path = %path.display(),
        engine = config.engine.name(),
        page_count = texts.len(),
        "extracted pages"
    );

    let output_path = output_path_for(path);
    let console = ExtractError::Console;

    writeln!(out, "Extracting text from: {}", path.display()).map_err(console)?;
    writeln!(out, "Total pages: {}\n", texts.len()).map_err(console)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH)).map_err(console)?;

    let mut text = String::new();
    let mut pages = Vec::with_capacity(texts.len());
    for page in Pages::new(texts) {
        writeln!(out, "\n--- PAGE {} ---\n", page.number).map_err(console)?;
        writeln!(out, "{}", page.text).map_err(console)?;
        text.push_str(&page.text);
        writeln!(out, "\n{}", "-".repeat(RULE_WIDTH)).map_err(console)?;
        pages.push(page);
    }

    if output_path == path {
        warn!(
            path = %path.display(),
            "input path contains no .pdf; the output overwrites the input"
        );
    }
    fs::write(&output_path, &text).map_err(|e| ExtractError::file_access(&output_path, e))?;

    writeln!(out, "\n\nText saved to: {}", output_path.display()).map_err(console)?;
    out.flush().map_err(console)?;

    info!(
        output = %output_path.display(),
        chars = text.chars().count(),
        "saved extracted text"
    );

    Ok(ExtractionResult {
        pages,
        text,
        output_path,
    })
}

/// Replace every literal `.pdf` in the path text with `.txt`.
///
/// This is a substring substitution, not an extension rename: a path with no
/// `.pdf` in it comes back unchanged. On unix the raw path bytes are
/// rewritten, so non-UTF-8 components survive.
#[cfg(unix)]
pub fn output_path_for(input: &Path) -> PathBuf {
    use std::{
        ffi::OsString,
        os::unix::ffi::{OsStrExt, OsStringExt},
    };

    let bytes = replace_all(input.as_os_str().as_bytes(), b".pdf", b".txt");
    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
pub fn output_path_for(input: &Path) -> PathBuf {
    PathBuf::from(input.to_string_lossy().replace(".pdf", ".txt"))
}

#[cfg(unix)]
fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some((&first, tail)) = rest.split_first() {
        if rest.starts_with(from) {
            out.extend_from_slice(to);
            rest = &rest[from.len()..];
        } else {
            out.push(first);
            rest = tail;
        }
    }
    out
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| ExtractError::file_access(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| ExtractError::file_access(path, e))?;
    Ok(bytes)
}
