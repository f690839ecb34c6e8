use std::path::PathBuf;

use crate::{cli::Cli, engine::Engine};

pub const INPUT_ENV: &str = "PDFTXT_INPUT";
pub const ENGINE_ENV: &str = "PDFTXT_ENGINE";
pub const PDFTOTEXT_ENV: &str = "PDFTXT_PDFTOTEXT";
pub const DEFAULT_PDF_PATH: &str = "HiTechnic-Motor-Controller-Specification.pdf";

/// Everything one extraction run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub pdf_path: PathBuf,
    pub engine: Engine,
}

impl ExtractConfig {
    pub fn new(pdf_path: impl Into<PathBuf>, engine: Engine) -> Self {
        Self {
            pdf_path: pdf_path.into(),
            engine,
        }
    }
}

impl From<&Cli> for ExtractConfig {
    fn from(cli: &Cli) -> Self {
        Self::new(
            cli.pdf_path.clone(),
            Engine::new(cli.engine, cli.pdftotext.clone()),
        )
    }
}
