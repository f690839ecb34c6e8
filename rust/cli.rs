use std::path::PathBuf;

use clap::{Args, Parser};

use crate::{
    config::{DEFAULT_PDF_PATH, ENGINE_ENV, INPUT_ENV, PDFTOTEXT_ENV},
    engine::{EngineKind, PDFTOTEXT_PROGRAM},
};

#[derive(Parser, Debug)]
#[command(
    name = "pdftxt",
    version,
    about = "Extract the text of a PDF page by page and save it next to the input"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[arg(
        value_name = "PDF_PATH",
        env = INPUT_ENV,
        default_value = DEFAULT_PDF_PATH,
        help = "PDF file to extract; the text is written to the same path with .pdf replaced by .txt"
    )]
    pub pdf_path: PathBuf,

    #[arg(
        long,
        value_enum,
        env = ENGINE_ENV,
        default_value_t = EngineKind::Builtin,
        help = "Text engine used to read the PDF"
    )]
    pub engine: EngineKind,

    #[arg(
        long,
        value_name = "PATH",
        env = PDFTOTEXT_ENV,
        default_value = PDFTOTEXT_PROGRAM,
        help = "pdftotext executable used by --engine pdftotext"
    )]
    pub pdftotext: PathBuf,
}

#[derive(Args, Debug)]
pub struct GlobalOpts {
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
