use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    if let Err(e) = pdftxt::run() {
        eprintln!("{e:?}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
