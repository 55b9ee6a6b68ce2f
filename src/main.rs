//! prever interactive terminal application
//!
//! Loads the classifier and column-order artifacts from the working
//! directory, then runs the survey/analytics session over stdin/stdout.
//! A missing or corrupt artifact aborts startup before any interaction;
//! there is no flag or environment surface to configure.

use prever::artifacts::Assets;
use prever::ui::Session;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let assets = match Assets::global(".") {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Erro fatal ao carregar os artefatos do modelo: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(assets, stdin.lock(), stdout.lock());
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
