use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    noteport_cli::init_logging();

    let cli = noteport_cli::cli::Cli::parse();
    match noteport_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
