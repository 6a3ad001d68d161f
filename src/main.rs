use std::env;
use std::process::ExitCode;
use tidyup::cli::{self, Invocation};

fn main() -> ExitCode {
    env_logger::init();

    let tokens: Vec<String> = env::args().skip(1).collect();

    match cli::parse_args(tokens) {
        Ok(Invocation::Help) => {
            println!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Invocation::Run(config)) => match cli::run(&config) {
            Ok(summary) if summary.failures == 0 => ExitCode::SUCCESS,
            Ok(summary) => {
                eprintln!("{} file(s) could not be organized", summary.failures);
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
