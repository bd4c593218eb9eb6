use std::process::ExitCode;

use clap::Parser;
use fdd_cli::{CliArgs, FddCli};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let cli = match FddCli::from_args("fdd", &args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("fdd: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fdd: {e}");
            ExitCode::FAILURE
        }
    }
}
