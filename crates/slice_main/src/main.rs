use std::io;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use slice_main::{Cli, Environment, Error, init_tracing};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error)
            if matches!(
                error.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            error.exit()
        }
        Err(error) => return report(Error::from(error)),
    };

    init_tracing(cli.debug);
    let env = Environment::from_env();

    match slice_main::execute(&cli, &env, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(error),
    }
}

fn report(error: Error) -> ExitCode {
    tracing::debug!(kind = %error.kind(), "Slice failed");
    eprintln!("Error: {error}");
    ExitCode::FAILURE
}
