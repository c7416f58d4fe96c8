use std::process::ExitCode;

fn main() -> ExitCode {
    bincare_cli::run()
}
