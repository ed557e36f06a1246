use std::process::ExitCode;

fn main() -> ExitCode {
    match terminal221b::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            terminal221b::cli::report_error(&err);
            ExitCode::FAILURE
        }
    }
}
