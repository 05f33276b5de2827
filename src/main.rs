use std::process::ExitCode;

fn main() -> ExitCode {
    match desy3_bao::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
