//! worktime main entrypoint.

use worktime::errors::AppError;
use worktime::run;
use worktime::ui::messages::error;

fn main() {
    match run() {
        Ok(()) => {}
        Err(AppError::Usage(msg)) => {
            eprintln!("{}", msg.trim_end());
            std::process::exit(1);
        }
        Err(e) => {
            error(format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
