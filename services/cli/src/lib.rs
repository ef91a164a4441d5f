mod cli;
mod infra;
mod render;
mod reports;

use estate_ai::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
