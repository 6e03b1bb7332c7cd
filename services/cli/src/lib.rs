mod cli;
mod commands;
mod render;

use staff_transfers::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
