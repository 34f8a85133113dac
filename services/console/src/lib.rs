mod cli;
mod demo;
mod intake;
mod render;

use zoo_registry::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
