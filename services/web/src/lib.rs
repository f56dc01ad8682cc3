mod cli;
mod infra;
mod routes;
mod server;
mod tour;

use proplus::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
