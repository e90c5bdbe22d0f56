/*
 * Responsibility
 * - Start the tokio runtime
 * - Call app::run() (no logic here)
 */
use anyhow::Result;

use oauth_helpers::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
