use tabel::commands::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up YOUTRACK_TOKEN and friends from a local .env if present.
    dotenv::dotenv().ok();

    Cli::menu().await
}
