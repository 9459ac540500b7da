use anyhow::Result;
use clap::Parser;

use stocks_tui::{app::App, config::Config};

#[derive(Debug, Parser)]
#[command(about = "A terminal-based stock quotes viewer")]
struct Args {
    /// Market region passed to the quote-search endpoint
    #[arg(long, default_value = "US")]
    region: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let config = Config::from_env(args.region)?;

    let mut app = App::new(config);
    app.run().await?;

    Ok(())
}
