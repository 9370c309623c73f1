use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use pagedeck::cli::{Cli, Commands};
use pagedeck::config::Config;
use pagedeck::{commands, history, mcp};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env();
    let history = history::from_config(&config);

    match cli.command {
        Commands::Mcp => {
            mcp::run_server().await?;
        }
        Commands::Count { path } => {
            commands::count::run(&path)?;
        }
        Commands::Preview { path, pages } => {
            commands::preview::run(&path, &pages)?;
        }
        Commands::Merge { inputs, output } => {
            commands::merge::run(&inputs, output, history.as_ref())?;
        }
        Commands::Split {
            path,
            pages,
            output,
        } => {
            commands::split::run(&path, &pages, &output, history.as_ref())?;
        }
        Commands::History { limit } => {
            commands::history::run(history.as_ref(), limit)?;
        }
        Commands::Favorites { toggle } => {
            commands::favorites::run(&config, toggle.as_deref())?;
        }
    }

    Ok(())
}
