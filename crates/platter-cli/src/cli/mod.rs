//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use platter_core::catalog::ItemId;
use platter_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "platter")]
#[command(version)]
#[command(about = "Browse an infinitely scrolling food catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    catalog: CatalogArgs,
}

/// Per-run overrides of the `[catalog]` config section.
#[derive(clap::Args, Debug, Clone, Default)]
struct CatalogArgs {
    /// Number of generated catalog items
    #[arg(long, global = true, value_name = "N")]
    size: Option<usize>,

    /// Seed for the catalog generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Items per page
    #[arg(long, global = true, value_name = "N")]
    page_size: Option<usize>,

    /// Simulated page fetch delay in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Make every Nth page request fail (0 = never)
    #[arg(long, global = true, value_name = "N")]
    fail_every: Option<u64>,
}

impl CatalogArgs {
    fn apply(&self, catalog: &mut config::CatalogConfig) {
        if let Some(size) = self.size {
            catalog.size = size;
        }
        if let Some(seed) = self.seed {
            catalog.seed = seed;
        }
        if let Some(page_size) = self.page_size {
            catalog.page_size = page_size;
        }
        if let Some(latency_ms) = self.latency_ms {
            catalog.latency_ms = latency_ms;
        }
        if let Some(fail_every) = self.fail_every {
            catalog.fail_every = fail_every;
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the catalog browser (default)
    Browse,

    /// Page through the whole catalog without a terminal UI
    Pages {
        /// Stop after this many pages
        #[arg(long, value_name = "N")]
        max_pages: Option<usize>,

        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one catalog item as JSON
    Show {
        /// The item id
        #[arg(value_name = "ITEM_ID")]
        id: ItemId,
    },

    /// Search items by name, description, category or tag
    Search {
        /// Case-insensitive search text
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // config commands must work even when the existing file is broken
    if let Some(Commands::Config { command }) = &cli.command {
        return run_config_command(command);
    }

    let mut config = config::Config::load().context("load config")?;
    cli.catalog.apply(&mut config.catalog);
    config.validate().context("apply command line overrides")?;

    // the browser owns the terminal, so its logs go to a file
    let _log_guard = match cli.command {
        None | Some(Commands::Browse) => Some(
            logging::init_file(&config::paths::logs_dir(), &config.log_level)
                .context("init logging")?,
        ),
        Some(_) => {
            logging::init_stderr(&config.log_level).context("init logging")?;
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli.command, &config).await })
}

async fn dispatch(command: Option<Commands>, config: &config::Config) -> Result<()> {
    // default to the browser
    let Some(command) = command else {
        return commands::browse::run(config).await;
    };

    match command {
        Commands::Browse => commands::browse::run(config).await,
        Commands::Pages { max_pages, json } => {
            commands::pages::run(config, commands::pages::PagesOptions { max_pages, json }).await
        }
        Commands::Show { id } => commands::show::run(config, id).await,
        Commands::Search { query } => commands::search::run(config, &query).await,
        Commands::Config { command } => run_config_command(&command),
    }
}

fn run_config_command(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            commands::config::path();
            Ok(())
        }
        ConfigCommands::Init => commands::config::init(),
    }
}
