//! owfin CLI - Terminal dashboard for market quotes, charts, and watchlists.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use reqwest::Url;

mod commands;
mod display;

use commands::bookmark::BookmarkAction;
use display::Format;

#[derive(Parser)]
#[command(name = "owfin")]
#[command(about = "Terminal dashboard for market quotes, charts, and watchlists", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Alternate quote API base URL (e.g. a local proxy)
    #[arg(long, global = true)]
    base_url: Option<Url>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch quotes for one or more symbols
    Quote {
        /// Ticker symbols (e.g. AAPL THYAO.IS GC=F)
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Show the quote table for a watchlist
    Watch {
        /// Watchlist group id (see `owfin lists`); omit for all groups
        group: Option<String>,

        /// Watch the bookmarked symbols instead of a group
        #[arg(short, long, conflicts_with = "group")]
        bookmarks: bool,

        /// Refresh every N seconds until interrupted
        #[arg(short, long)]
        refresh: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Render the price chart for a symbol
    Chart {
        /// Ticker symbol
        symbol: String,

        /// Chart range (1G, 1H, 1A, 3A, 6A, 1Y, 5Y, MAX)
        #[arg(short, long, default_value = "1G")]
        range: String,

        /// Also print the raw chart points
        #[arg(short, long)]
        points: bool,
    },

    /// Search for symbols by name or ticker
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value = "100")]
        limit: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Show symbol details and recent news
    Info {
        /// Ticker symbol
        symbol: String,

        /// Number of news items to show
        #[arg(short, long, default_value = "6")]
        news: usize,
    },

    /// List the available watchlist groups
    Lists {
        /// Filter groups by id or title
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Manage symbol and watchlist bookmarks
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Quote { symbols, format } => {
            let client = commands::make_client(cli.base_url.as_ref())?;
            commands::quote::quote(&client, &symbols, format, cli.quiet).await
        }
        Commands::Watch {
            group,
            bookmarks,
            refresh,
            format,
        } => {
            let client = commands::make_client(cli.base_url.as_ref())?;
            commands::watch::watch(
                &client,
                group.as_deref(),
                bookmarks,
                refresh,
                format,
                cli.quiet,
            )
            .await
        }
        Commands::Chart {
            symbol,
            range,
            points,
        } => {
            let client = commands::make_client(cli.base_url.as_ref())?;
            commands::chart::chart(&client, &symbol, &range, points).await
        }
        Commands::Search {
            query,
            limit,
            format,
        } => {
            let client = commands::make_client(cli.base_url.as_ref())?;
            commands::search::search(&client, &query, limit, format).await
        }
        Commands::Info { symbol, news } => {
            let client = commands::make_client(cli.base_url.as_ref())?;
            commands::info::info(&client, &symbol, news).await
        }
        Commands::Lists { search } => commands::lists::lists(search.as_deref()),
        Commands::Bookmark { action } => commands::bookmark::bookmark(&action),
    }
}
