//! Command-line front end: load a store or restaurant page, or extract from
//! HTML piped on stdin, and print the items as a table, JSON, or a single
//! column ready for the clipboard.

use std::io::{self, Read};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use glovo_scrape::presenter::{self, Column, ItemTable};
use glovo_scrape::{images, Item, Options, Session};
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser)]
#[command(name = "glovo-scrape")]
#[command(about = "Scrape product listings from Glovo store and restaurant pages", long_about = None)]
struct Cli {
    /// Proxy endpoint; the target page is passed as its `url` parameter
    #[arg(long, env = "GLOVO_PROXY", default_value = glovo_scrape::patterns::DEFAULT_PROXY_BASE)]
    proxy: String,

    /// Request timeout in seconds
    #[arg(long, env = "GLOVO_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,

    /// Label for items found outside a category page
    #[arg(long, default_value = glovo_scrape::patterns::DEFAULT_CATEGORY)]
    default_category: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Print only this column, one value per line (category, name, image-url, description, price)
    #[arg(long)]
    column: Option<Column>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a store page, following its categories
    Store {
        /// Store URL
        url: String,
    },
    /// Load a restaurant page
    Restaurant {
        /// Restaurant URL (query string is ignored)
        url: String,
    },
    /// Extract items from HTML read on stdin
    Html {
        /// Page URL used to resolve relative image sources
        #[arg(long)]
        url: Option<Url>,
    },
    /// List dish image URLs from HTML read on stdin (no SVGs, no icons)
    Images {
        /// Page URL used to resolve relative image sources
        #[arg(long)]
        url: Option<Url>,
    },
    /// Print every image URL, including hidden icons (legacy copy-all)
    ImageUrls {
        /// Store URL
        url: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = Options {
        proxy_base: cli.proxy.clone(),
        request_timeout: Duration::from_secs(cli.timeout),
        default_category: cli.default_category.clone(),
        ..Options::default()
    };

    let mut session = Session::new(options)?;
    let items = match &cli.command {
        Commands::Store { url } => session.run_store(url).await?,
        Commands::Restaurant { url } => session.run_restaurant(url).await?,
        Commands::Html { url } => session.run_html(&read_stdin()?, url.as_ref()).await?,
        Commands::ImageUrls { url } => {
            let items = session.run_store(url).await?;
            println!("{}", presenter::copy_image_urls(items));
            return Ok(());
        }
        Commands::Images { url } => {
            let urls = images::harvest_image_urls(&read_stdin()?, url.as_ref());
            if urls.is_empty() {
                println!("No images found.");
            } else {
                println!("{}", urls.join("\n"));
            }
            return Ok(());
        }
    };

    print_items(items, cli.format, cli.column)?;
    Ok(())
}

fn print_items(items: &[Item], format: Format, column: Option<Column>) -> serde_json::Result<()> {
    let table = ItemTable::new(items);
    if let Some(column) = column {
        println!("{}", table.column_text(column));
        return Ok(());
    }

    match format {
        Format::Table => println!("{}", table.render().trim_end()),
        Format::Json => {
            let rows: Vec<&Item> = table.rows().collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn read_stdin() -> io::Result<String> {
    let mut html = String::new();
    io::stdin().read_to_string(&mut html)?;
    Ok(html)
}
