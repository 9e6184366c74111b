//! Command-line front end for browsing TheMealDB.
//!
//! ```bash
//! # List categories
//! mealdb categories
//!
//! # Meals in a category, with the category description
//! mealdb category Seafood
//!
//! # Search by name and save the result page as HTML
//! mealdb --format html --out salmon.html search salmon
//!
//! # Full recipe
//! mealdb meal 52772
//!
//! # Interactive session: home, category <name>, search <query>, meal <id>, quit
//! mealdb browse
//! ```

use anyhow::{bail, Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use mealdb_browse::{
    Browser, Config, HtmlRenderer, MealDbClient, Outcome, RecipeDataSource, RenderPipeline,
    RenderSink, TextRenderer, ViewState,
};
use std::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mealdb",
    version,
    about = "Browse TheMealDB recipe categories, meals and recipes"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// YAML config file
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Write output to a file instead of stdout
    #[arg(long, global = true)]
    out: Option<Utf8PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List all categories
    Categories,
    /// List the meals in a category
    Category { name: String },
    /// Search meals by name
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show a full recipe
    Meal { id: String },
    /// Interactive session reading commands from stdin
    Browse,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    debug!(?config, "configuration loaded");
    let client = MealDbClient::from_config(&config).context("building HTTP client")?;
    let pipeline = RenderPipeline::new(client);

    match cli.format {
        Format::Text => {
            let sink: Box<dyn RenderSink> = match &cli.out {
                Some(path) => Box::new(TextRenderer::new(
                    File::create(path).with_context(|| format!("creating {path}"))?,
                )),
                None => Box::new(TextRenderer::new(std::io::stdout())),
            };
            let browser = Browser::new(pipeline, sink);
            match cli.command {
                Command::Browse => browse(&browser).await,
                command => run_once(&browser, command).await,
            }
        }
        Format::Html => {
            if matches!(cli.command, Command::Browse) {
                bail!("browse only supports text output");
            }
            let browser = Browser::new(pipeline, HtmlRenderer::new());
            run_once(&browser, cli.command).await?;
            let html = browser.into_sink().html().to_string();
            match &cli.out {
                Some(path) => std::fs::write(path, html).with_context(|| format!("writing {path}"))?,
                None => print!("{html}"),
            }
            Ok(())
        }
    }
}

/// Runs a single command and fails if it could not show anything.
async fn run_once<S, R>(browser: &Browser<S, R>, command: Command) -> Result<()>
where
    S: RecipeDataSource,
    R: RenderSink,
{
    let outcome = match command {
        Command::Categories => browser.open_home().await?,
        Command::Category { name } => {
            // The description comes from the session's category list.
            if let Err(e) = browser.pipeline().load_catalog().await {
                warn!(error = %e, "could not load categories for the description");
            }
            browser.select_category(&name).await?
        }
        Command::Search { query } => browser.submit_search(&query.join(" ")).await?,
        Command::Meal { id } => {
            let outcome = browser.open_meal(&id).await?;
            if outcome == Outcome::Unchanged {
                bail!("no meal with id {id}");
            }
            outcome
        }
        Command::Browse => bail!("browse is an interactive session, not a single command"),
    };

    if outcome == Outcome::Unchanged {
        bail!("nothing to show");
    }
    if browser.frame().await.view == ViewState::Unavailable {
        bail!("the recipe API could not be reached");
    }
    Ok(())
}

/// Reads one action per line until `quit` or end of input.
async fn browse<S, R>(browser: &Browser<S, R>) -> Result<()>
where
    S: RecipeDataSource,
    R: RenderSink,
{
    browser.open_home().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (action, argument) = line.split_once(' ').unwrap_or((line, ""));
        let argument = argument.trim();

        let outcome = match action {
            "" => continue,
            "quit" | "exit" => break,
            "home" => browser.open_home().await?,
            "category" if !argument.is_empty() => browser.select_category(argument).await?,
            "search" => browser.submit_search(argument).await?,
            "meal" if !argument.is_empty() => browser.open_meal(argument).await?,
            _ => {
                eprintln!("commands: home, category <name>, search <query>, meal <id>, quit");
                continue;
            }
        };

        if outcome == Outcome::Unchanged && action == "meal" {
            eprintln!("no meal with id {argument}");
        }
    }
    Ok(())
}
