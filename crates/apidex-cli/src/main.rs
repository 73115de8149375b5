use anyhow::Context;
use apidex_core::models::{ApiRecord, CategoryFilter};
use apidex_core::state::DashboardState;
use apidex_core::{builtin_categories, filter, Catalog, Config, Theme};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "apidex")]
#[command(version, about = "Terminal dashboard for browsing a catalog of third-party web APIs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Search the catalog and print matches
    Search {
        /// Search query (matched against name, description, tags, use case)
        query: String,
        /// Restrict to a category id
        #[arg(long)]
        category: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List catalog records
    List {
        /// Restrict to a category id
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one record in full
    Show {
        /// Record id, e.g. "github"
        id: String,
    },
    /// List the category enumeration
    Categories,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "apidex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        Config::default()
    });

    let categories = builtin_categories();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        // The TUI keeps running on the built-in catalog if the configured
        // one is bad; the problem lands in the status bar instead.
        let (catalog, catalog_error) = match &config.catalog.path {
            Some(path) => Catalog::load_or_builtin(path),
            None => (Catalog::builtin(), None),
        };

        let dark = Theme::by_name(&config.ui.theme)
            .map(|t| t.name == "Dark")
            .unwrap_or(true);
        let state = DashboardState {
            dark,
            ..DashboardState::new()
        };
        let mut app = apidex_tui::App::new(catalog, categories, state);
        app.error_message = catalog_error;
        apidex_tui::run_tui(app, config.ui.mouse_enabled).await?;
        return Ok(());
    };

    // Subcommands fail hard on a bad catalog; there is no status bar to
    // report into.
    let catalog = match &config.catalog.path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };

    match command {
        Commands::Search {
            query,
            category,
            json,
        } => {
            let cat = category_filter(category);
            let results = filter(&catalog, &query, &cat);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else if results.is_empty() {
                println!("No APIs found for \"{}\"", query);
            } else {
                print_records(&results);
            }
        }
        Commands::List { category } => {
            let cat = category_filter(category);
            let results = filter(&catalog, "", &cat);
            print_records(&results);
        }
        Commands::Show { id } => {
            let record = catalog
                .get(&id)
                .ok_or_else(|| apidex_core::Error::NotFound(id))?;
            print_record_full(record);
        }
        Commands::Categories => {
            for category in &categories {
                println!(
                    "{:<18} {:<22} {} APIs",
                    category.id, category.name, category.count
                );
            }
        }
    }

    Ok(())
}

fn category_filter(category: Option<String>) -> CategoryFilter {
    match category {
        Some(id) => CategoryFilter::Id(id),
        None => CategoryFilter::All,
    }
}

fn print_records(records: &[ApiRecord]) {
    for record in records {
        println!(
            "{:<18} {:<20} pop {:<4} {}",
            record.id, record.name, record.metadata.popularity, record.description
        );
    }
}

fn print_record_full(record: &ApiRecord) {
    println!("{} ({})", record.name, record.id);
    println!("  {}", record.description);
    if !record.use_case().is_empty() {
        println!("  Use case:   {}", record.use_case());
    }
    if !record.tags().is_empty() {
        println!("  Tags:       {}", record.tags().join(", "));
    }
    println!("  Category:   {}", record.category);
    println!("  Popularity: {}", record.metadata.popularity);
    println!("  Auth:       {}", record.auth);
    println!("  HTTPS:      {}", if record.https { "yes" } else { "no" });
    println!("  Docs:       {}", record.docs_url);
}
