use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use matching::{FilterCriteria, MatchError, RecipeMatcher};
use recipe_store::{Recipe, RecipeStore};
use server::ServiceConfig;
use std::path::PathBuf;
use std::time::Instant;

/// Recipe catalog: recipe book and recipe search services
#[derive(Parser)]
#[command(name = "recipe-catalog")]
#[command(
    about = "Store recipes and find them by meal type, diet and ingredients",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the recipe book service over a store file
    Book {
        /// JSON file holding the recipes
        #[arg(long, env = "RECIPE_STORE")]
        store: PathBuf,

        /// Create an empty store file if it does not exist
        #[arg(long, env = "RECIPE_CREATE_IF_MISSING")]
        create_if_missing: bool,

        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Run the recipe search service
    Search {
        /// Search a local store file
        #[arg(
            long,
            env = "RECIPE_STORE",
            conflicts_with = "book_url",
            required_unless_present = "book_url"
        )]
        store: Option<PathBuf>,

        /// Search a running recipe book service instead
        #[arg(long, env = "RECIPE_BOOK_URL")]
        book_url: Option<String>,

        #[command(flatten)]
        service: ServiceArgs,
    },

    /// Filter a store file from the command line
    Find {
        /// JSON file holding the recipes
        #[arg(long, env = "RECIPE_STORE")]
        store: PathBuf,

        /// Meal type to accept (repeatable; any one is enough)
        #[arg(long = "meal-type")]
        meal_type: Vec<String>,

        /// Dietary restriction to accept (repeatable; "none" for no restriction)
        #[arg(long)]
        diet: Vec<String>,

        /// Whitespace-separated ingredients that must all appear
        #[arg(long)]
        ingredients: Vec<String>,
    },
}

/// Flags shared by both services
#[derive(Args)]
struct ServiceArgs {
    /// Address to bind
    #[arg(long, env = "RECIPE_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "RECIPE_PORT", default_value = "8080")]
    port: u16,

    /// Request timeout in seconds
    #[arg(long, env = "RECIPE_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// Attempts to reach the backing store at startup
    #[arg(long, env = "RECIPE_RETRY_ATTEMPTS", default_value = "4")]
    retry_attempts: u32,

    /// Wait between startup attempts, in milliseconds
    #[arg(long, env = "RECIPE_RETRY_INTERVAL_MS", default_value = "1000")]
    retry_interval_ms: u64,
}

impl ServiceArgs {
    fn into_config(self) -> ServiceConfig {
        ServiceConfig {
            bind_addr: self.bind,
            port: self.port,
            timeout_secs: self.timeout_secs,
            retry_attempts: self.retry_attempts,
            retry_interval_ms: self.retry_interval_ms,
            ..ServiceConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Book {
            store,
            create_if_missing,
            service,
        } => {
            let config = ServiceConfig {
                store_path: Some(store),
                create_if_missing,
                ..service.into_config()
            };
            server::run_book_service(config).await?
        }
        Commands::Search {
            store,
            book_url,
            service,
        } => {
            let config = ServiceConfig {
                store_path: store,
                book_url,
                ..service.into_config()
            };
            server::run_search_service(config).await?
        }
        Commands::Find {
            store,
            meal_type,
            diet,
            ingredients,
        } => handle_find(store, meal_type, diet, ingredients)?,
    }

    Ok(())
}

/// Handle the 'find' command
fn handle_find(
    store: PathBuf,
    meal_types: Vec<String>,
    diets: Vec<String>,
    ingredients: Vec<String>,
) -> Result<()> {
    let start = Instant::now();
    let store = RecipeStore::open(&store, false)
        .with_context(|| format!("Failed to open recipe store {}", store.display()))?;
    println!(
        "{} Loaded {} recipes in {:?}",
        "✓".green(),
        store.len(),
        start.elapsed()
    );

    let criteria = FilterCriteria::new(meal_types, diets, ingredients);
    match RecipeMatcher::standard().search(&store.all(), &criteria) {
        Ok(recipes) => print_recipes(&recipes),
        Err(MatchError::NoMatch) => {
            println!("{}", MatchError::NoMatch.to_string().yellow());
        }
    }
    Ok(())
}

/// Helper function to format and print matching recipes
fn print_recipes(recipes: &[Recipe]) {
    println!("{}", format!("{} matching recipes:", recipes.len()).bold().blue());
    for (i, recipe) in recipes.iter().enumerate() {
        println!(
            "{}. {} [{}]",
            (i + 1).to_string().green(),
            recipe.title.bold(),
            recipe.id
        );
        if !recipe.meal_types.is_empty() {
            println!("   {}Meal types: {}", "• ".cyan(), recipe.meal_types.join(", "));
        }
        if !recipe.dietary_restrictions.is_empty() {
            println!("   {}Diet: {}", "• ".cyan(), recipe.dietary_restrictions.join(", "));
        }
        if !recipe.ingredients.is_empty() {
            println!("   {}Ingredients: {}", "• ".cyan(), recipe.ingredients.join(", "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_find_collects_repeated_flags() {
        let cli = Cli::try_parse_from([
            "recipe-catalog",
            "find",
            "--store",
            "recipes.json",
            "--meal-type",
            "Lunch",
            "--meal-type",
            "Dinner",
            "--ingredients",
            "egg flour",
        ])
        .unwrap();

        match cli.command {
            Commands::Find {
                meal_type,
                diet,
                ingredients,
                ..
            } => {
                assert_eq!(meal_type, vec!["Lunch", "Dinner"]);
                assert!(diet.is_empty());
                assert_eq!(ingredients, vec!["egg flour"]);
            }
            _ => panic!("expected find"),
        }
    }

    #[test]
    fn test_service_args_into_config() {
        let cli = Cli::try_parse_from([
            "recipe-catalog",
            "book",
            "--store",
            "recipes.json",
            "--port",
            "9001",
            "--retry-attempts",
            "2",
        ])
        .unwrap();

        match cli.command {
            Commands::Book { service, .. } => {
                let config = service.into_config();
                assert_eq!(config.port, 9001);
                assert_eq!(config.retry_attempts, 2);
                assert_eq!(config.retry_interval_ms, 1000);
            }
            _ => panic!("expected book"),
        }
    }
}
