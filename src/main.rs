use property_portfolio::admin::seed_sample_data;
use property_portfolio::{Config, Portfolio, StoreError};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: portfolio [dump | state <state-id> | show <state-id> <slug> | seed]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Dump,
    State(String),
    Show(String, String),
    Seed,
}

impl Command {
    fn parse(args: &[String]) -> Option<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            [] | ["dump"] => Some(Command::Dump),
            ["state", state_id] => Some(Command::State(state_id.to_string())),
            ["show", state_id, slug] => Some(Command::Show(state_id.to_string(), slug.to_string())),
            ["seed"] => Some(Command::Seed),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Parse the command before touching any store
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = Command::parse(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };

    // 2️⃣ Pick the store from the environment
    let config = Config::load();
    let portfolio = match config.portfolio() {
        Ok(p) => p,
        Err(e) => {
            error!("❌ Store setup failed: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Run it
    if let Err(e) = run(&portfolio, command).await {
        error!("❌ {e}");
        std::process::exit(1);
    }
}

async fn run(portfolio: &Portfolio, command: Command) -> Result<(), StoreError> {
    match command {
        Command::Dump => print_json(&portfolio.fetch_all().await?),
        Command::State(state_id) => print_json(&portfolio.fetch_by_state(&state_id).await?),
        Command::Show(state_id, slug) => match portfolio.fetch_one(&state_id, &slug).await? {
            Some(property) => print_json(&property),
            None => {
                info!("No property stored for {state_id}/{slug}");
                Ok(())
            }
        },
        Command::Seed => {
            let count = seed_sample_data(portfolio).await?;
            println!("Seeded {count} properties");
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), StoreError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| StoreError::Internal(format!("could not serialize output: {e}")))?;
    println!("{text}");
    Ok(())
}
