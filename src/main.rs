use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use inquire::InquireError;
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use self::errors::SpendlogError;
use self::prompt::MenuAction;
use self::records::summary::Summary;
use self::records::RecordStore;

pub mod errors;
mod prompt;
mod records;
mod storage;
mod table;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SpendlogConfig {
    pub currency: char,
    pub data_file: PathBuf,
}

impl Default for SpendlogConfig {
    fn default() -> Self {
        Self {
            currency: '$',
            data_file: default_data_file(),
        }
    }
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("spendlog").join("purchases.json"))
        .unwrap_or_else(|| PathBuf::from("purchases.json"))
}

fn parse_config() -> Result<SpendlogConfig, SpendlogError> {
    let cur_dir = std::env::current_dir()?;
    let mut candidates = vec![cur_dir.join("spendlog.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("spendlog").join("spendlog.toml"));
    }

    for config_path in candidates {
        if !config_path.exists() {
            continue;
        }
        println!("Config file found at {}", config_path.display());
        let config = std::fs::read_to_string(config_path)?;
        let config: SpendlogConfig = toml::from_str(&config)?;
        return Ok(config);
    }

    debug!("No config file found, using defaults");
    Ok(SpendlogConfig::default())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the purchase record file, overriding the configured one
    #[arg(short = 'f', long)]
    data_file: Option<PathBuf>,
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), SpendlogError> {
    let args = Args::parse();

    let default_filter = if args.debug { "spendlog=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = parse_config()?;
    if let Some(data_file) = args.data_file {
        config.data_file = data_file;
    }
    debug!("Using record file {}", config.data_file.display());

    let mut store = RecordStore::new(storage::load(&config.data_file));
    debug!("{} records in memory", store.len());

    loop {
        println!();
        let action = match prompt::menu_action() {
            Ok(action) => action,
            Err(InquireError::OperationCanceled) => continue,
            Err(err) => return Err(err.into()),
        };

        if let MenuAction::Exit = action {
            storage::save(&config.data_file, store.records());
            println!("Goodbye!");
            break;
        }

        if let Err(err) = run_action(action, &mut store, &config) {
            match err {
                SpendlogError::Prompt(InquireError::OperationCanceled) => {
                    println!("Operation cancelled.")
                }
                SpendlogError::Prompt(err) => return Err(err.into()),
                err => println!("{err}"),
            }
        }
    }

    Ok(())
}

fn run_action(
    action: MenuAction,
    store: &mut RecordStore,
    config: &SpendlogConfig,
) -> Result<(), SpendlogError> {
    match action {
        MenuAction::Add => add_record(store, config),
        MenuAction::ViewAll => view_records(store, config),
        MenuAction::Search => search_records(store, config),
        MenuAction::Update => update_record(store, config),
        MenuAction::Delete => delete_record(store, config),
        MenuAction::Summarize => summarize(store, config),
        MenuAction::Exit => Ok(()),
    }
}

fn add_record(store: &mut RecordStore, config: &SpendlogConfig) -> Result<(), SpendlogError> {
    let draft = prompt::record_draft(config.currency)?;
    let item_name = draft.item_name().to_string();
    let id = store.add(draft, Local::now().date_naive());
    storage::save(&config.data_file, store.records());
    println!("Added '{item_name}' with id {id}.");
    Ok(())
}

fn view_records(store: &RecordStore, config: &SpendlogConfig) -> Result<(), SpendlogError> {
    if store.is_empty() {
        println!("Your purchase list is currently empty. Add some records!");
        return Ok(());
    }
    print!("{}", table::render_records(store.records(), config.currency));
    Ok(())
}

fn search_records(store: &RecordStore, config: &SpendlogConfig) -> Result<(), SpendlogError> {
    if store.is_empty() {
        println!("The purchase list is empty. Nothing to search.");
        return Ok(());
    }
    let Some(keyword) = prompt::search_keyword()? else {
        println!("Search cancelled.");
        return Ok(());
    };
    println!("Search results for '{keyword}':");
    print!(
        "{}",
        table::render_records(store.search(&keyword), config.currency)
    );
    Ok(())
}

fn update_record(store: &mut RecordStore, config: &SpendlogConfig) -> Result<(), SpendlogError> {
    if store.is_empty() {
        println!("The purchase list is empty. Nothing to update.");
        return Ok(());
    }
    print!("{}", table::render_records(store.records(), config.currency));
    let Some(id) = prompt::record_id("Id of the record to update:")? else {
        println!("Update cancelled.");
        return Ok(());
    };
    let current = store
        .get(id)
        .ok_or(SpendlogError::RecordNotFound(id))?
        .clone();
    println!("Editing '{}' (id {id})", current.item_name);
    let patch = prompt::record_patch(config.currency, &current)?;
    store.apply_patch(id, patch, Local::now().date_naive())?;
    storage::save(&config.data_file, store.records());
    println!("Updated record {id}.");
    Ok(())
}

fn delete_record(store: &mut RecordStore, config: &SpendlogConfig) -> Result<(), SpendlogError> {
    if store.is_empty() {
        println!("The purchase list is empty. Nothing to delete.");
        return Ok(());
    }
    print!("{}", table::render_records(store.records(), config.currency));
    let Some(id) = prompt::record_id("Id of the record to delete:")? else {
        println!("Deletion cancelled.");
        return Ok(());
    };
    let removed = store.remove(id)?;
    storage::save(&config.data_file, store.records());
    println!("Deleted '{}' (id {id}).", removed.item_name);
    Ok(())
}

fn summarize(store: &RecordStore, config: &SpendlogConfig) -> Result<(), SpendlogError> {
    if store.is_empty() {
        println!("The purchase list is empty. No data to report.");
        return Ok(());
    }
    print!("{}", Summary::of(store.records()).render(config.currency));
    Ok(())
}
