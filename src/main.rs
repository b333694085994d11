use clap::Parser;
use detag::application::{list_hashtags, ClearTagsService};
use detag::cli::{format_clear_summary, format_tag_list, Cli, Commands};
use detag::domain::strip_hashtags;
use detag::error::{DetagError, Result};
use detag::infrastructure::i18n::parse_locale;
use detag::infrastructure::{Config, FileSystemNoteStore, Messages, NoteId};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DETAG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Strip { file } => {
            let text = read_input(file.as_deref())?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(strip_hashtags(&text).as_bytes())?;
            stdout.flush()?;
            Ok(0)
        }
        Commands::Tags { file } => {
            let text = read_input(file.as_deref())?;
            print!("{}", format_tag_list(&list_hashtags(&text)));
            std::io::stdout().flush()?;
            Ok(0)
        }
        Commands::Clear {
            notes,
            all,
            recursive,
            root,
            locale,
            dry_run,
        } => {
            let root = match root {
                Some(path) => path,
                None => FileSystemNoteStore::discover_root()?,
            };
            clear(root, notes, all, recursive, locale, dry_run)
        }
    }
}

fn clear(
    root: PathBuf,
    notes: Vec<String>,
    all: bool,
    recursive: bool,
    locale: Option<String>,
    dry_run: bool,
) -> Result<i32> {
    let config = Config::load_from_dir(&root)?;
    let locale = match locale {
        Some(value) => parse_locale(&value)?,
        None => config.get_locale()?,
    };

    let store = FileSystemNoteStore::from_config(root, &config);
    let ids: Vec<NoteId> = if all {
        store.list_notes(recursive || config.recursive)?
    } else if notes.is_empty() {
        return Err(DetagError::Config(
            "No notes given. Pass note ids or use --all.".to_string(),
        ));
    } else {
        notes.into_iter().map(NoteId::from).collect()
    };

    tracing::debug!(count = ids.len(), %locale, dry_run, "clearing tags");

    let service = ClearTagsService::new(store, Messages::new(locale)).with_dry_run(dry_run);
    let summary = service.execute_many(&ids);

    println!("{}", format_clear_summary(&summary));
    Ok(if summary.is_success() { 0 } else { 1 })
}
