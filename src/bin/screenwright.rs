//! Screenwright CLI: storyboards, word counts and writing streaks for
//! screenplay notes.
//!
//! Usage:
//!   screenwright storyboard <file> [--json]
//!   screenwright track <file>... [--db path]
//!   screenwright streak <file> [--db path]
//!   screenwright templates | template <style> <file> | directive <file>
//!   screenwright palette

use clap::{Parser, Subcommand};
use screenwright::settings::{default_db_path, default_settings_path};
use screenwright::templates::{apply_directive_on_open, insert_template, TEMPLATES};
use screenwright::{
    extract_scenes, spawn_desk, DeskEvent, DeskOutcome, DocumentId, OpenStore, SettingsStore,
    SqliteStore, WritingDesk,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "screenwright",
    version,
    about = "Storyboards, word counts and writing streaks for screenplay notes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to SQLite history database
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// Path to settings JSON file
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print storyboard cards for a document
    Storyboard {
        file: PathBuf,
        /// Emit cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record documents as written today and print their status
    Track {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print a document's current writing streak
    Streak { file: PathBuf },
    /// List built-in templates
    Templates,
    /// Append a template to a document
    Template {
        /// Template style (see `templates`)
        style: String,
        file: PathBuf,
    },
    /// Apply a `/script-<style>` directive on a document's first line
    Directive { file: PathBuf },
    /// List insertion palette entries
    Palette,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn open_desk(
    db: Option<PathBuf>,
    settings: Option<PathBuf>,
) -> Result<WritingDesk<SqliteStore>, String> {
    let settings_path = settings.unwrap_or_else(default_settings_path);
    let settings = SettingsStore::load(settings_path)
        .map_err(|e| format!("Failed to load settings: {}", e))?;
    let db_path = db.unwrap_or_else(default_db_path);
    let store =
        SqliteStore::open(&db_path).map_err(|e| format!("Failed to open database: {}", e))?;
    Ok(WritingDesk::new(store, settings.settings().clone()))
}

fn document_id(path: &Path) -> Result<DocumentId, String> {
    path.canonicalize()
        .map(|p| DocumentId::from_path(&p))
        .map_err(|e| format!("cannot resolve '{}': {}", path.display(), e))
}

fn read(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path.display(), e))
}

fn write(path: &Path, text: &str) -> Result<(), String> {
    std::fs::write(path, text).map_err(|e| format!("cannot write '{}': {}", path.display(), e))
}

fn cmd_storyboard(file: &Path, json: bool) -> Result<(), String> {
    let cards = extract_scenes(&read(file)?);
    if json {
        let out = serde_json::to_string_pretty(&cards).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }
    if cards.is_empty() {
        println!("No scene headings found.");
        return Ok(());
    }
    for card in cards {
        println!("{:>5}  {}", card.line + 1, card.heading);
        if !card.excerpt.is_empty() {
            println!("       {}", card.excerpt);
        }
    }
    Ok(())
}

fn cmd_track(desk: WritingDesk<SqliteStore>, files: Vec<PathBuf>) -> i32 {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to create tokio runtime: {}", e);
            return 1;
        }
    };

    rt.block_on(async move {
        let (channels, worker) = spawn_desk(desk, 16);
        let events = channels.events;
        let mut outcomes = channels.outcomes;

        let producer = tokio::spawn(async move {
            let mut failures = 0;
            if events.send(DeskEvent::StartSession).await.is_err() {
                return 1;
            }
            for path in files {
                let event = document_id(&path).and_then(|document| {
                    read(&path).map(|text| DeskEvent::Modified { document, text })
                });
                match event {
                    Ok(event) => {
                        if events.send(event).await.is_err() {
                            return failures + 1;
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        failures += 1;
                    }
                }
            }
            failures
        });

        let mut code = 0;
        while let Some(outcome) = outcomes.recv().await {
            match outcome {
                DeskOutcome::Observed(obs) => {
                    println!("{}", obs.document);
                    println!("  {}", obs.status);
                    for achievement in obs.achievements {
                        println!("  {}", achievement);
                    }
                }
                DeskOutcome::Failed { document, error } => {
                    match document {
                        Some(doc) => eprintln!("Error: {}: {}", doc, error),
                        None => eprintln!("Error: {}", error),
                    }
                    code = 1;
                }
                _ => {}
            }
        }

        match producer.await {
            Ok(0) => {}
            Ok(_) => code = 1,
            Err(e) => {
                eprintln!("Error: {}", e);
                code = 1;
            }
        }
        if let Err(e) = worker.await {
            eprintln!("Error: {}", e);
            code = 1;
        }
        code
    })
}

fn cmd_streak(desk: &WritingDesk<SqliteStore>, file: &Path) -> Result<(), String> {
    let id = document_id(file)?;
    let streak = desk.streak_for(&id).map_err(|e| e.to_string())?;
    println!("{}: {} day{}", id, streak, if streak == 1 { "" } else { "s" });
    Ok(())
}

fn cmd_templates() {
    println!("{:<12}  {:<18}  {}", "STYLE", "NAME", "FILE");
    println!("{}", "-".repeat(48));
    for t in TEMPLATES {
        println!("{:<12}  {:<18}  {}", t.id, t.name, t.file);
    }
}

fn cmd_template(style: &str, file: &Path) -> Result<(), String> {
    let content = read(file)?;
    let updated = insert_template(&content, &style.to_ascii_lowercase()).map_err(|e| e.to_string())?;
    write(file, &updated)?;
    println!("Appended '{}' template to {}", style, file.display());
    Ok(())
}

fn cmd_directive(file: &Path) -> Result<(), String> {
    let content = read(file)?;
    match apply_directive_on_open(&content).map_err(|e| e.to_string())? {
        Some(updated) => {
            write(file, &updated)?;
            println!("Applied directive in {}", file.display());
        }
        None => println!("No directive on the first line of {}", file.display()),
    }
    Ok(())
}

fn cmd_palette() {
    for entry in screenwright::palette::PALETTE {
        println!("{:<20}  {}", entry.label, entry.insert.trim_end());
    }
}

fn exit_with(result: Result<(), String>) -> ! {
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Storyboard { file, json } => exit_with(cmd_storyboard(&file, json)),
        Commands::Templates => cmd_templates(),
        Commands::Template { style, file } => exit_with(cmd_template(&style, &file)),
        Commands::Directive { file } => exit_with(cmd_directive(&file)),
        Commands::Palette => cmd_palette(),
        Commands::Track { files } => {
            let desk = match open_desk(cli.db, cli.settings) {
                Ok(desk) => desk,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            std::process::exit(cmd_track(desk, files));
        }
        Commands::Streak { file } => {
            let result = open_desk(cli.db, cli.settings).and_then(|desk| cmd_streak(&desk, &file));
            exit_with(result);
        }
    }
}
