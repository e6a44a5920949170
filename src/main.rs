use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use boardroom::{
    load_catalog_file, request_summary, run_turn, write_transcript_json, GeminiClient,
    GeminiConfig, MinutesDocument, PersonaCatalog, Speaker, Transcript, TranscriptEntry,
};

const WELCOME_NOTICE: &str =
    "Meeting started. The attendees are reviewing the agenda. Please state your problem or topic.";

#[derive(Parser)]
#[command(name = "boardroom")]
#[command(author, version, about = "Simulated boardroom meeting with AI attendees", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive meeting with the selected attendees
    Meet {
        /// Attendee persona ids, in initial speaking order
        #[arg(short, long, value_delimiter = ',', default_value = "tom,steve")]
        roles: Vec<String>,

        /// Custom persona catalog file (JSON); defaults to the built-in roster
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Write the full transcript to this JSON file on /end
        #[arg(long)]
        transcript_out: Option<PathBuf>,

        /// Write the meeting minutes to this markdown file on /end
        #[arg(long)]
        minutes_out: Option<PathBuf>,

        /// Model to use
        #[arg(long, default_value = "gemini-2.5-flash")]
        model: String,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the available personas
    Personas {
        /// Custom persona catalog file (JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Meet {
            roles,
            catalog,
            transcript_out,
            minutes_out,
            model,
            verbose,
        } => {
            setup_logging(verbose);
            run_meeting(roles, catalog, transcript_out, minutes_out, model).await
        }
        Commands::Personas { catalog } => {
            setup_logging(false);
            list_personas(catalog)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn resolve_catalog(path: Option<PathBuf>) -> Result<PersonaCatalog> {
    match path {
        Some(path) => load_catalog_file(&path),
        None => Ok(PersonaCatalog::builtin()),
    }
}

async fn run_meeting(
    roles: Vec<String>,
    catalog_path: Option<PathBuf>,
    transcript_out: Option<PathBuf>,
    minutes_out: Option<PathBuf>,
    model: String,
) -> Result<()> {
    let catalog = resolve_catalog(catalog_path)?;
    let mut active = catalog.select(&roles)?;

    // No meeting without a credential for the external model
    let mut config = GeminiConfig::from_env()?;
    config.model = model;
    let client = GeminiClient::new(config);

    let attendees: Vec<String> = active
        .order()
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|p| format!("{} ({})", p.name, p.title))
        .collect();
    info!("Attendees: {}", attendees.join(", "));

    let mut transcript = Transcript::new();
    let notice = transcript.append(TranscriptEntry::system(WELCOME_NOTICE));
    println!("[{}]", notice.content);
    println!("Type @Name to address someone first. Commands: /minutes, /end, /quit\n");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" => break,
            "/minutes" => {
                let summary = request_summary(&client, &transcript).await;
                println!("\n{}", MinutesDocument::new(&summary).format());
            }
            "/end" => {
                let summary = request_summary(&client, &transcript).await;
                println!("\n{}", MinutesDocument::new(&summary).format());

                if let Some(path) = &transcript_out {
                    write_transcript_json(&transcript, path)?;
                    info!("Transcript written to {:?}", path);
                }
                if let Some(path) = &minutes_out {
                    MinutesDocument::new(&summary).write_file(path)?;
                    info!("Minutes written to {:?}", path);
                }
                break;
            }
            _ => {
                // One turn at a time; input is only read again once the
                // sequential responder loop has finished.
                let result = run_turn(
                    &client,
                    &catalog,
                    &mut active,
                    &mut transcript,
                    input,
                    |entry| {
                        if !matches!(entry.speaker, Speaker::User) {
                            println!("\n{}: {}", entry.speaker_name, entry.content);
                        }
                    },
                )
                .await;

                if result.failures > 0 {
                    println!("\n[{} attendee(s) could not be reached this turn]", result.failures);
                }
                println!();
            }
        }
    }

    Ok(())
}

fn list_personas(catalog_path: Option<PathBuf>) -> Result<()> {
    let catalog = resolve_catalog(catalog_path)?;

    println!("Available personas");
    println!("==================");
    for persona in catalog.iter() {
        let marker = if persona.expert { " [expert]" } else { "" };
        println!("{:<8} {} - {}{}", persona.id, persona.name, persona.title, marker);
    }

    Ok(())
}
