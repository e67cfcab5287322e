//! Party Planner CLI
//!
//! Command-line front-end for the same planner the page server uses:
//! - List parties
//! - Show a party with its guests
//! - Create and remove parties
//! - Render the whole page as text or HTML

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use party_planner::config::{generate_default_config, Config};
use party_planner::gateway::HttpGateway;
use party_planner::model::{NewPartyForm, Party, PartyId};
use party_planner::planner::Planner;
use party_planner::telemetry;
use party_planner::view::{self, components::REMOVE_CONFIRM, text};

#[derive(Parser)]
#[command(name = "party-planner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse, create and remove parties")]
#[command(long_about = "Party Planner talks to a remote event service.\nList upcoming parties, see who is attending, add new parties and remove old ones.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all parties
    Parties,

    /// Show one party and its guests
    Show {
        /// Party id
        id: PartyId,
    },

    /// Create a party
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Date (YYYY-MM-DD), local time
        #[arg(long)]
        date: String,
        /// Time (HH:MM), local time
        #[arg(long)]
        time: String,
        #[arg(short, long)]
        location: String,
    },

    /// Remove a party
    Remove {
        /// Party id
        id: PartyId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Render the whole page
    Render {
        /// Print HTML instead of text
        #[arg(long)]
        html: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let config = Config::load_or_default(cli.config.as_deref())?;
    telemetry::init(&config.logging);

    let gateway = HttpGateway::new(&config.gateway)?;
    let planner = Planner::new(Arc::new(gateway));
    let json = cli.format == "json";

    match cli.command {
        Commands::Parties => {
            planner.refresh_parties().await?;
            let state = planner.state().await;

            if json {
                println!("{}", serde_json::to_string_pretty(&state.parties)?);
            } else {
                print_table(&state.parties);
            }
        }

        Commands::Show { id } => {
            planner.bootstrap().await?;
            planner.select_party(id).await?;
            let state = planner.state().await;

            if json {
                let body = serde_json::json!({
                    "party": state.selected,
                    "guests": state.selected_guests(),
                });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                print!("{}", text::render(&view::selected_party(&state)));
            }
        }

        Commands::Create {
            name,
            description,
            date,
            time,
            location,
        } => {
            let form = NewPartyForm {
                name,
                description,
                date,
                time,
                location,
            };
            let party = planner.submit_form(form).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&party)?);
            } else {
                println!("Created party #{}: {} on {}", party.id, party.name, party.calendar_date());
            }
        }

        Commands::Remove { id, yes } => {
            if !yes && !confirm(REMOVE_CONFIRM)? {
                println!("Cancelled");
                return Ok(());
            }

            planner.remove_party(id).await?;
            println!("Removed party #{}", id);
        }

        Commands::Render { html: as_html } => {
            // Partial loads still render, with the error banner
            if let Err(e) = planner.bootstrap().await {
                tracing::warn!("Initial load incomplete: {}", e);
            }

            if as_html {
                print!("{}", planner.html().await);
            } else {
                print!("{}", text::render(&planner.page().await));
            }
        }

        // Handled before loading config
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Config written to {:?}", path);
        }
        None => {
            print!("{}", config);
        }
    }

    Ok(())
}

/// Ask a yes/no question on the terminal; anything but `y` means no
fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer)? == 0 {
        bail!("no answer on stdin; pass --yes to skip the prompt");
    }

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn print_table(parties: &[Party]) {
    if parties.is_empty() {
        println!("No parties yet.");
        println!();
        println!("Create your first party with:");
        println!("  party-planner-cli create --name \"Launch\" --date 2025-10-19 --time 18:30 --location \"Rooftop\"");
        return;
    }

    println!("{:<6} {:<30} {:<12} {}", "ID", "Name", "Date", "Location");
    println!("{}", "-".repeat(72));

    for party in parties {
        println!(
            "{:<6} {:<30} {:<12} {}",
            party.id,
            truncate(&party.name, 30),
            party.calendar_date(),
            party.location
        );
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width - 1).collect();
        out.push('~');
        out
    }
}
