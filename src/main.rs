//! InstaBiz CLI - AI-assisted Instagram business analysis
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use instabiz::controller::Tab;
use instabiz::report::{self, format_score, PriorityTreatment, TabView};
use instabiz::{
    export, logging, normalize_handle, ui, AnalysisDocument, Analyst, Config, GeminiAnalyst,
};
use std::fmt::{self, Write as _};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "instabiz")]
#[command(author, version, about = "TUI for AI-assisted Instagram business analysis", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Handle to analyse as soon as the TUI opens
    #[arg(long)]
    handle: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a handle and print the report
    Analyse {
        /// Instagram handle, with or without "@" (prompted when omitted)
        handle: Option<String>,
        /// Print the raw analysis document as JSON
        #[arg(long)]
        json: bool,
        /// Also write the Markdown report to the export directory
        #[arg(long)]
        export: bool,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "instabiz", &mut std::io::stdout());
        }
        Some(Commands::Analyse {
            handle,
            json,
            export: write_file,
        }) => {
            let config = load_config(cli.config.as_ref())?;
            logging::init(&config.log_path())?;

            let raw = match handle {
                Some(h) => h,
                None => dialoguer::Input::<String>::new()
                    .with_prompt("Instagram handle")
                    .interact_text()?,
            };
            let handle = normalize_handle(&raw);
            if handle.is_empty() {
                anyhow::bail!("handle must not be empty");
            }

            let analyst = GeminiAnalyst::from_config(&config)?;
            if !json {
                println!("Analysing @{}...\n", handle);
            }
            let document = match analyst.analyze(&handle).await {
                Ok(document) => document,
                Err(e) => {
                    tracing::error!(error = %e, "Analysis failed");
                    anyhow::bail!("analysis failed: insufficient public information for @{}", handle);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&document)?);
            } else {
                print!("{}", format_report(&document)?);
            }

            if write_file {
                let path = export::write_report(&document, &config.export.path)?;
                eprintln!("Report saved to {}", path.display());
            }
        }
        None => {
            let config = load_config(cli.config.as_ref())?;
            logging::init(&config.log_path())?;
            ui::run(config, cli.handle).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    Ok(match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    })
}

/// Plain-terminal rendering of every tab, used by `analyse`
fn format_report(document: &AnalysisDocument) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let card = report::score_card(document);
    writeln!(
        out,
        "=== {} (@{}) ===\n",
        document.basic_info.business_name.bold(),
        document.basic_info.handle
    )?;
    writeln!(
        out,
        "📈 Digital health score: {}/10",
        format_score(card.score).bold().green()
    )?;
    writeln!(out, "  \"{}\"\n", card.executive_summary.italic())?;

    for tab in Tab::ALL {
        writeln!(out, "{}", tab.label().to_uppercase().blue().bold())?;
        match report::tab_view(document, tab) {
            TabView::Info(info) => {
                writeln!(out, "  {} · {} · {}", info.business_name, info.category, info.location)?;
                writeln!(out, "  {}", info.bio)?;
                writeln!(out, "  Audience: {}", info.target_audience)?;
                writeln!(out, "  Value: \"{}\"", info.unique_value_prop)?;
                writeln!(out, "  Services: {}", info.services.join(", "))?;
            }
            TabView::Content(content) => {
                writeln!(
                    out,
                    "  Engagement {} · {} · consistency {}/10",
                    content.engagement_level,
                    content.post_frequency,
                    format_score(content.brand_consistency)
                )?;
                for ct in content.content_types {
                    let bar = "█".repeat(usize::from(report::bar_width(ct.percentage, 30)));
                    writeln!(
                        out,
                        "  {:<16}{} {}%",
                        ct.kind,
                        bar.blue(),
                        format_score(ct.percentage)
                    )?;
                }
                writeln!(out, "  Themes: {}", content.themes.join(", "))?;
            }
            TabView::Competitors(competitors) => {
                for card in &competitors.cards {
                    writeln!(out, "  • {}", card.name.bold())?;
                    writeln!(out, "    strengths: {}", card.strengths.join("; "))?;
                    writeln!(out, "    practices: {}", card.practices.join("; "))?;
                }
            }
            TabView::Diagnosis(diagnosis) => {
                for opp in &diagnosis.opportunities {
                    let tag = format!("[{}]", opp.priority);
                    let tag = match opp.treatment {
                        PriorityTreatment::High => tag.red(),
                        PriorityTreatment::Medium => tag.yellow(),
                        PriorityTreatment::Low => tag.green(),
                    };
                    writeln!(out, "  {} {}: {}", tag, opp.area.bold(), opp.advice)?;
                }
                for gap in diagnosis.gaps {
                    writeln!(out, "  {} {}", "✕".red(), gap)?;
                }
            }
            TabView::Proposal(proposal) => {
                writeln!(out, "  {}", proposal.introduction)?;
                for item in &proposal.solutions {
                    writeln!(out, "  {}: {}", item.title.bold(), item.body)?;
                }
                for (metric, improvement) in &proposal.benefits {
                    writeln!(out, "  {} {}", metric, format!("+{}", improvement).green())?;
                }
            }
        }
        writeln!(out)?;
    }

    let sidebar = report::sidebar(document);
    writeln!(out, "📞 {}  📧 {}  🔗 {}", sidebar.phone, sidebar.email, sidebar.main_link)?;
    for source in sidebar.sources {
        writeln!(out, "  • {} ({})", source.title, source.uri)?;
    }
    Ok(out)
}
