use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use curriculum_advisor::advisor::{run_analysis, AnalysisResult, LoadLimits};
use curriculum_advisor::catalog::{Catalog, CourseCategory};
use curriculum_advisor::config::{Config, ConfigOverrides};
use curriculum_advisor::output::csv::{catalog_to_csv, progress_to_csv, suggestions_to_csv};
use curriculum_advisor::output::json::render_json;
use curriculum_advisor::output::table::{
    render_catalog_table, render_equivalency_table, render_history_table, render_progress_table,
    render_suggestions_table,
};
use curriculum_advisor::progress::ProgressSummary;
use curriculum_advisor::server::run_server;
use curriculum_advisor::transcript::{load_transcript, StudentIdentity};
use tracing::warn;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "curriculum-advisor",
    about = "Curriculum transition intelligence for extracted transcripts"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    /// Catalog JSON file overriding the built-in transition plan.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[command(flatten)]
    load: LoadArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct LoadArgs {
    #[arg(long = "full-load-credits")]
    full_load_credits: Option<u32>,
    #[arg(long = "subsidy-credits")]
    subsidy_credits: Option<u32>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Full analysis: progress, suggested load and subsidy bundle.
    Analyze {
        /// Extractor output file; repeat for a batch of transcripts.
        #[arg(long = "history", required = true)]
        histories: Vec<PathBuf>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        id: Option<String>,
    },
    /// Only the two suggestion bundles.
    Suggest {
        #[arg(long)]
        history: PathBuf,
    },
    /// Only the credit progress summary.
    Progress {
        #[arg(long)]
        history: PathBuf,
    },
    /// Show the active catalog.
    Catalog {
        /// Show the legacy-code equivalency table instead.
        #[arg(long)]
        equivalencies: bool,
        /// Restrict to one category, e.g. MANDATORY or ELECTIVE_A.
        #[arg(long)]
        category: Option<String>,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 3002)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        catalog_path: cli.catalog.clone(),
        full_load_credits: cli.load.full_load_credits,
        subsidy_credits: cli.load.subsidy_credits,
    });

    if matches!(cli.command, Commands::Config { .. }) {
        return handle_config_command(&cli.command, &config, &config_path);
    }

    let catalog = Catalog::load(config.resolved_catalog_path().as_deref())?;

    if let Commands::Serve { host, port } = &cli.command {
        let bind = format!("{host}:{port}");
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| anyhow!("invalid bind address {bind}: {e}"))?;
        return run_server(config, catalog, addr).await;
    }

    let limits = LoadLimits {
        full_load_credits: config.load.full_load_credits,
        subsidy_credits: config.load.subsidy_credits,
    };

    match &cli.command {
        Commands::Analyze {
            histories,
            name,
            id,
        } => {
            for path in histories {
                let transcript = load_transcript(path)?;
                let identity = override_identity(transcript.identity(), name, id);
                let result = run_analysis(&catalog, &identity, &transcript.courses, limits);
                print_analysis(&result, limits, cli.output)?;
            }
        }
        Commands::Suggest { history } => {
            let transcript = load_transcript(history)?;
            let identity = transcript.identity();
            let result = run_analysis(&catalog, &identity, &transcript.courses, limits);
            print_suggestions(&result, limits, cli.output)?;
        }
        Commands::Progress { history } => {
            let transcript = load_transcript(history)?;
            let identity = transcript.identity();
            let result = run_analysis(&catalog, &identity, &transcript.courses, limits);
            print_progress(&result.progress, cli.output)?;
        }
        Commands::Catalog {
            equivalencies,
            category,
        } => {
            let scoped = match category {
                Some(raw) => {
                    let category = CourseCategory::from_str(raw)?;
                    let mut scoped = catalog.clone();
                    scoped.courses.retain(|course| course.category == category);
                    scoped
                }
                None => catalog,
            };
            print_catalog(&scoped, *equivalencies, cli.output)?;
        }
        Commands::Config { .. } => {}
        Commands::Serve { .. } => unreachable!("serve command handled before dispatch"),
    }

    Ok(())
}

fn handle_config_command(command: &Commands, config: &Config, config_path: &PathBuf) -> Result<()> {
    let Commands::Config { init, show } = command else {
        return Ok(());
    };
    if *init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if *show || !*init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn override_identity(
    mut identity: StudentIdentity,
    name: &Option<String>,
    id: &Option<String>,
) -> StudentIdentity {
    if let Some(name) = name {
        identity.name = name.clone();
    }
    if let Some(id) = id {
        identity.id = id.clone();
    }
    identity
}

fn print_analysis(result: &AnalysisResult, limits: LoadLimits, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("Progress for {}", result.progress.student_name);
            println!("{}", render_progress_table(&result.progress));
            println!("Extracted history");
            println!("{}", render_history_table(&result.progress.history));
            println!(
                "Suggested load (max {} credits)",
                limits.full_load_credits
            );
            println!("{}", render_suggestions_table(&result.suggestions));
            println!("Subsidy bundle (max {} credits)", limits.subsidy_credits);
            println!("{}", render_suggestions_table(&result.subsidy_bundle));
        }
        OutputFormat::Json => println!("{}", render_json(result)?),
        OutputFormat::Csv => {
            warn!("CSV output for analyze not implemented, using JSON");
            println!("{}", render_json(result)?);
        }
    }
    Ok(())
}

fn print_suggestions(
    result: &AnalysisResult,
    limits: LoadLimits,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!(
                "Suggested load (max {} credits)",
                limits.full_load_credits
            );
            println!("{}", render_suggestions_table(&result.suggestions));
            println!("Subsidy bundle (max {} credits)", limits.subsidy_credits);
            println!("{}", render_suggestions_table(&result.subsidy_bundle));
        }
        OutputFormat::Json => {
            let bundles = serde_json::json!({
                "suggestions": result.suggestions,
                "subsidy_bundle": result.subsidy_bundle,
            });
            println!("{}", render_json(&bundles)?);
        }
        OutputFormat::Csv => println!("{}", suggestions_to_csv(&result.suggestions)?),
    }
    Ok(())
}

fn print_progress(progress: &ProgressSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_progress_table(progress)),
        OutputFormat::Json => println!("{}", render_json(progress)?),
        OutputFormat::Csv => println!("{}", progress_to_csv(progress)?),
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog, equivalencies: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if equivalencies {
                println!("{}", render_equivalency_table(catalog));
            } else {
                println!("{}", render_catalog_table(catalog));
            }
        }
        OutputFormat::Json => println!("{}", render_json(catalog)?),
        OutputFormat::Csv => {
            if equivalencies {
                warn!("CSV output for equivalencies not implemented, using JSON");
                println!("{}", render_json(&catalog.equivalencies)?);
            } else {
                println!("{}", catalog_to_csv(catalog)?);
            }
        }
    }
    Ok(())
}
