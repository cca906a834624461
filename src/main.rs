use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// healthia - weekly meal plan viewer
#[derive(Parser)]
#[command(name = "healthia")]
#[command(about = "Serve a weekly meal plan as clickable day cards", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,

        /// Weekly meal plan JSON file (overrides config file)
        #[arg(long)]
        plan: Option<String>,
    },
    /// Print the HTML of a single day card
    Render {
        /// JSON file with `day` and `meals`
        #[arg(long)]
        input: String,

        /// Language of the surrounding labels (defaults to config)
        #[arg(long)]
        lang: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = healthia::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    healthia::observability::init_observability(
        "healthia",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port, plan } => cli::serve(config, host, port, plan).await,
        Commands::Render { input, lang } => {
            let lang = lang.unwrap_or(config.i18n.default_language);
            cli::render(&input, &lang)
        }
    }
}
