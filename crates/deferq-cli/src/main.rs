//! deferq CLI: list and run the query samples.

use clap::{Args, Parser, Subcommand};
use deferq_core::config::{ConfigOverrides, QueryConfig};
use deferq_data::Formula1;
use deferq_samples::Registry;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deferq")]
#[command(about = "Deferred-execution query samples over a Formula-1 dataset", long_about = None)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available samples
    List,

    /// Run one sample and print its output
    Run {
        /// Sample name, as shown by `list`
        sample: String,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Print the effective configuration as YAML
    ShowConfig {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Args, Debug, Default)]
struct ConfigArgs {
    /// YAML file with configuration overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Items per page (overrides config)
    #[arg(long)]
    page_size: Option<usize>,

    /// Minimum group size kept by grouping samples (overrides config)
    #[arg(long)]
    min_group_size: Option<usize>,

    /// Countries reported by aggregate-sum (overrides config)
    #[arg(long)]
    top_countries: Option<usize>,

    /// Minimum titles for aggregate-count (overrides config)
    #[arg(long)]
    min_titles: Option<usize>,
}

impl ConfigArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            page_size: self.page_size,
            min_group_size: self.min_group_size,
            top_countries: self.top_countries,
            min_titles: self.min_titles,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List => {
            list_samples();
            Ok(())
        }
        Commands::Run { sample, config } => run_sample(&sample, &config),
        Commands::ShowConfig { config } => show_config(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("deferq=warn"),
        1 => EnvFilter::new("deferq=debug,deferq_samples=debug,deferq_operators=debug"),
        _ => EnvFilter::new("deferq=trace,deferq_samples=trace,deferq_operators=trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn list_samples() {
    let registry = Registry::builtin();
    let width = registry.names().map(str::len).max().unwrap_or(0);
    for sample in registry.iter() {
        println!("{:<width$}  {}", sample.name, sample.description);
    }
}

fn run_sample(name: &str, args: &ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    let f1 = Formula1::shared()?;
    for line in Registry::builtin().run(name, f1, &config)? {
        println!("{}", line);
    }
    Ok(())
}

fn show_config(args: &ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}

/// Defaults < environment < YAML file < flags.
fn load_config(args: &ConfigArgs) -> Result<QueryConfig, Box<dyn std::error::Error>> {
    let yaml = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "reading config file");
            Some(fs::read_to_string(path)?)
        }
        None => None,
    };
    Ok(resolve_config(QueryConfig::from_env(), yaml.as_deref(), args)?)
}

fn resolve_config(
    base: QueryConfig,
    yaml: Option<&str>,
    args: &ConfigArgs,
) -> deferq_core::Result<QueryConfig> {
    let mut config = base;
    if let Some(src) = yaml {
        config.merge(&ConfigOverrides::from_yaml(src)?);
    }
    config.merge(&args.overrides());
    config.validate()?;
    Ok(config)
}
