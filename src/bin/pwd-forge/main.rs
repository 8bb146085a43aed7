//! `pwd-forge` command line entry point.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::error;

use pwd_forge::{GenerationPolicy, RandomSource, Settings};

mod actions;
mod menu;

/// pwd-forge: generate random passwords and check how strong they are.
#[derive(Parser, Debug)]
#[command(name = "pwd-forge", version, about, long_about = None)]
struct Cli {
    /// Number of parallel workers for batches
    #[arg(short, long, global = true)]
    workers: Option<usize>,

    /// Seed for reproducible generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Draw every random value from the operating system CSPRNG
    #[arg(long, global = true, conflicts_with = "seed")]
    secure: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Generate random passwords
    Generate(GenerateArgs),

    /// Check the strength of one password
    Check {
        /// Password to check
        password: String,
    },

    /// Check every password in a line-delimited file
    Batch {
        /// Input file (default: PWD_FORGE_BATCH_PATH or ./passwords.txt)
        path: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// How many passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Length of each password
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_upper: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lower: bool,

    /// Exclude digits
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    no_special: bool,
}

impl GenerateArgs {
    fn policy(&self, default_length: usize) -> GenerationPolicy {
        GenerationPolicy {
            length: self.length.unwrap_or(default_length),
            include_upper: !self.no_upper,
            include_lower: !self.no_lower,
            include_digits: !self.no_digits,
            include_special: !self.no_special,
        }
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("pwd_forge=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pwd_forge=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Environment settings with command line overrides applied.
fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let mut settings = Settings::from_env()?;
    if let Some(workers) = cli.workers {
        settings.workers = workers.max(1);
    }
    if cli.secure {
        settings.random_source = RandomSource::Secure;
    }
    if let Some(seed) = cli.seed {
        settings.random_source = RandomSource::Seeded(seed);
    }
    Ok(settings)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = load_settings(&cli)?;
    tracing::debug!("settings: {:?}", settings);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => menu::run_menu(&settings).await,
        Commands::Generate(args) => {
            let policy = args.policy(settings.default_length);
            if args.count == 1 {
                actions::generate_one(&settings, &policy)
            } else {
                actions::generate_list(&settings, policy, args.count).await
            }
        }
        Commands::Check { password } => {
            actions::check_one(password);
            Ok(())
        }
        Commands::Batch { path } => {
            let path = path.unwrap_or_else(|| settings.batch_path.clone());
            actions::check_file(&settings, &path).await
        }
    }
}
