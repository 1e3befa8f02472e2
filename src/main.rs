use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use toruslife::driver::{self, PrintFormat};
use toruslife::settings::Settings;
use toruslife::LifeConfig;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "toruslife")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Conway's Game of Life on a toroidal grid with oscillation detection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the simulation in the terminal until the population dies out
    Run {
        #[command(flatten)]
        sim: SimArgs,

        /// Seconds per generation
        #[arg(short, long)]
        time: Option<f32>,

        /// Character used for live cells
        #[arg(short, long)]
        char: Option<char>,
    },

    /// Print every generation to stdout without terminal control
    Print {
        #[command(flatten)]
        sim: SimArgs,

        /// Stop after this many generations even if cells are still alive
        #[arg(short, long)]
        generations: Option<u64>,

        /// Emit one JSON object per generation instead of text frames
        #[arg(long)]
        json: bool,

        /// Character used for live cells
        #[arg(short, long)]
        char: Option<char>,
    },
}

#[derive(Args)]
struct SimArgs {
    /// Grid width in cells
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Number of past generations kept for oscillation detection
    #[arg(short = 'k', long)]
    history: Option<usize>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Probability that a cell starts alive (0.0-1.0)
    #[arg(short, long)]
    density: Option<f64>,

    /// Plaintext pattern file to start from instead of random cells
    #[arg(short, long)]
    pattern: Option<PathBuf>,
}

impl SimArgs {
    fn apply(self, config: &mut LifeConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(depth) = self.history {
            config.history_depth = depth;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        config.seed = self.seed.or(config.seed);
        config.pattern = self.pattern.or(config.pattern.take());
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = LifeConfig::default();
    match Settings::load() {
        Ok(settings) => settings.apply(&mut config),
        Err(err) => warn!(error = %err, "Ignoring settings file"),
    }

    match cli.command {
        Commands::Run {
            sim,
            time,
            char: draw_char,
        } => {
            sim.apply(&mut config);
            if let Some(time) = time {
                config.time_step = time;
            }
            if let Some(ch) = draw_char {
                config.draw_char = ch;
            }
            let snapshot = driver::run_interactive(&config).context("interactive run failed")?;
            info!(generation = snapshot.generation, alive = snapshot.stats.alive, "Run finished");
        }
        Commands::Print {
            sim,
            generations,
            json,
            char: draw_char,
        } => {
            sim.apply(&mut config);
            config.max_generations = generations;
            if let Some(ch) = draw_char {
                config.draw_char = ch;
            }
            let format = if json { PrintFormat::Json } else { PrintFormat::Text };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            driver::run_print(&config, format, &mut out).context("print run failed")?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}
