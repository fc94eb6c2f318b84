//! ExprStat CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use es_core::Support;
use es_prob::KineticParams;
use es_viz::{BurstyExpression, EnzymeSweep, NarrowExpression, StyleConfig, SwitchingExpression};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exprstat")]
#[command(about = "ExprStat - product-count distributions for enzyme expression models")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a PMF and print it as JSON
    Pmf {
        #[command(subcommand)]
        command: PmfCommands,
    },

    /// Scenario artifacts (plot-friendly JSON)
    Viz {
        /// Style overrides (YAML). Defaults to the whitegrid preset.
        #[arg(long, global = true)]
        style: Option<PathBuf>,

        #[command(subcommand)]
        command: VizCommands,
    },

    /// Print version information
    Version,
}

#[derive(Subcommand)]
enum PmfCommands {
    /// Poisson(mu)
    Poisson {
        #[arg(long)]
        mu: f64,

        /// Counts are evaluated over [0, support-end)
        #[arg(long, default_value = "80")]
        support_end: u64,
    },

    /// Negative Binomial(mu, r), mean/dispersion form
    Negbin {
        #[arg(long)]
        mu: f64,

        /// Dispersion (smaller is burstier)
        #[arg(long)]
        r: f64,

        #[arg(long, default_value = "100")]
        support_end: u64,
    },

    /// Poisson mixture; repeat --mean/--weight once per component
    Mixture {
        #[arg(long = "mean", required = true)]
        means: Vec<f64>,

        /// Must sum to 1; never renormalized
        #[arg(long = "weight", required = true)]
        weights: Vec<f64>,

        #[arg(long, default_value = "80")]
        support_end: u64,
    },

    /// P(n_p) across an inclusive sweep of total enzyme concentration
    Kinetic {
        #[command(flatten)]
        kinetics: KineticArgs,

        #[command(flatten)]
        sweep: SweepArgs,
    },
}

#[derive(Subcommand)]
enum VizCommands {
    /// Poisson curves for several means
    Narrow {
        #[arg(long = "mu", default_values_t = [10.0, 20.0, 40.0])]
        means: Vec<f64>,

        #[arg(long, default_value = "80")]
        support_end: u64,
    },

    /// Negative Binomial at fixed mean, several dispersions
    Bursty {
        #[arg(long, default_value = "20")]
        mu: f64,

        #[arg(long = "r", default_values_t = [1.0, 5.0, 20.0])]
        dispersions: Vec<f64>,

        #[arg(long, default_value = "100")]
        support_end: u64,
    },

    /// Two-state ON/OFF Poisson mixtures
    Switching {
        #[arg(long, default_value = "2")]
        mu_off: f64,

        #[arg(long, default_value = "30")]
        mu_on: f64,

        #[arg(long = "p-on", default_values_t = [0.2, 0.5, 0.8])]
        p_on_values: Vec<f64>,

        #[arg(long, default_value = "80")]
        support_end: u64,
    },

    /// P(n_p) versus total enzyme concentration
    Sweep {
        #[command(flatten)]
        kinetics: KineticArgs,

        #[command(flatten)]
        sweep: SweepArgs,
    },
}

#[derive(clap::Args)]
struct KineticArgs {
    /// Catalytic rate constant (s^-1)
    #[arg(long, default_value = "100")]
    k_cat: f64,

    /// Substrate concentration (M)
    #[arg(long, default_value = "1e-4")]
    substrate: f64,

    /// Product degradation/dilution rate (s^-1)
    #[arg(long, default_value = "0.1")]
    delta_p: f64,

    /// Michaelis constant (M)
    #[arg(long, default_value = "5e-5")]
    k_m: f64,
}

impl KineticArgs {
    fn params(&self) -> KineticParams {
        KineticParams {
            k_cat: self.k_cat,
            substrate: self.substrate,
            delta_p: self.delta_p,
            k_m: self.k_m,
        }
    }
}

#[derive(clap::Args)]
struct SweepArgs {
    /// Sweep start, total enzyme (M)
    #[arg(long, default_value = "0.0")]
    start: f64,

    /// Sweep stop, total enzyme (M), inclusive
    #[arg(long, default_value = "1e-7")]
    stop: f64,

    /// Number of points (inclusive)
    #[arg(long, default_value = "500")]
    points: usize,

    /// Product count whose probability is tracked
    #[arg(long, default_value = "5")]
    n_p: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Pmf { command } => cmd_pmf(command),
        Commands::Viz { style, command } => cmd_viz(style.as_ref(), command),
        Commands::Version => {
            println!("exprstat {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn write_json(value: serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn cmd_pmf(command: PmfCommands) -> Result<()> {
    let (x, p) = match command {
        PmfCommands::Poisson { mu, support_end } => {
            let support = Support::range(0, support_end);
            (support.as_f64(), es_prob::poisson_pmf(support.counts(), mu)?)
        }
        PmfCommands::Negbin { mu, r, support_end } => {
            let support = Support::range(0, support_end);
            (support.as_f64(), es_prob::negative_binomial_pmf(support.counts(), mu, r)?)
        }
        PmfCommands::Mixture { means, weights, support_end } => {
            let support = Support::range(0, support_end);
            (support.as_f64(), es_prob::poisson_mixture_pmf(support.counts(), &means, &weights)?)
        }
        PmfCommands::Kinetic { kinetics, sweep } => {
            let k = kinetics.params();
            let n_e_tot = es_prob::math::linspace(sweep.start, sweep.stop, sweep.points)?;
            let p = es_prob::kinetic_pmf_sweep(
                &n_e_tot,
                k.k_cat,
                k.substrate,
                k.delta_p,
                k.k_m,
                sweep.n_p,
            )?;
            (n_e_tot, p)
        }
    };

    let total: f64 = p.iter().sum();
    tracing::info!(points = p.len(), total, "pmf evaluated");
    write_json(serde_json::json!({ "x": x, "p": p, "total": total }))
}

fn load_style(path: Option<&PathBuf>) -> Result<StyleConfig> {
    let yaml = match path {
        Some(p) => Some(std::fs::read_to_string(p)?),
        None => None,
    };
    Ok(es_viz::resolve_style(yaml.as_deref())?)
}

fn cmd_viz(style: Option<&PathBuf>, command: VizCommands) -> Result<()> {
    let style = load_style(style)?;
    tracing::debug!(theme = %style.theme, "style resolved");

    let artifact = match command {
        VizCommands::Narrow { means, support_end } => {
            NarrowExpression { support_end, means }.artifact(&style)?
        }
        VizCommands::Bursty { mu, dispersions, support_end } => {
            BurstyExpression { support_end, mu, dispersions }.artifact(&style)?
        }
        VizCommands::Switching { mu_off, mu_on, p_on_values, support_end } => {
            SwitchingExpression { support_end, mu_off, mu_on, p_on_values }.artifact(&style)?
        }
        VizCommands::Sweep { kinetics, sweep } => {
            EnzymeSweep {
                kinetics: kinetics.params(),
                start: sweep.start,
                stop: sweep.stop,
                points: sweep.points,
                n_p: sweep.n_p,
            }
            .artifact(&style)?
        }
    };

    tracing::info!(scenario = %artifact.scenario, series = artifact.series.len(), "artifact built");
    write_json(serde_json::to_value(artifact)?)
}
