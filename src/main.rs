//! Command line front end for statkit.
//!
//! # Usage
//!
//! ```bash
//! # Summary statistics of a whitespace/comma separated file
//! statkit describe data.txt
//!
//! # Drop IQR outliers and print the remaining observations
//! statkit outliers data.txt --step 3
//!
//! # Right-tailed z-test against µ₀ = 10 with the narrative report
//! statkit ztest data.txt --mean 10 --direction right-tailed --report
//!
//! # Pearson correlation of two equally sized samples, read from stdin and a file
//! cat x.txt | statkit correlate - y.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;

use statkit::config::{loader, StatkitConfig};
use statkit::io::read_sample;
use statkit::{describe, z_test_summary, DescriptiveStatistics, Result, ZTestReport};

/// Descriptive statistics and one-sample z-tests
#[derive(Parser, Debug)]
#[command(name = "statkit")]
#[command(version)]
struct Args {
    /// Configuration file (YAML or TOML); auto-discovered when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summary statistics of a sample
    Describe {
        /// Input file, or `-` for stdin
        input: PathBuf,
    },

    /// Remove IQR outliers and print the remaining observations
    Outliers {
        input: PathBuf,

        /// IQR multiplier for the outlier fences (default from config)
        #[arg(long)]
        step: Option<f64>,
    },

    /// One-sample z-test of the sample mean
    Ztest {
        input: PathBuf,

        /// Hypothesized population mean µ₀
        #[arg(long, allow_hyphen_values = true)]
        mean: f64,

        /// Known population standard deviation (defaults to the sample's)
        #[arg(long)]
        sigma: Option<f64>,

        /// Significance level α (default from config)
        #[arg(long)]
        alpha: Option<f64>,

        /// two-tailed, left-tailed or right-tailed (default from config)
        #[arg(long)]
        direction: Option<String>,

        /// Print the narrative report
        #[arg(long)]
        report: bool,
    },

    /// Covariance and Pearson correlation of two samples
    Correlate { x: PathBuf, y: PathBuf },
}

fn load_config(path: Option<&PathBuf>) -> Result<StatkitConfig> {
    match path {
        Some(path) => StatkitConfig::load_with_precedence(Some(path)),
        None => loader::auto_load(),
    }
}

fn init_logging(config: &StatkitConfig) {
    let level = if config.logging.console {
        config.logging.level.as_str()
    } else {
        "off"
    };

    // RUST_LOG still overrides the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: Args, config: StatkitConfig) -> Result<()> {
    match args.command {
        Command::Describe { input } => {
            let sample = read_sample(&input)?;
            debug!("Read {} observations from {}", sample.len(), input.display());
            let summary = describe(&sample)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("count     {}", summary.count);
                println!("sum       {}", summary.sum);
                println!("mean      {}", summary.mean);
                println!("median    {}", summary.median);
                println!("min       {}", summary.min);
                println!("max       {}", summary.max);
                println!("range     {}", summary.range);
                println!("variance  {}", summary.variance);
                println!("std dev   {}", summary.std_dev);
                println!("Q1        {}", summary.q1);
                println!("Q3        {}", summary.q3);
                println!("IQR       {}", summary.iqr);
                match sample.mode() {
                    Ok(mode) => println!("mode      {:?}", mode.values()),
                    Err(e) => println!("mode      ({})", e),
                }
            }
        }

        Command::Outliers { input, step } => {
            let mut sample = read_sample(&input)?;
            let step = step.unwrap_or(config.outliers.step);
            let removed = sample.remove_outliers_iqr(step)?;

            if args.json {
                let out = serde_json::json!({
                    "removed": removed,
                    "remaining": sample.values(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", sample);
            }
        }

        Command::Ztest {
            input,
            mean,
            sigma,
            alpha,
            direction,
            report,
        } => {
            let sample = read_sample(&input)?;

            let mut test_config = config.hypothesis.to_z_test_config()?;
            if let Some(direction) = direction {
                test_config.direction = direction.parse()?;
            }
            if let Some(alpha) = alpha {
                test_config.significance_level = alpha;
            }
            test_config.population_std_dev = sigma;

            let summary = z_test_summary(&sample, mean, &test_config)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else if report || test_config.report {
                println!("{}", ZTestReport::new(&summary));
            } else {
                println!("z-value                   {}", summary.result.statistic);
                println!("p-value                   {}", summary.result.p_value);
                println!("null hypothesis rejected  {}", summary.result.rejected);
            }
        }

        Command::Correlate { x, y } => {
            let x = read_sample(&x)?;
            let y = read_sample(&y)?;
            let covariance = x.covariance(&y)?;
            let correlation = x.pearson_correlation(&y)?;

            if args.json {
                let out = serde_json::json!({
                    "covariance": covariance,
                    "pearson_correlation": correlation,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("covariance           {}", covariance);
                println!("pearson correlation  {}", correlation);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("statkit: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("statkit: {}", e);
            ExitCode::FAILURE
        }
    }
}
