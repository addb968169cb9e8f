use clap::{Parser, ValueEnum};
use pulse_report::{write_csv, write_summary, Stage};
use pulsespec::PulseScenario;
use std::error::Error;
use std::io::{self, BufWriter, Write};

/// Stage to print as CSV instead of the summary.
#[derive(ValueEnum, Clone, Copy)]
enum CsvStage {
    Continuous,
    Discrete,
    Analytic,
    Replicated,
    Dft,
}

impl From<CsvStage> for Stage {
    fn from(s: CsvStage) -> Self {
        match s {
            CsvStage::Continuous => Stage::Continuous,
            CsvStage::Discrete => Stage::Discrete,
            CsvStage::Analytic => Stage::Analytic,
            CsvStage::Replicated => Stage::Replicated,
            CsvStage::Dft => Stage::Dft,
        }
    }
}

/// Compute the time and frequency views of a rectangular pulse.
///
/// Unset options fall back to `PULSESPEC_*` environment variables, then to
/// the built-in defaults.
#[derive(Parser)]
struct Args {
    /// Pulse duration T_p in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Start of the time interval
    #[arg(long, allow_negative_numbers = true)]
    time_start: Option<f64>,

    /// End of the time interval (exclusive)
    #[arg(long, allow_negative_numbers = true)]
    time_end: Option<f64>,

    /// Step of the fine grid standing in for continuous time
    #[arg(long)]
    continuous_step: Option<f64>,

    /// Sampling period T_s of the discrete-time signal
    #[arg(long)]
    sampling_period: Option<f64>,

    /// Start of the frequency window
    #[arg(long, allow_negative_numbers = true)]
    freq_start: Option<f64>,

    /// End of the frequency window (exclusive)
    #[arg(long, allow_negative_numbers = true)]
    freq_end: Option<f64>,

    /// Frequency grid step
    #[arg(long)]
    freq_step: Option<f64>,

    /// Replicas summed on each side of the baseband spectrum
    #[arg(long)]
    replicas: Option<usize>,

    /// Print one stage as CSV
    #[arg(long, value_enum)]
    csv: Option<CsvStage>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut scenario = PulseScenario::from_env()?;
    if let Some(v) = args.duration {
        scenario.duration = v;
    }
    if let Some(v) = args.time_start {
        scenario.time_start = v;
    }
    if let Some(v) = args.time_end {
        scenario.time_end = v;
    }
    if let Some(v) = args.continuous_step {
        scenario.continuous_step = v;
    }
    if let Some(v) = args.sampling_period {
        scenario.sampling_period = v;
    }
    if let Some(v) = args.freq_start {
        scenario.freq_start = v;
    }
    if let Some(v) = args.freq_end {
        scenario.freq_end = v;
    }
    if let Some(v) = args.freq_step {
        scenario.freq_step = v;
    }
    if let Some(v) = args.replicas {
        scenario.replicas = v;
    }
    log::info!("running scenario {:?}", scenario);

    let report = scenario.run()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.csv {
        Some(stage) => write_csv(&mut out, &report, stage.into())?,
        None => write_summary(&mut out, &report)?,
    }
    out.flush()?;
    Ok(())
}
