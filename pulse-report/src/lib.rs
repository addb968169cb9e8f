//! Text rendering of a [`ScenarioReport`] for terminals and spreadsheets.

use std::io::{self, Write};

use pulsespec::{DftResult, SampledSignal, ScenarioReport, SpectrumSignal};

/// Which stage's samples to dump as CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Continuous,
    Discrete,
    Analytic,
    Replicated,
    Dft,
}

/// Human-readable summary of every stage.
pub fn write_summary<W: Write>(out: &mut W, report: &ScenarioReport) -> io::Result<()> {
    writeln!(out, "== continuous-time pulse ==")?;
    summarize_signal(out, &report.continuous)?;
    writeln!(out, "== discrete-time pulse ==")?;
    summarize_signal(out, &report.discrete)?;
    writeln!(out, "== analytic transform ==")?;
    summarize_spectrum(out, &report.analytic)?;
    writeln!(out, "== replicated spectrum ==")?;
    summarize_spectrum(out, &report.replicated)?;
    writeln!(out, "== DFT ==")?;
    summarize_dft(out, &report.dft)
}

fn summarize_signal<W: Write>(out: &mut W, signal: &SampledSignal) -> io::Result<()> {
    writeln!(
        out,
        "points={} step={} on={} energy={:.6}",
        signal.len(),
        signal.step(),
        signal.nonzero_count(),
        signal.energy()
    )
}

fn summarize_spectrum<W: Write>(out: &mut W, spectrum: &SpectrumSignal) -> io::Result<()> {
    let (peak_f, peak_mag) = spectrum
        .iter()
        .map(|(f, v)| (f, v.norm()))
        .fold((0.0, f64::MIN), |best, cur| if cur.1 > best.1 { cur } else { best });
    writeln!(
        out,
        "bins={} step={} peak |X|={:.6} at f={:.4}",
        spectrum.len(),
        spectrum.step(),
        peak_mag,
        peak_f
    )
}

fn summarize_dft<W: Write>(out: &mut W, dft: &DftResult) -> io::Result<()> {
    let shifted = dft.shifted();
    let freqs = shifted.frequencies();
    let dc = dft.coefficients().first().map(|c| c.re).unwrap_or(0.0);
    writeln!(
        out,
        "bins={} range=[{:.4}, {:.4}] dc={:.6}",
        dft.len(),
        freqs.first().copied().unwrap_or(0.0),
        freqs.last().copied().unwrap_or(0.0),
        dc
    )
}

/// One CSV row per sample of `stage`. Complex stages get `re,im,mag,phase`.
pub fn write_csv<W: Write>(out: &mut W, report: &ScenarioReport, stage: Stage) -> io::Result<()> {
    match stage {
        Stage::Continuous | Stage::Discrete => {
            let signal = if stage == Stage::Continuous {
                &report.continuous
            } else {
                &report.discrete
            };
            writeln!(out, "t,x")?;
            for (t, x) in signal.iter() {
                writeln!(out, "{},{}", t, x)?;
            }
        }
        Stage::Analytic | Stage::Replicated => {
            let spectrum = if stage == Stage::Analytic {
                &report.analytic
            } else {
                &report.replicated
            };
            writeln!(out, "f,re,im,mag,phase")?;
            for (f, v) in spectrum.iter() {
                writeln!(out, "{},{},{},{},{}", f, v.re, v.im, v.norm(), v.arg())?;
            }
        }
        Stage::Dft => {
            writeln!(out, "f,re,im,mag,phase")?;
            for (f, c) in report.dft.shifted().iter() {
                writeln!(out, "{},{},{},{},{}", f, c.re, c.im, c.norm(), c.arg())?;
            }
        }
    }
    Ok(())
}
