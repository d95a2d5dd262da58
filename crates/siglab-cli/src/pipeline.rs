use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use siglab::{
    convolve, convolve_histograms, formula_signal, noise_signal, sum, Histogram, SignalBuffer,
    SignalError,
};

use crate::config::LabConfig;

/// Pipeline stages selectable for histogram and entropy inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Signal,
    Noise,
    Sum,
    Convolution,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Signal, Stage::Noise, Stage::Sum, Stage::Convolution];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Signal => "signal",
            Stage::Noise => "noise",
            Stage::Sum => "sum",
            Stage::Convolution => "convolution",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "signal" => Ok(Stage::Signal),
            "noise" => Ok(Stage::Noise),
            "sum" => Ok(Stage::Sum),
            "convolution" => Ok(Stage::Convolution),
            other => Err(format!(
                "unknown stage '{}', expected signal, noise, sum, or convolution",
                other
            )),
        }
    }
}

/// One fully computed pipeline pass, each stage bound by name.
#[derive(Debug, Clone)]
pub struct LabRun {
    pub signal: SignalBuffer,
    pub noise: SignalBuffer,
    pub sum: SignalBuffer,
    pub convolution: SignalBuffer,
}

impl LabRun {
    pub fn stage(&self, stage: Stage) -> &SignalBuffer {
        match stage {
            Stage::Signal => &self.signal,
            Stage::Noise => &self.noise,
            Stage::Sum => &self.sum,
            Stage::Convolution => &self.convolution,
        }
    }

    /// Histogram of a stage, recomputed on demand.
    ///
    /// The Convolution stage reports the convolution of the signal and noise
    /// histograms (the distribution of the sum of the two variables), not a
    /// histogram of the convolved samples.
    pub fn histogram(&self, stage: Stage, bins: usize) -> Result<Histogram, SignalError> {
        match stage {
            Stage::Convolution => convolve_histograms(&self.signal, &self.noise, bins),
            _ => Histogram::from_buffer(self.stage(stage), bins),
        }
    }
}

/// Runs the whole pipeline once: waveform, noise, their elementwise sum, and
/// their linear convolution. A fixed seed reproduces the run exactly.
pub fn run(config: &LabConfig) -> anyhow::Result<LabRun> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let signal = formula_signal(&config.formula_params())?;
    let noise = noise_signal(&config.noise_params(), &mut rng)?;
    let sum = sum(&[&signal, &noise])?;
    let convolution = convolve(&signal, &noise)?;

    Ok(LabRun {
        signal,
        noise,
        sum,
        convolution,
    })
}
