use super::*;
use anyhow::bail;
use log::log_enabled;
use std::time::Instant;

/// Largest power whose probe value `10^p + 1` still fits in a `u64`.
pub const MAX_SUPPORTED_POWER: u32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Trials run for `n = 10^1 ..= 10^max_power`.
    pub max_power: u32,
    /// Number of runs each timing is averaged over.
    pub test_times: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_power: 7,
            test_times: 3,
        }
    }
}

impl BenchmarkConfig {
    pub fn new(max_power: u32) -> Self {
        Self {
            max_power,
            ..Default::default()
        }
    }

    pub fn with_test_times(self, test_times: usize) -> Self {
        Self { test_times, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_power == 0 {
            bail!("max_power must be at least 1");
        }
        if self.test_times == 0 {
            bail!("test_times must be at least 1");
        }
        if self.max_power > MAX_SUPPORTED_POWER {
            bail!(
                "max_power {} is too large, 10^{} overflows a 64 bit integer",
                self.max_power,
                self.max_power
            );
        }
        Ok(())
    }

    /// Input sizes in the order they are benchmarked.
    pub fn sizes(&self) -> impl Iterator<Item = u64> {
        (1..=self.max_power).map(|power| 10u64.pow(power))
    }
}

/// Runs one trial per configured size, smallest first.
pub fn run(config: &BenchmarkConfig) -> Result<Vec<Trial>> {
    config.validate()?;

    let mut results = Vec::with_capacity(config.max_power as usize);
    for n in config.sizes() {
        log::debug!("Benchmarking n={n} over {} runs", config.test_times);
        let instant = log_enabled!(log::Level::Debug).then(Instant::now);

        let trial = Trial::run(n, config.test_times);
        if !trial.membership_ok() {
            log::warn!("Unexpected membership results for n={n}: {trial:?}");
        }

        if let Some(instant) = instant {
            log::debug!("Trial for n={n} took {} ms", instant.elapsed().as_millis());
        }
        results.push(trial);
    }

    log::info!("Completed {} trials", results.len());
    Ok(results)
}
