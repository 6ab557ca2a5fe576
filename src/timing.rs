use std::hint::black_box;
use std::time::{Duration, Instant};

/// Mean wall-clock time of a repeated operation plus the result of its last run.
#[derive(Debug, Clone, Copy)]
pub struct Timed<R> {
    pub mean: Duration,
    pub output: R,
}

/// Runs `op` `times` times, timing each run on its own.
///
/// Only the body of `op` is inside the measured window. The output of every
/// run goes through `black_box` so the work cannot be optimized away.
pub fn time_mean<R>(times: usize, mut op: impl FnMut() -> R) -> Timed<R> {
    assert!(times > 0, "cannot average over zero runs");

    let mut run = || {
        let instant = Instant::now();
        let result = black_box(op());
        (instant.elapsed(), result)
    };

    let mut samples = Vec::with_capacity(times);
    let (elapsed, mut output) = run();
    samples.push(elapsed);
    for _ in 1..times {
        let (elapsed, result) = run();
        samples.push(elapsed);
        output = result;
    }

    Timed {
        mean: mean(&samples),
        output,
    }
}

/// Arithmetic mean of the samples, zero if there are none.
pub fn mean(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = samples.iter().sum();
    total / samples.len() as u32
}
