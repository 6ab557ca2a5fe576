use super::*;
use itertools::Itertools;
use std::fmt::Display;

const SEPARATOR_WIDTH: usize = 150;
const BYTES_PER_MB: f64 = 1_000_000.0;

/// Column label and width, in table order.
const COLUMNS: [(&str, usize); 10] = [
    ("N", 10),
    ("Vec (s)", 10),
    ("Vec+Create (s)", 15),
    ("Set only (s)", 12),
    ("Set+Create (s)", 15),
    ("Frozen only (s)", 15),
    ("Frozen+Create (s)", 18),
    ("Vec (MB)", 10),
    ("Set (MB)", 10),
    ("Frozen (MB)", 10),
];

pub const FOOTNOTE: &str = "Note: memory sizes measured using shallow_size (shallow)";

/// Fixed-width table over a set of trials.
pub struct Report<'a> {
    trials: &'a [Trial],
}

impl<'a> Report<'a> {
    pub fn new(trials: &'a [Trial]) -> Self {
        Self { trials }
    }

    pub fn header() -> String {
        COLUMNS
            .iter()
            .map(|&(label, width)| format!("{label:>width$}"))
            .join(" | ")
    }

    pub fn row(trial: &Trial) -> String {
        let [_, w1, w2, w3, w4, w5, w6, w7, w8, w9] = COLUMNS.map(|(_, width)| width);
        let timings = [
            (trial.vec_check, w1),
            (trial.vec_create, w2),
            (trial.set_check, w3),
            (trial.set_create, w4),
            (trial.frozen_check, w5),
            (trial.frozen_create, w6),
        ]
        .into_iter()
        .map(|(time, width)| format!("{:>width$.9}", time.as_secs_f64()));
        let sizes = [
            (trial.vec_bytes, w7),
            (trial.set_bytes, w8),
            (trial.frozen_bytes, w9),
        ]
        .into_iter()
        .map(|(bytes, width)| format!("{:>width$.3}", bytes as f64 / BYTES_PER_MB));

        std::iter::once(format!("{:>10}", trial.n))
            .chain(timings)
            .chain(sizes)
            .join(" | ")
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", Self::header())?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        for trial in self.trials {
            writeln!(f, "{}", Self::row(trial))?;
        }
        writeln!(f)?;
        writeln!(f, "{FOOTNOTE}")
    }
}
