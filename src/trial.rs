use super::*;
use std::time::Duration;

/// Outcome of probing a container with the present and the absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hits {
    pub target: bool,
    pub non_target: bool,
}

impl Hits {
    /// The only correct outcome: the target is found and the non-target is not.
    pub const EXPECTED: Hits = Hits {
        target: true,
        non_target: false,
    };

    fn probe(contains: impl Fn(&u64) -> bool, target: u64, non_target: u64) -> Self {
        Self {
            target: contains(&target),
            non_target: contains(&non_target),
        }
    }
}

/// Measurements taken for a single input size.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    pub n: u64,
    pub vec_check: Duration,
    pub vec_create: Duration,
    pub set_check: Duration,
    pub set_create: Duration,
    pub frozen_check: Duration,
    pub frozen_create: Duration,
    pub vec_bytes: usize,
    pub set_bytes: usize,
    pub frozen_bytes: usize,
    pub vec_hits: Hits,
    pub set_hits: Hits,
    pub frozen_hits: Hits,
}

impl Trial {
    /// Runs all measurements for `n` elements, averaging each timing over
    /// `test_times` runs.
    pub fn run(n: u64, test_times: usize) -> Self {
        let data: Vec<u64> = (0..n).collect();
        let target = n / 2;
        let non_target = n + 1;

        let vec_check = time_mean(test_times, || {
            Hits::probe(|v| data.contains(v), target, non_target)
        });
        let vec_create = time_mean(test_times, || {
            let fresh: Vec<u64> = (0..n).collect();
            Hits::probe(|v| fresh.contains(v), target, non_target)
        });

        let set: FxHashSet<u64> = data.iter().copied().collect();
        let set_check = time_mean(test_times, || {
            Hits::probe(|v| set.contains(v), target, non_target)
        });
        let set_create = time_mean(test_times, || {
            let fresh: FxHashSet<u64> = data.iter().copied().collect();
            Hits::probe(|v| fresh.contains(v), target, non_target)
        });

        let frozen = FrozenSet::from(data.as_slice());
        let frozen_check = time_mean(test_times, || {
            Hits::probe(|v| frozen.contains(v), target, non_target)
        });
        let frozen_create = time_mean(test_times, || {
            let fresh = FrozenSet::from(data.as_slice());
            Hits::probe(|v| fresh.contains(v), target, non_target)
        });

        let trial = Self {
            n,
            vec_check: vec_check.mean,
            vec_create: vec_create.mean,
            set_check: set_check.mean,
            set_create: set_create.mean,
            frozen_check: frozen_check.mean,
            frozen_create: frozen_create.mean,
            vec_bytes: data.shallow_size(),
            set_bytes: set.shallow_size(),
            frozen_bytes: frozen.shallow_size(),
            vec_hits: vec_check.output,
            set_hits: set_check.output,
            frozen_hits: frozen_check.output,
        };

        if [vec_create.output, set_create.output, frozen_create.output]
            .iter()
            .any(|hits| *hits != Hits::EXPECTED)
        {
            log::warn!("Freshly built container for n={n} gave unexpected membership results");
        }

        trial
    }

    /// Returns `true` if every container found the target and missed the non-target.
    pub fn membership_ok(&self) -> bool {
        [self.vec_hits, self.set_hits, self.frozen_hits]
            .iter()
            .all(|hits| *hits == Hits::EXPECTED)
    }
}
