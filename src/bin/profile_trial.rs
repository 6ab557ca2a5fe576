use list_vs_set::*;

fn main() {
    env_logger::init();

    // A single large trial, repeated enough to get a good profile
    let trial = Trial::run(10_000_000, 10);
    log::info!(
        "n={} vec={:?} set={:?} frozen={:?}",
        trial.n,
        trial.vec_check,
        trial.set_check,
        trial.frozen_check
    );
    assert!(trial.membership_ok());
}
