use clap::Parser;
use list_vs_set::*;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Benchmark sizes 10^1 up to 10^max_power. Lower it if the process gets killed.
    #[clap(long, default_value_t = 8)]
    max_power: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = BenchmarkConfig::new(args.max_power);

    let trials = run(&config).context("Benchmark failed")?;
    print!("{}", Report::new(&trials));

    Ok(())
}
