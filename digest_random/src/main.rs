use anyhow::Context;
use digest_random::distribution_mapper::flatten_coordinates;
use digest_random::uniformity_validator::run_uniformity_trials;
use digest_random::{
    generate_beta_like, generate_uniform, test_uniformity, DigestGenerator, RunConfig,
    SampleSummary,
};

/// Reads the optional TOML config path from the first CLI argument.
///
/// # Returns
/// - Defaults when no argument is given
/// - Parsed and validated config otherwise
fn load_config() -> anyhow::Result<RunConfig> {
    match std::env::args().nth(1) {
        Some(path) => RunConfig::load(path),
        None => Ok(RunConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = load_config()?;
    log::debug!("run config: {:?}", config);

    let mut rng =
        DigestGenerator::from_os_entropy().context("could not seed generator from OS entropy")?;

    let uniform = generate_uniform(&mut rng, config.sample_size)?;
    let uniform_summary =
        SampleSummary::from_values(&flatten_coordinates(&uniform), config.summary_bins)?;

    let beta = generate_beta_like(&mut rng, config.beta_points)?;
    let beta_summary =
        SampleSummary::from_values(&flatten_coordinates(&beta), config.summary_bins)?;

    let sample = rng.raw_sample(config.sample_size)?;
    let report = test_uniformity(&sample, config.bucket_count)?;

    let trials = run_uniformity_trials(
        &mut rng,
        config.trials,
        config.sample_size,
        config.bucket_count,
        config.alpha,
    )?;

    println!("uniform   ({} points): {}", uniform.len(), uniform_summary);
    println!("beta-like ({} points): {}", beta.len(), beta_summary);
    println!(
        "chi-square: statistic={:.4} df={} p={:.4} -> {}",
        report.chi2_statistic,
        report.degrees_of_freedom,
        report.p_value,
        report.verdict(config.alpha)
    );
    println!(
        "repeated trials: {}/{} good ({:.0}%) at alpha={}",
        trials.good,
        trials.trials,
        trials.pass_rate() * 100.0,
        config.alpha
    );

    Ok(())
}
