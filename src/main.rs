use anyhow::Context;
use popu_ranking::{RankingConfig, run};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RankingConfig::default();
    run(&config).with_context(|| {
        format!(
            "Failed to rank {} into {}",
            config.source_path.display(),
            config.output_path.display()
        )
    })?;

    Ok(())
}
