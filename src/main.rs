use anyhow::Result;
use log::LevelFilter;

use tabular_learn::config::TrainerConfig;
use tabular_learn::trainer;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("TABULAR_LOG", "info"))
        .init();

    trainer::train(&TrainerConfig::default())
}
