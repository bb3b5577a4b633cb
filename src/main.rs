use crate::aggregate::MultiSourceScraper;
use crate::config::ScrapeConfig;
use crate::errors::ScrapeError;

mod aggregate;
mod config;
mod dataset;
mod errors;
mod extract;
mod fetch;
mod records;
mod sources;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ScrapeConfig::from_env();
    if let Err(e) = run(config) {
        log::error!("Scrape run failed: {e}");
        std::process::exit(1);
    }
}

fn run(config: ScrapeConfig) -> Result<(), ScrapeError> {
    // Bad configuration is fatal before any network activity.
    config.validate()?;

    let records = MultiSourceScraper::new(config.clone()).run()?;
    dataset::write_dataset(&records, &config.output_path)?;

    log::info!(
        "Saved {} listings to {}",
        records.len(),
        config.output_path.display()
    );
    Ok(())
}
