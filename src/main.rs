use std::io;

use fireworks::config::ShowConfig;
use fireworks::show::{Animator, RngSource};
use fireworks::Result;
use log::LevelFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the show
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    log::debug!("{} starting", fireworks::APP_NAME);
    let config = ShowConfig::default();
    let mut animator = Animator::new(config, io::stdout().lock(), RngSource::from_entropy())?;
    let wish = animator.run(io::stdin().lock())?;
    log::info!("wish received ({} chars)", wish.chars().count());
    Ok(())
}
