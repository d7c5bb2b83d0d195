use anyhow::Result;
use core_examples::input_keys::{self, InputKeys};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("starting {}", input_keys::TITLE);

    skia_frame::run(input_keys::config(), InputKeys::default())?;
    Ok(())
}
