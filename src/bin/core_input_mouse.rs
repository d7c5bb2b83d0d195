use anyhow::Result;
use core_examples::input_mouse::{self, InputMouse};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("starting {}", input_mouse::TITLE);

    skia_frame::run(input_mouse::config(), InputMouse::default())?;
    Ok(())
}
