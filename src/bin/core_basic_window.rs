use anyhow::Result;
use core_examples::basic_window::{self, BasicWindow};

fn main() -> Result<()> {
    env_logger::init();
    log::info!("starting {}", basic_window::TITLE);

    skia_frame::run(basic_window::config(), BasicWindow::default())?;
    Ok(())
}
