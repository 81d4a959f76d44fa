use burning_ship_explorer::{BurningShipConfig, HeadlessController, ViewState};
use env_logger::Env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .try_init()
        .ok();

    let mut controller = HeadlessController::new(BurningShipConfig::default())?;
    controller.generate(&ViewState::default())?;

    Ok(())
}
