use env_logger::Env;

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let presenter_factory = burning_ship_explorer::PixelsPresenterFactory::new();
    let command = burning_ship_explorer::RunGuiCommand::new(presenter_factory);

    if let Err(err) = command.execute() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
