use std::path::PathBuf;

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        // .level(log::LevelFilter::Debug)
        .level(log::LevelFilter::Info)
        // .level(log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("hari.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let config = match std::env::args().nth(1) {
        Some(path) => hari::app::load_config(&PathBuf::from(path)),
        None => hari::app::DemoConfig::default(),
    };

    hari::app::run(config);
}
