//! Command-line launcher for the cubeview demos.

use std::path::Path;

use cubeview::{DemoKind, Options, Viewer};

const USAGE: &str =
    "Usage: cubeview [cube|animation|keyboard|mouse|all] [options.toml]";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let demo = match args.next().as_deref().map(str::parse::<DemoKind>) {
        None => DemoKind::default(),
        Some(Ok(demo)) => demo,
        Some(Err(e)) => {
            log::error!("{e}");
            log::error!("{USAGE}");
            std::process::exit(1);
        }
    };

    let options = match args.next() {
        None => Options::default(),
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{path}: {e}");
                std::process::exit(1);
            }
        },
    };

    log::info!("starting demo '{demo}'");

    if let Err(e) = Viewer::builder()
        .with_demo(demo)
        .with_options(options)
        .build()
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
