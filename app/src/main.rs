use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Env, Target};

use pathviz::{App, Config};
use pathviz_crossterm::CrosstermDriver;

/// The terminal is on the alternate screen while the app runs, so logs
/// either go to `--log-file` or to stderr at `warn` unless `RUST_LOG`
/// says otherwise.
fn init_logging(config: &Config) -> std::io::Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .filter_level(log::LevelFilter::Debug)
            .parse_default_env();
    }
    builder.init();
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();
    if let Err(e) = init_logging(&config) {
        eprintln!("pathviz: cannot open log file: {e}");
        return ExitCode::FAILURE;
    }
    log::debug!("{config:?}");

    let mut app = App::new(&config, CrosstermDriver::new());
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("pathviz: {e}");
            ExitCode::FAILURE
        }
    }
}
