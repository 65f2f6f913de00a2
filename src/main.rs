use std::io;
use std::path::PathBuf;

use anyhow::Result;

use citycycle::app;
use citycycle::config::CityConfig;

fn main() -> Result<()> {
    env_logger::init();

    // Optional argument: JSON file mapping city identifiers to CSV paths.
    let config = match std::env::args_os().nth(1) {
        Some(path) => CityConfig::from_json_file(&PathBuf::from(path))?,
        None => CityConfig::default(),
    };

    let stdin = io::stdin();
    app::run(&config, &mut stdin.lock())
}
