mod app;
mod config;
mod eligibility;
mod error;
mod events;
mod logger;
mod state;
mod ui;
mod validation;

use anyhow::Result;
use app::App;
use clap::{crate_version, Arg};
use config::Config;
use error::AppError;
use log::LevelFilter;
use logger::{CustomLogger, LogBuffer};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = clap::App::new("preq-tui")
        .version(crate_version!())
        .about("Loan pre-qualification wizard for the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("base-url")
                .short("u")
                .long("base-url")
                .value_name("URL")
                .help("Eligibility service address for this session")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("page-size")
                .short("n")
                .long("page-size")
                .value_name("N")
                .help("Applications shown per page for this session")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Capture debug records in the log panel"),
        )
        .get_matches();

    let log_buffer = LogBuffer::default();
    let level = if matches.is_present("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CustomLogger::init(log_buffer.clone(), level).map_err(AppError::from)?;

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    config.apply_overrides(matches.value_of("base-url"), matches.value_of("page-size"))?;

    App::start(config, log_buffer).await
}
