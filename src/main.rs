#[macro_use]
extern crate rocket;

use std::process::ExitCode;

use clap::Parser;
use rocket::data::{Limits, ToByteUnit};
use rocket::{Build, Rocket};

use crate::cli::Args;
use crate::config::{parse_config, PhotoDropConfig};
use crate::exposure::Exposure;
use crate::handler::catchers::empty_error;
use crate::handler::page_handler::index;
use crate::handler::upload_handler::{upload_not_a_form, upload_photo};
use crate::model::error::startup_errors::StartupError;
use crate::service::picture_service::PictureStore;

mod cli;
mod config;
mod exposure;
mod handler;
mod logging;
mod model;
mod service;
#[cfg(test)]
mod test;

/// builds the server for `config`. The pictures directory is expected to exist already
pub fn rocket(config: &PhotoDropConfig) -> Rocket<Build> {
    let upload_limit = config.pictures.max_upload_mebibytes.mebibytes();
    let rocket_config = rocket::Config {
        address: config.server.address,
        port: config.server.port,
        limits: Limits::default()
            .limit("data-form", upload_limit)
            .limit("file", upload_limit),
        ..rocket::Config::default()
    };
    rocket::custom(rocket_config)
        .manage(PictureStore::new(&config.pictures.directory))
        .mount("/", routes![index, upload_photo, upload_not_a_form])
        .register("/", catchers![empty_error])
}

#[rocket::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::init_logging() {
        eprintln!("Failed to set up logging: {e}");
    }
    match start(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn start(args: Args) -> Result<(), StartupError> {
    let config = parse_config(&args.config)?;
    log::set_max_level(config.log.level_filter());
    let store = PictureStore::new(&config.pictures.directory);
    store.prepare()?;
    let announcement = Exposure::select(&args, &config)
        .announce(&config)
        .await?;
    announcement.print();
    rocket(&config)
        .launch()
        .await
        .map_err(|e| StartupError::Launch(e.to_string()))?;
    // the tunnel (if any) has to outlive the server
    drop(announcement);
    Ok(())
}
