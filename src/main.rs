#![forbid(unsafe_code)]

extern crate clap;
extern crate darksky_client;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate serde;
extern crate time;

mod config;
#[macro_use]
mod timed;

use crate::config::Config;

use clap::{Arg, ArgMatches, Command};
use darksky_client::{DataBlock, ForecastRequest, ForecastResponse, Lang, Units};
use env_logger::Env;
use time::OffsetDateTime;
use time::macros::format_description;

use std::error::Error;
use std::io::{self, Write};
use std::process;

fn main() {
    let env = Env::default().filter_or("DARKSKY_LOG_LEVEL", "info");
    env_logger::init_from_env(env);

    let matches = Command::new("darksky")
        .version("0.1")
        .author("Chris Lieb")
        .about("Fetch a forecast from the DarkSky API")
        .arg(Arg::new("config").short('c').long("config"))
        .arg(Arg::new("key").short('k').long("key"))
        .arg(
            Arg::new("lat")
                .long("lat")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("lng")
                .long("lng")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            Arg::new("time")
                .short('t')
                .long("time")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(Arg::new("lang").short('l').long("lang"))
        .arg(Arg::new("units").short('u').long("units"))
        .arg(Arg::new("base_url").long("base-url"))
        .get_matches();

    if let Err(err) = run(&matches) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let request = build_request(matches, config)?;
    let response = timed!(
        "Fetching forecast for {},{}",
        request.latitude(),
        request.longitude();
        (|| request.execute())
    )?;

    write_forecast(&mut io::stdout().lock(), &response)?;
    Ok(())
}

fn build_request(matches: &ArgMatches, config: Config) -> Result<ForecastRequest, Box<dyn Error>> {
    let key = Config::require(
        &matches.get_one::<String>("key").cloned().or(config.api_key),
        "api key",
    )?;
    let lat = Config::require(
        &matches.get_one::<f64>("lat").copied().or(config.latitude),
        "latitude",
    )?;
    let lng = Config::require(
        &matches.get_one::<f64>("lng").copied().or(config.longitude),
        "longitude",
    )?;

    let mut request = ForecastRequest::new(key, lat, lng);
    if let Some(time) = matches.get_one::<i64>("time").copied().or(config.time) {
        request = request.with_time(time);
    }
    if let Some(lang) = matches
        .get_one::<String>("lang")
        .map(|code| Lang::from(code.as_str()))
        .or(config.lang)
    {
        request = request.with_lang(lang);
    }
    if let Some(units) = matches
        .get_one::<String>("units")
        .map(|code| Units::from(code.as_str()))
        .or(config.units)
    {
        request = request.with_units(units);
    }
    if let Some(base_url) = matches.get_one::<String>("base_url").cloned().or(config.base_url) {
        request = request.with_base_url(base_url);
    }

    Ok(request)
}

fn format_time(time: Option<OffsetDateTime>) -> String {
    time.and_then(|t| {
        t.format(&format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
            .ok()
    })
    .unwrap_or_else(|| "unknown".to_string())
}

fn write_block(out: &mut impl Write, name: &str, block: &DataBlock) -> io::Result<()> {
    if !block.summary.is_empty() {
        writeln!(out, "{name}: {} ({} data points)", block.summary, block.data.len())?;
    }
    Ok(())
}

fn write_forecast(out: &mut impl Write, response: &ForecastResponse) -> io::Result<()> {
    let forecast = &response.forecast;
    let currently = &forecast.currently;

    writeln!(
        out,
        "Forecast for {},{} ({}) at {}",
        forecast.latitude,
        forecast.longitude,
        forecast.timezone,
        format_time(currently.time())
    )?;
    writeln!(
        out,
        "Currently: {}, {} (feels like {}), wind {} {}",
        currently.summary,
        currently.temperature,
        currently.apparent_temperature,
        currently.wind_speed,
        currently.wind_direction()
    )?;
    write_block(out, "Next hour", &forecast.minutely)?;
    write_block(out, "Next two days", &forecast.hourly)?;
    write_block(out, "Next week", &forecast.daily)?;

    for alert in &forecast.alerts {
        writeln!(
            out,
            "Alert: {} (expires {})",
            alert.title,
            format_time(alert.expires())
        )?;
    }

    writeln!(out, "API calls made today: {}", response.api_call_count)
}
