use crate::{parse_args, parse_time, weather_provider, Options};
use clockface::config::Config;
use clockface::hands::RenderMode;
use clockface::weather::WeatherProvider;
use clockface::{Condition, TimeSample, WeatherStatus};
use std::path::PathBuf;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn no_arguments_means_defaults() {
    assert_eq!(parse_args(args(&[])).unwrap(), Options::default());
}

#[test]
fn all_flags_parse() {
    let options = parse_args(args(&[
        "--stdout",
        "--frames",
        "3",
        "--gradient",
        "--condition",
        "rain",
        "--time",
        "06:30",
        "--config",
        "face.toml",
    ]))
    .unwrap();

    assert!(options.stdout);
    assert_eq!(options.frames, Some(3));
    assert_eq!(options.mode, Some(RenderMode::Gradient));
    assert_eq!(options.condition.as_deref(), Some("rain"));
    assert_eq!(options.time, Some(TimeSample::hms(6, 30, 0)));
    assert_eq!(options.config, Some(PathBuf::from("face.toml")));
}

#[test]
fn later_mode_flag_wins() {
    let options = parse_args(args(&["--gradient", "--marker"])).unwrap();
    assert_eq!(options.mode, Some(RenderMode::Marker));
}

#[test]
fn bad_arguments_are_rejected() {
    assert!(parse_args(args(&["--frames"])).is_err());
    assert!(parse_args(args(&["--frames", "many"])).is_err());
    assert!(parse_args(args(&["--verbose"])).is_err());
}

#[test]
fn time_parsing() {
    assert_eq!(parse_time("23:59:58").unwrap(), TimeSample::hms(23, 59, 58));
    assert_eq!(parse_time("7:05").unwrap(), TimeSample::hms(7, 5, 0));
    assert!(parse_time("24:00").is_err());
    assert!(parse_time("12:60").is_err());
    assert!(parse_time("noon").is_err());
    assert!(parse_time("1:2:3:4").is_err());
}

#[test]
fn weather_source_precedence() {
    let mut config = Config::default();
    let options = Options::default();
    assert_eq!(
        weather_provider(&options, &config).current().status,
        WeatherStatus::Connecting
    );

    config.weather.condition = Some("fog".to_string());
    assert_eq!(
        weather_provider(&options, &config).current().condition,
        Condition::Fog
    );

    let options = Options {
        condition: Some("snow".to_string()),
        ..Options::default()
    };
    assert_eq!(
        weather_provider(&options, &config).current().condition,
        Condition::Snow
    );
}
