use std::{env, process};
use std::path::PathBuf;

pub struct Config {
    pub roster: PathBuf,
    pub requests: Option<PathBuf>,
    pub echo: bool
}

impl Config {
    pub fn get() -> Config {
        let roster = env::var("ROSTER")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                error!("ROSTER unspecified.");
                process::exit(1);
            });

        let requests = env::var("REQUESTS")
            .ok()
            .map(PathBuf::from);

        if requests.is_none() {
            info!("REQUESTS unspecified, reading from standard input.");
        }

        let echo = env::var("ECHO")
            .map_err(|_| "unspecified")
            .and_then(|echo| parse_flag(&echo).ok_or("invalid"))
            .unwrap_or_else(|e| {
                warn!("ECHO {}, defaulting to off.", e);
                false
            });

        Config {
            roster: roster,
            requests: requests,
            echo: echo
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None
    }
}
