// The authorization library.
extern crate conference_authz;

// Serialization libraries.
#[macro_use] extern crate serde_derive;
extern crate serde_json;

// Logging libraries.
#[macro_use] extern crate log;
extern crate badlog;

use conference_authz::{authorize, Identity, Request, Roster};
use config::Config;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

mod config;

/// One line of input: who is asking, and what for.
#[derive(Deserialize)]
struct Ask {
    identity: Identity,
    request: Request
}

fn main() {
    // Initialize the environment.
    badlog::init_from_env("LOG_LEVEL");
    let config = Config::get();

    // Load the ownership records.
    let roster = File::open(&config.roster)
        .map_err(|e| e.to_string())
        .and_then(|file| {
            Roster::from_reader(BufReader::new(file))
                .map_err(|e| e.to_string())
        });

    let roster = match roster {
        Ok(roster) => roster,
        Err(e) => {
            error!("Could not load the roster: {}.", e);
            return;
        }
    };

    info!("Loaded {} records from {}.", roster.len(), config.roster.display());

    let input: Box<dyn BufRead> = match config.requests {
        Some(ref path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                error!("Could not open {}: {}.", path.display(), e);
                return;
            }
        },
        None => Box::new(BufReader::new(io::stdin()))
    };

    // Decide every request, one per line.
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (n, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Could not read line {}: {}.", n + 1, e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let verdict = match serde_json::from_str::<Ask>(&line) {
            Ok(ask) => authorize(&ask.identity, &ask.request, &roster)
                .to_string(),
            Err(e) => {
                warn!("Line {} is malformed: {}.", n + 1, e);
                "invalid".to_owned()
            }
        };

        let written = if config.echo {
            writeln!(out, "{}\t{}", verdict, line)
        } else {
            writeln!(out, "{}", verdict)
        };

        if let Err(e) = written {
            error!("Could not write the decision: {}.", e);
            break;
        }
    }
}
