/*
 *  main.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  Standalone command: print strings on the panel and refresh
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;
use log::{debug, error, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use inkprint::config::{self, CliOverrides, Config};
use inkprint::display::snapshot::write_pgm;
use inkprint::{FramebufferSession, RenderRequest, WaveformMode};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME")) // Use Cargo.toml name
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        // -h is taken by --invert
        .disable_help_flag(true)
        .arg(Arg::new("help")
            .long("help")
            .help("Print help")
            .action(ArgAction::Help))
        .arg(Arg::new("row")
            .short('y')
            .long("row")
            .help("Row to print on, negative counts up from the bottom")
            .value_parser(clap::value_parser!(i16))
            .allow_negative_numbers(true)
            .default_value("0"))
        .arg(Arg::new("col")
            .short('x')
            .long("col")
            .help("Column to start at, negative counts back from the right edge")
            .value_parser(clap::value_parser!(i16))
            .allow_negative_numbers(true)
            .default_value("0"))
        .arg(Arg::new("invert")
            .action(ArgAction::SetTrue)
            .short('h')
            .long("invert")
            .help("White text on black"))
        .arg(Arg::new("flash")
            .action(ArgAction::SetTrue)
            .short('f')
            .long("flash")
            .help("Full flashing refresh, wait for completion"))
        .arg(Arg::new("clear")
            .action(ArgAction::SetTrue)
            .short('c')
            .long("clear")
            .help("Clear the screen first"))
        .arg(Arg::new("centered")
            .action(ArgAction::SetTrue)
            .short('m')
            .long("centered")
            .help("Center each line"))
        .arg(Arg::new("padded")
            .action(ArgAction::SetTrue)
            .short('p')
            .long("padded")
            .help("Pad lines with blanks to the right edge"))
        .arg(Arg::new("debug")
            .action(ArgAction::SetTrue)
            .short('v')
            .long("debug")
            .help("Debug logging"))
        .arg(Arg::new("config")
            .short('C')
            .long("config")
            .value_parser(clap::value_parser!(PathBuf))
            .help("YAML config file, replaces the default search"))
        .arg(Arg::new("device")
            .short('d')
            .long("device")
            .value_parser(clap::value_parser!(PathBuf))
            .help("Framebuffer device (default /dev/fb0)"))
        .arg(Arg::new("waveform")
            .short('w')
            .long("waveform")
            .value_parser(clap::value_parser!(WaveformMode))
            .help("Waveform for non-flashing updates: auto, du, gc16, gc4, a2, init"))
        .arg(Arg::new("refresh-only")
            .action(ArgAction::SetTrue)
            .short('s')
            .long("refresh-only")
            .help("Refresh the whole screen without printing"))
        .arg(Arg::new("dump")
            .long("dump")
            .value_parser(clap::value_parser!(PathBuf))
            .help("Write the screen to a PGM file afterwards"))
        .arg(Arg::new("dump-config")
            .action(ArgAction::SetTrue)
            .long("dump-config")
            .help("Print the effective configuration and exit"))
        .arg(Arg::new("strings")
            .action(ArgAction::Append)
            .num_args(0..)
            .help("Strings to print, each one row below the previous"))
}

fn overrides(matches: &ArgMatches) -> CliOverrides {
    CliOverrides {
        config: matches.get_one::<PathBuf>("config").cloned(),
        log_level: matches.get_flag("debug").then(|| "debug".to_string()),
        device: matches.get_one::<PathBuf>("device").cloned(),
        waveform: matches.get_one::<WaveformMode>("waveform").copied(),
    }
}

fn request(matches: &ArgMatches) -> RenderRequest {
    RenderRequest {
        row: matches.get_one::<i16>("row").copied().unwrap_or(0),
        col: matches.get_one::<i16>("col").copied().unwrap_or(0),
        inverted: matches.get_flag("invert"),
        flashing: matches.get_flag("flash"),
        cleared: matches.get_flag("clear"),
        centered: matches.get_flag("centered"),
        padded: matches.get_flag("padded"),
        waveform: None,
    }
}

fn run(matches: &ArgMatches, cfg: &Config) -> anyhow::Result<()> {
    let strings: Vec<&String> = matches
        .get_many::<String>("strings")
        .map(|v| v.collect())
        .unwrap_or_default();
    let refresh_only = matches.get_flag("refresh-only");
    let dump = matches.get_one::<PathBuf>("dump");

    if strings.is_empty() && !refresh_only && dump.is_none() {
        build_cli().print_help()?;
        println!();
        return Ok(());
    }

    let device = cfg.device_path();
    let mut session = FramebufferSession::new(&device)
        .with_waveforms(cfg.waveform(), cfg.flash_waveform());
    session
        .initialize(true)
        .with_context(|| format!("failed to initialize {}", device.display()))?;

    let mut req = request(matches);
    for s in strings {
        info!(
            "printing '{}' @ column {}, row {} (inverted: {}, flashing: {}, centered: {}, padded: {}, clear screen: {})",
            s, req.col, req.row, req.inverted, req.flashing, req.centered, req.padded, req.cleared
        );
        let outcome = session.print(s, &req)?;
        debug!("{:?}", outcome);
        // stack further strings below, a clear only keeps the last one
        req.row = req.row.saturating_add(1);
    }

    if refresh_only {
        let sent = session.refresh_only(None, req.flashing)?;
        info!("refreshed {:?}", sent.region);
    }

    if let Some(path) = dump {
        session.ensure_mapped()?;
        let fb = session.framebuffer()?;
        let out = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        write_pgm(&fb, BufWriter::new(out))?;
        info!("screen written to {}", path.display());
    }

    session.close();
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let cfg = match config::load(&overrides(&matches)) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if matches.get_flag("dump-config") {
        return match config::dump_config(&cfg) {
            Ok(s) => {
                println!("{s}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let level = if cfg.debug_enabled() { "debug" } else { cfg.log_level.as_deref().unwrap_or("info") };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();

    info!("v.{} built {} for {}", env!("CARGO_PKG_VERSION"), BUILD_DATE, BUILD_TARGET);

    match run(&matches, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
