// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamresize::{grid_from_image, grid_to_image, resize};
use std::io::Write;
use std::process;
use std::time::Instant;

use clap::{App, Arg, ArgMatches};
use log::{info, LevelFilter, Log, Metadata, Record};

struct Logger {
    level: LevelFilter,
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn install_logger(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_boxed_logger(Box::new(Logger { level }))
        .map(|()| log::set_max_level(level))
        .unwrap_or_else(|_| eprintln!("Failed to set logger"));
}

fn positive(value: String) -> Result<(), String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(()),
        _ => Err(format!("'{}' is not a positive whole number", value)),
    }
}

fn dimension(matches: &ArgMatches, name: &str, default: usize) -> Result<usize, failure::Error> {
    match matches.value_of(name) {
        Some(value) => Ok(value.parse()?),
        None => Ok(default),
    }
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    // Both are required, clap has already checked.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let grid = grid_from_image(&image::open(input)?);
    let target_height = dimension(matches, "height", grid.height())?;
    let target_width = dimension(matches, "width", grid.width())?;

    let started = Instant::now();
    let resized = resize(grid, target_height, target_width)?;
    let elapsed = started.elapsed();
    info!(
        "resized in {}.{:03}s",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );

    grid_to_image(&resized).save(output)?;
    Ok(())
}

fn main() {
    let matches = App::new("seamresize")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("N")
                .help("Target width in pixels (default: unchanged)")
                .takes_value(true)
                .validator(positive),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("N")
                .help("Target height in pixels (default: unchanged)")
                .takes_value(true)
                .validator(positive),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more; repeat for more detail"),
        )
        .get_matches();

    install_logger(matches.occurrences_of("verbose"));

    if let Err(error) = run(&matches) {
        log::logger().flush();
        eprintln!("seamresize: {}", error);
        process::exit(1);
    }
}
