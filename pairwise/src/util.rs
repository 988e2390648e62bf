use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use log::LevelFilter;

pub trait PathBufExt {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>>;
}

impl PathBufExt for PathBuf {
    fn open(&self, allow_overwrite: bool) -> anyhow::Result<BufWriter<File>> {
        let mut file_options = File::options();

        if allow_overwrite {
            file_options.write(true).truncate(true).create(true);
        } else {
            file_options.write(true).create_new(true);
        };

        let file = file_options
            .open(self)
            .context(format!("failed to create file: {}", self.to_string_lossy()))?;

        Ok(BufWriter::new(file))
    }
}

/// Open the output destination: a file if a path is given, otherwise stdout.
pub fn output_writer(
    path: &Option<PathBuf>,
    allow_overwrite: bool,
) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(path.open(allow_overwrite)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Map the number of `-v` flags to a log level; warnings are always shown.
pub fn verbosity_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Set up logging to stderr. `RUST_LOG` wins over the verbosity flags when set.
pub fn init_logger(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(verbosity_level(verbosity))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();

    // a logger may already be installed, e.g. under test
    let _ = builder.try_init();
}
