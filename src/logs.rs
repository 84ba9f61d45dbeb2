use std::{fs, path::Path};

use anyhow::Result;
use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    {ContentLimit, FileRotate},
};
use log::{Level, Log};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Writes everything to a rotating log file, and also echoes warnings and
/// errors to stderr.
pub struct MainLogger {
    write_logger: Box<WriteLogger<FileRotate<AppendTimestamp>>>,
}

impl MainLogger {
    fn new(write_logger: Box<WriteLogger<FileRotate<AppendTimestamp>>>) -> Self {
        Self { write_logger }
    }
}

impl Log for MainLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.write_logger.enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        self.write_logger.log(record);

        if record.level() <= Level::Warn {
            eprintln!(
                "{}:{} -- {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        self.write_logger.flush();
    }
}

pub fn init(log_dir: &str) -> Result<()> {
    let log_dir = Path::new(log_dir);
    fs::create_dir_all(log_dir)?;
    let log = FileRotate::new(
        log_dir.join("main.log"),
        AppendTimestamp::default(FileLimit::MaxFiles(3)),
        ContentLimit::Lines(1000),
        Compression::None,
        #[cfg(unix)]
        None,
    );
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let write_logger = WriteLogger::new(LevelFilter::Info, config, log);
    log::set_boxed_logger(Box::new(MainLogger::new(write_logger)))?;
    log::set_max_level(LevelFilter::Info);
    info!("logging to {}", log_dir.display());
    Ok(())
}
