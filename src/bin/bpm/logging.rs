use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use crate::config::{ConfigPaths, LoggingConfig};

const LOG_FILE: &str = "bpm.log";

/// Installs the file logger; the terminal belongs to the console.
///
/// The active log is always the plain file name (`bpm.log`); rotated files
/// get a numbered infix next to it. The returned handle must outlive the
/// program's logging.
pub fn init_logging(config: &LoggingConfig, paths: &ConfigPaths) -> anyhow::Result<LoggerHandle> {
    let path = log_file(config, paths);
    let handle = Logger::try_with_env_or_str(&config.level)?
        .log_to_file(file_spec(&path)?)
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()?;
    log::info!(
        "bpm {} logging to {} at {}",
        env!("CARGO_PKG_VERSION"),
        path.display(),
        config.level
    );
    Ok(handle)
}

/// The configured log file, or `bpm.log` in the data directory.
fn log_file(config: &LoggingConfig, paths: &ConfigPaths) -> PathBuf {
    match config.path.as_deref().filter(|p| !p.trim().is_empty()) {
        Some(path) => PathBuf::from(path),
        None => paths.logs_dir.join(LOG_FILE),
    }
}

fn file_spec(path: &Path) -> anyhow::Result<FileSpec> {
    Ok(FileSpec::try_from(path)?.suppress_timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ConfigPaths {
        ConfigPaths {
            config_file: PathBuf::from("/home/u/.config/bpm/config.toml"),
            config_dir: PathBuf::from("/home/u/.config/bpm"),
            logs_dir: PathBuf::from("/home/u/.local/share/bpm/logs"),
        }
    }

    #[test]
    fn defaults_to_the_data_directory() {
        let config = LoggingConfig::default();
        assert_eq!(
            log_file(&config, &paths()),
            PathBuf::from("/home/u/.local/share/bpm/logs/bpm.log")
        );
    }

    #[test]
    fn configured_path_wins_unless_blank() {
        let mut config = LoggingConfig {
            path: Some("/tmp/console.log".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(log_file(&config, &paths()), PathBuf::from("/tmp/console.log"));

        config.path = Some("  ".to_string());
        assert_eq!(
            log_file(&config, &paths()),
            PathBuf::from("/home/u/.local/share/bpm/logs/bpm.log")
        );
    }
}
