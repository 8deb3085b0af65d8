//! Application-wide constants.
//!
//! Centralizes the identifiers and file names shared between the config,
//! logging and CLI layers.

/// Tradition applied when neither the config file nor the CLI selects one.
pub const DEFAULT_TRADITION_ID: &str = "paternal";

/// Directory name under the platform config dir holding config and logs.
pub const CONFIG_DIR_NAME: &str = "gedcom_names";

/// File name of the TOML configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log file name for the rolling file appender.
pub const LOG_FILE_NAME: &str = "gedcom_names.log";

/// Environment variable overriding the configured default tradition.
pub const ENV_TRADITION: &str = "GEDCOM_NAMES_TRADITION";

/// Environment variable overriding the configured log file path.
pub const ENV_LOG_FILE: &str = "GEDCOM_NAMES_LOG_FILE";
