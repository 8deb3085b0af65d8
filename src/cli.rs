use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// GEDCOM surname-tradition engine
///
/// Computes the GEDCOM name records a newly created individual should
/// inherit from its relatives, under a configurable cultural surname
/// tradition. Relatives are given as raw GEDCOM name values, surnames
/// bounded by slashes, e.g. "Gabriel /Garcia/ /Iglesias/".
///
/// The output is one name record per line group, ready to append to the new
/// individual's record.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Surname tradition identifier to apply (see the `traditions` command).
    /// Overrides the configured default and any per-tree setting.
    #[arg(short, long, help_heading = "Tradition")]
    pub tradition: Option<String>,

    /// Family tree name, used to look up a per-tree tradition override in
    /// the config file.
    #[arg(long, help_heading = "Tradition")]
    pub tree: Option<String>,

    /// Enable debug logging and echo logs to stderr.
    #[arg(long, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs are written to
    /// the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the names a new child inherits from its parents.
    Child {
        /// Father's recorded name, e.g. "Gabriel /Garcia/ /Iglesias/"
        #[arg(long)]
        father: Option<String>,

        /// Mother's recorded name, e.g. "Gabriel /Ruiz/ /Lorca/"
        #[arg(long)]
        mother: Option<String>,

        /// GEDCOM sex of the new child: M, F or U
        #[arg(short, long, default_value = "U")]
        sex: String,
    },

    /// Compute the names for a new spouse of an existing individual.
    Spouse {
        /// The existing individual's recorded name
        #[arg(long)]
        individual: String,

        /// GEDCOM sex of the new spouse: M, F or U
        #[arg(short, long, default_value = "U")]
        sex: String,
    },

    /// Compute the names for a new parent of an existing individual.
    Parent {
        /// The existing child's recorded name
        #[arg(long)]
        child: String,

        /// GEDCOM sex of the new parent: M, F or U
        #[arg(short, long, default_value = "U")]
        sex: String,
    },

    /// Print the blank-name template of the selected tradition.
    Template,

    /// List the supported surname traditions.
    Traditions,

    /// Show the current configuration.
    Config,

    /// Set the default tradition in the config file.
    SetTradition {
        /// Tradition identifier, e.g. spanish
        identifier: String,
    },
}
