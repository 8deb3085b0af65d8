use crate::cli::{Args, Command};
use gedcom_names::config::Config;
use gedcom_names::error::AppError;
use gedcom_names::person::{PersonFacts, RecordedNames, Sex};
use gedcom_names::tradition::SurnameTradition;

/// Resolves the tradition to use for this invocation.
///
/// Precedence: `--tradition` flag, then the per-tree override selected by
/// `--tree`, then the configured default.
pub fn resolve_tradition(args: &Args, config: &Config) -> SurnameTradition {
    match args.tradition.as_deref() {
        Some(identifier) => {
            let tradition = SurnameTradition::for_identifier(identifier);
            if !SurnameTradition::is_known_identifier(identifier) {
                tracing::warn!(
                    "Unknown surname tradition '{identifier}', falling back to '{}'",
                    tradition.identifier()
                );
            }
            tradition
        }
        None => config.tradition_for(args.tree.as_deref()),
    }
}

/// Handles the `child` command.
pub fn handle_child_command(
    tradition: SurnameTradition,
    father: Option<&str>,
    mother: Option<&str>,
    sex: &str,
) -> Result<(), AppError> {
    let father = father.map(RecordedNames::single);
    let mother = mother.map(RecordedNames::single);
    let sex = Sex::from_gedcom(sex);

    tracing::debug!(
        "Computing child names under '{}' for sex {}",
        tradition.identifier(),
        sex.as_gedcom()
    );

    let records = tradition.new_child_names(
        father.as_ref().map(|p| p as &dyn PersonFacts),
        mother.as_ref().map(|p| p as &dyn PersonFacts),
        sex,
    );
    print_records(&records);
    Ok(())
}

/// Handles the `spouse` command.
pub fn handle_spouse_command(
    tradition: SurnameTradition,
    individual: &str,
    sex: &str,
) -> Result<(), AppError> {
    let individual = RecordedNames::single(individual);
    let records = tradition.new_spouse_names(&individual, Sex::from_gedcom(sex));
    print_records(&records);
    Ok(())
}

/// Handles the `parent` command.
pub fn handle_parent_command(
    tradition: SurnameTradition,
    child: &str,
    sex: &str,
) -> Result<(), AppError> {
    let child = RecordedNames::single(child);
    let records = tradition.new_parent_names(&child, Sex::from_gedcom(sex));
    print_records(&records);
    Ok(())
}

/// Handles the `template` command: the tradition's blank-name template.
pub fn handle_template_command(tradition: SurnameTradition) -> Result<(), AppError> {
    println!("{}", tradition.default_name());
    Ok(())
}

/// Handles the `traditions` command: one identifier and label per line.
pub fn handle_traditions_command() -> Result<(), AppError> {
    for tradition in SurnameTradition::ALL {
        println!("{:<12} {}", tradition.identifier(), tradition.label());
    }
    Ok(())
}

/// Handles the `config` command.
pub fn handle_config_command() -> Result<(), AppError> {
    Config::display()
}

/// Handles the `set-tradition` command.
///
/// Unknown identifiers are rejected here rather than silently stored; the
/// lenient fallback is for reading stale settings, not for writing new ones.
pub fn handle_set_tradition_command(identifier: &str) -> Result<(), AppError> {
    if !SurnameTradition::is_known_identifier(identifier) {
        return Err(AppError::config_error(format!(
            "Unknown surname tradition '{identifier}'; run `gedcom_names traditions` for the supported set"
        )));
    }

    let mut config = Config::load().unwrap_or_default();
    config.default_tradition = identifier.to_string();
    config.save()?;
    println!("Default tradition set to '{identifier}'");
    Ok(())
}

/// Dispatches a parsed command line.
pub fn run(args: &Args) -> Result<(), AppError> {
    let config = Config::load()?;
    let tradition = resolve_tradition(args, &config);

    match &args.command {
        Command::Child { father, mother, sex } => {
            handle_child_command(tradition, father.as_deref(), mother.as_deref(), sex)
        }
        Command::Spouse { individual, sex } => handle_spouse_command(tradition, individual, sex),
        Command::Parent { child, sex } => handle_parent_command(tradition, child, sex),
        Command::Template => handle_template_command(tradition),
        Command::Traditions => handle_traditions_command(),
        Command::Config => handle_config_command(),
        Command::SetTradition { identifier } => handle_set_tradition_command(identifier),
    }
}

fn print_records(records: &[String]) {
    for record in records {
        println!("{record}");
    }
}
