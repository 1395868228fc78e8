use anyhow::Error;
use common_tracing::initialize_logging_and_tracing;
use tracing_subscriber::filter::Directive;

use crate::conf::config_types::LogLevelConfiguration;
use crate::conf::configuration::Configuration;

/// Filter directives from the `logging.level` section, split into the ones
/// that parse and the raw text of the ones that do not.
pub fn filter_directives(level: &LogLevelConfiguration) -> (Vec<Directive>, Vec<String>) {
    let raw = level
        .root
        .iter()
        .cloned()
        .chain(
            level
                .directives
                .iter()
                .map(|d| format!("{}={}", d.namespace, d.level)),
        );

    let mut parsed = Vec::new();
    let mut rejected = Vec::new();
    for directive in raw {
        match directive.parse::<Directive>() {
            Ok(d) => parsed.push(d),
            Err(_) => rejected.push(directive),
        }
    }

    (parsed, rejected)
}

pub fn init(config: &Configuration) -> Result<(), Error> {
    let (directives, rejected) = filter_directives(&config.logging.level);

    initialize_logging_and_tracing(
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.logging.jaeger_enabled,
        |e| directives.iter().cloned().fold(e, |e, d| e.add_directive(d)),
    )?;

    // The subscriber only exists from here on.
    for directive in rejected {
        tracing::warn!(directive = %directive, "ignoring unparseable log directive");
    }

    Ok(())
}
