//! Tracing setup for applications consuming synthesis events.

use fluent_translation_domain::TranslationError;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global subscriber honouring `RUST_LOG` plus `default_directive`.
///
/// A subscriber that is already installed is left in place.
pub fn init_tracing(default_directive: &str) -> Result<(), TranslationError> {
    let directive: Directive = default_directive.parse().map_err(|e| {
        TranslationError::Configuration(format!(
            "Failed to parse tracing directive {default_directive:?}: {e}"
        ))
    })?;

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(directive))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        assert!(init_tracing("fluent_translation=debug").is_ok());
        assert!(init_tracing("fluent_translation=info").is_ok());
    }

    #[test]
    fn rejects_malformed_directive() {
        assert!(matches!(
            init_tracing("fluent_translation=loud"),
            Err(TranslationError::Configuration(_))
        ));
    }
}
