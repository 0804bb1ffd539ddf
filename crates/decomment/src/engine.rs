//! The configured comment remover.

use decomment_core::LanguageProfile;

use crate::{
    describe_spans, remove_comments, CategoryFlags, ConfigError, LanguageRegistry, Options,
};

/// Comment remover built once from [`Options`] and reused across inputs.
///
/// Holds the merged language registry, the deletion flags and the configured
/// language. Shared state is read-only, so one instance can serve many
/// threads.
#[derive(Clone, Debug)]
pub struct Decommenter {
    registry: LanguageRegistry,
    flags: CategoryFlags,
    language: Option<String>,
}

impl Decommenter {
    /// Merge the option profiles and aliases over the built-ins.
    ///
    /// Fails on invalid profiles, dangling aliases, or a configured language
    /// that does not resolve.
    #[tracing::instrument(level = "debug", skip_all, fields(language = ?options.language))]
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        let registry = LanguageRegistry::with_overrides(&options.types, &options.aliases)?;
        registry.resolve(options.language.as_deref())?;
        Ok(Decommenter {
            registry,
            flags: options.flags,
            language: options.language,
        })
    }

    /// Deletion flags.
    pub fn flags(&self) -> CategoryFlags {
        self.flags
    }

    /// Configured language, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Profile for `language`, falling back to the configured language and
    /// then the default.
    pub fn profile(&self, language: Option<&str>) -> Result<&LanguageProfile, ConfigError> {
        self.registry.resolve(language.or(self.language()))
    }

    /// Remove comments using the configured language.
    pub fn delete(&self, text: &str) -> Result<String, ConfigError> {
        let profile = self.profile(None)?;
        Ok(remove_comments(text, profile, self.flags))
    }

    /// Remove comments as `language`, overriding the configured one.
    pub fn delete_as(&self, text: &str, language: &str) -> Result<String, ConfigError> {
        let profile = self.profile(Some(language))?;
        Ok(remove_comments(text, profile, self.flags))
    }

    /// Span dump of `text` as `language` (or the configured language).
    pub fn describe(&self, text: &str, language: Option<&str>) -> Result<String, ConfigError> {
        let profile = self.profile(language)?;
        Ok(describe_spans(text, profile))
    }
}

#[cfg(test)]
mod tests;
