//! Language registry: named profiles and the aliases that select them.
//!
//! Lookup always goes through the alias table. Every profile name is an alias
//! of itself, so `resolve("css")` and `resolve("less")` both land on the
//! stylesheet profile.

use decomment_core::LanguageProfile;
use rustc_hash::FxHashMap;

use crate::ConfigError;

/// Language used when none is given.
pub const DEFAULT_LANGUAGE: &str = "js";

const BUILTIN_ALIASES: [(&str, &str); 3] = [("htm", "html"), ("less", "css"), ("ts", "js")];

/// Name-to-profile map with aliases.
#[derive(Clone, Debug)]
pub struct LanguageRegistry {
    profiles: FxHashMap<String, LanguageProfile>,
    aliases: FxHashMap<String, String>,
}

impl LanguageRegistry {
    /// The built-in languages: `js`, `css` and `html`, plus the `htm`,
    /// `less` and `ts` aliases.
    pub fn builtin() -> Self {
        let mut profiles = FxHashMap::default();
        profiles.insert("js".to_owned(), LanguageProfile::brace());
        profiles.insert("css".to_owned(), LanguageProfile::stylesheet());
        profiles.insert("html".to_owned(), LanguageProfile::markup());

        let mut registry = LanguageRegistry {
            profiles,
            aliases: FxHashMap::default(),
        };
        registry.rebuild_aliases(&FxHashMap::default());
        registry
    }

    /// Built-ins merged with caller profiles and aliases.
    ///
    /// Caller entries win on name collisions. Every profile is validated and
    /// every alias must point at an existing profile.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(types = types.len(), aliases = aliases.len())
    )]
    pub fn with_overrides(
        types: &FxHashMap<String, LanguageProfile>,
        aliases: &FxHashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();
        for (name, profile) in types {
            registry.profiles.insert(name.clone(), profile.clone());
        }
        registry.rebuild_aliases(aliases);
        registry.validate()?;

        tracing::debug!(
            profiles = registry.profiles.len(),
            aliases = registry.aliases.len(),
            "language registry ready"
        );
        Ok(registry)
    }

    /// Built-in aliases, then one self-alias per profile, then `extra`.
    fn rebuild_aliases(&mut self, extra: &FxHashMap<String, String>) {
        self.aliases.clear();
        for (alias, target) in BUILTIN_ALIASES {
            self.aliases.insert(alias.to_owned(), target.to_owned());
        }
        for name in self.profiles.keys() {
            self.aliases.insert(name.clone(), name.clone());
        }
        for (alias, target) in extra {
            self.aliases.insert(alias.clone(), target.clone());
        }
    }

    /// Checks run in name order so the first reported error is stable.
    fn validate(&self) -> Result<(), ConfigError> {
        let mut profiles: Vec<(&String, &LanguageProfile)> = self.profiles.iter().collect();
        profiles.sort_unstable_by_key(|(name, _)| *name);
        for (name, profile) in profiles {
            profile
                .validate()
                .map_err(|source| ConfigError::InvalidProfile {
                    name: name.clone(),
                    source,
                })?;
        }

        let mut aliases: Vec<(&String, &String)> = self.aliases.iter().collect();
        aliases.sort_unstable();
        for (alias, target) in aliases {
            if !self.profiles.contains_key(target) {
                return Err(ConfigError::DanglingAlias {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up the profile for `language`, or for [`DEFAULT_LANGUAGE`] when
    /// `None`.
    ///
    /// Keys are matched exactly; callers lowercase file extensions first.
    pub fn resolve(&self, language: Option<&str>) -> Result<&LanguageProfile, ConfigError> {
        let name = language.unwrap_or(DEFAULT_LANGUAGE);
        self.aliases
            .get(name)
            .and_then(|target| self.profiles.get(target))
            .ok_or_else(|| ConfigError::UnknownLanguage {
                name: name.to_owned(),
            })
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
