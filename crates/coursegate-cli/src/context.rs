//! Command context: catalog-bound evaluator plus the flag repository

use crate::config::CliConfig;
use anyhow::Context;
use coursegate_catalog::CourseCatalog;
use coursegate_core::Role;
use coursegate_flags::{FlagsRepository, JsonFileStore, RoleOverride, StoredFlags};
use coursegate_policy::PolicyEvaluator;

/// Everything a command handler needs.
pub struct CliContext {
    /// Loaded configuration.
    pub config: CliConfig,
    /// Evaluator over the configured catalog.
    pub evaluator: PolicyEvaluator,
    /// Flag repository, wrapped in a role override when one is active.
    pub flags: Box<dyn FlagsRepository>,
    /// Role forced by `--as-role` or the configured override.
    pub role_override: Option<Role>,
}

impl CliContext {
    /// Build the context. `as_role` takes precedence over the configured override.
    pub fn from_config(config: CliConfig, as_role: Option<Role>) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_file {
            Some(path) => CourseCatalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
            None => CourseCatalog::builtin(),
        };

        let store = StoredFlags::new(JsonFileStore::new(&config.flags_file));
        let role_override = as_role.or(config.role_override);
        let flags: Box<dyn FlagsRepository> = match role_override {
            Some(role) => {
                tracing::info!(%role, "using role override");
                Box::new(RoleOverride::new(store, role))
            }
            None => Box::new(store),
        };

        Ok(Self {
            config,
            evaluator: PolicyEvaluator::new(catalog),
            flags,
            role_override,
        })
    }
}
