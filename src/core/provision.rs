//! Org settings migration
//!
//! Sequences the admin-side steps that precede a content run: provisioning
//! the org on the destination, then migrating the org-level and per-site
//! config documents. These are plain sequential HTTP calls; any fatal
//! admin error aborts before content copying starts.

use crate::adapters::admin::AdminClient;
use crate::domain::ids::OrgId;
use crate::domain::Result;
use std::sync::Arc;

/// Runs the org provisioning and config migration steps in order
pub struct SettingsMigrator {
    admin: Arc<AdminClient>,
}

impl SettingsMigrator {
    /// Create a migrator around an admin client
    pub fn new(admin: Arc<AdminClient>) -> Self {
        Self { admin }
    }

    /// Provision the org and migrate its org and site configs
    ///
    /// # Errors
    ///
    /// Returns an admin error if any required call fails; skippable
    /// conditions (missing config, unauthorized) are handled inside the
    /// client and logged.
    pub async fn run(&self, org: &OrgId) -> Result<()> {
        tracing::info!(org = %org, "Migrating org settings");

        self.admin.provision_org(org).await?;
        self.admin.migrate_org_config(org).await?;
        self.admin.migrate_site_configs(org).await?;

        tracing::info!(org = %org, "Org settings migrated");
        Ok(())
    }
}
