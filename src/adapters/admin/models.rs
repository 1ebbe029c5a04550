//! Admin API wire models

use serde::{Deserialize, Serialize};

/// One entry in an admin service org list
#[derive(Debug, Clone, Deserialize)]
pub struct OrgEntry {
    /// Org name
    pub name: String,

    /// Creation timestamp, when the service reports one
    #[serde(default)]
    pub created: Option<String>,
}

/// One entry in an org's site list
///
/// Entries with an extension are files, not sites, and are skipped by the
/// site config migration.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteEntry {
    /// Site name
    pub name: String,

    /// File extension for non-site entries
    #[serde(default)]
    pub ext: Option<String>,
}

impl SiteEntry {
    /// Whether this entry is a site (directories have no extension)
    pub fn is_site(&self) -> bool {
        self.ext.is_none()
    }
}

/// Body POSTed to the destination to seed a new org's migration props
#[derive(Debug, Clone, Serialize)]
pub struct MigrationProps {
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    pub data: Vec<MigrationPropsRow>,
}

/// Single row of [`MigrationProps`]
#[derive(Debug, Clone, Serialize)]
pub struct MigrationPropsRow {
    pub created: String,
}

impl MigrationProps {
    /// Build the one-row props document for an org created at `created`
    pub fn for_created(created: impl Into<String>) -> Self {
        Self {
            total: 1,
            limit: 1,
            offset: 0,
            data: vec![MigrationPropsRow {
                created: created.into(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_entry_deserializes_without_created() {
        let entry: OrgEntry = serde_json::from_str(r#"{"name": "acme"}"#).unwrap();
        assert_eq!(entry.name, "acme");
        assert!(entry.created.is_none());
    }

    #[test]
    fn test_site_entry_is_site() {
        let site: SiteEntry = serde_json::from_str(r#"{"name": "www"}"#).unwrap();
        let file: SiteEntry =
            serde_json::from_str(r#"{"name": "notes", "ext": "html"}"#).unwrap();
        assert!(site.is_site());
        assert!(!file.is_site());
    }

    #[test]
    fn test_migration_props_shape() {
        let props = MigrationProps::for_created("2024-01-01T00:00:00Z");
        let json = serde_json::to_value(&props).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total": 1,
                "limit": 1,
                "offset": 0,
                "data": [{ "created": "2024-01-01T00:00:00Z" }],
            })
        );
    }
}
