//! Admin service HTTP client
//!
//! Sequential request/response calls against the source and destination
//! admin services: org provisioning, org config migration, and site config
//! migration. No concurrency here; the content engine is elsewhere.
//!
//! Authorization-related rejections (401/403) on config endpoints are
//! treated as "skip with a log line", matching how operators run partial
//! migrations without a token. Anything else non-success is an error.

use crate::adapters::admin::models::{MigrationProps, OrgEntry, SiteEntry};
use crate::config::FerryConfig;
use crate::domain::errors::AdminError;
use crate::domain::ids::OrgId;
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;

/// Client for the source and destination admin services
pub struct AdminClient {
    http: reqwest::Client,
    source_url: String,
    dest_url: String,
    bearer_token: Option<String>,
}

impl AdminClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &FerryConfig) -> Result<Self, AdminError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.admin.request_timeout_secs))
            .build()
            .map_err(|e| AdminError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            http,
            source_url: config.source.admin_url.trim_end_matches('/').to_string(),
            dest_url: config.destination.admin_url.trim_end_matches('/').to_string(),
            bearer_token: config
                .admin
                .bearer_token
                .as_ref()
                .map(|t| t.expose_secret().as_ref().to_string()),
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Create the org on the destination service
    ///
    /// Looks up the org's creation timestamp in the source org list, POSTs
    /// a temporary migration props document on the destination, verifies
    /// the org now appears in the destination list, then deletes the
    /// temporary document.
    ///
    /// # Errors
    ///
    /// Returns an error if the org is missing from the source list or any
    /// of the four calls does not report success.
    pub async fn provision_org(&self, org: &OrgId) -> Result<(), AdminError> {
        let orgs: Vec<OrgEntry> = self
            .get_json(&format!("{}/list", self.source_url), "fetch source org list")
            .await?;

        let created = orgs
            .iter()
            .find(|o| o.name == org.as_str())
            .and_then(|o| o.created.clone())
            .ok_or_else(|| AdminError::OrgNotFound(org.as_str().to_string()))?;

        tracing::info!(org = %org, "Creating temporary migration props on destination");

        let props_url = format!("{}/source/{}/migration", self.dest_url, org);
        let resp = self
            .authorized(self.http.post(&props_url))
            .json(&MigrationProps::for_created(created))
            .send()
            .await?;
        Self::ensure_success(&resp, "create migration props document")?;

        let orgs: Vec<OrgEntry> = self
            .get_json(
                &format!("{}/list", self.dest_url),
                "fetch destination org list",
            )
            .await?;
        if !orgs.iter().any(|o| o.name == org.as_str()) {
            return Err(AdminError::InvalidResponse(format!(
                "org '{org}' missing from destination list after provisioning"
            )));
        }

        let resp = self.authorized(self.http.delete(&props_url)).send().await?;
        Self::ensure_success(&resp, "delete migration props document")?;

        tracing::info!(org = %org, "Org provisioned on destination");
        Ok(())
    }

    /// Copy the org-level config document from source to destination
    ///
    /// 404 on the source means there is nothing to migrate; 403 means the
    /// caller isn't authorized and the step is skipped. Both are logged
    /// and return `Ok`.
    ///
    /// # Errors
    ///
    /// Returns an error on any other non-success response.
    pub async fn migrate_org_config(&self, org: &OrgId) -> Result<(), AdminError> {
        let resp = self
            .authorized(
                self.http
                    .get(format!("{}/config/{}", self.source_url, org)),
            )
            .send()
            .await?;

        match resp.status() {
            StatusCode::NOT_FOUND => {
                tracing::info!(org = %org, "No org config to migrate");
                return Ok(());
            }
            StatusCode::FORBIDDEN => {
                tracing::warn!(org = %org, "Skipping org config: not authorized");
                return Ok(());
            }
            status if !status.is_success() => {
                return Err(AdminError::RequestFailed {
                    context: "fetch source org config".to_string(),
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let document = resp.text().await?;
        self.post_config(
            &format!("{}/config/{}", self.dest_url, org),
            document,
            "create org config",
        )
        .await?;

        tracing::info!(org = %org, "Org config migrated");
        Ok(())
    }

    /// Copy each site's config document from source to destination
    ///
    /// Lists the org's sites on the source and migrates the config of each
    /// entry that is a site (no file extension). Per-site 404s and
    /// authorization rejections are skipped with a log line.
    ///
    /// # Errors
    ///
    /// Returns an error if the site listing or any config transfer fails
    /// with an unexpected status.
    pub async fn migrate_site_configs(&self, org: &OrgId) -> Result<(), AdminError> {
        let resp = self
            .authorized(self.http.get(format!("{}/list/{}", self.source_url, org)))
            .send()
            .await?;

        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!(org = %org, "Skipping site configs: not authorized");
                return Ok(());
            }
            status if !status.is_success() => {
                return Err(AdminError::RequestFailed {
                    context: "list org sites".to_string(),
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let entries: Vec<SiteEntry> = resp
            .json()
            .await
            .map_err(|e| AdminError::InvalidResponse(e.to_string()))?;

        for site in entries.iter().filter(|e| e.is_site()) {
            self.migrate_one_site_config(org, &site.name).await?;
        }

        Ok(())
    }

    async fn migrate_one_site_config(&self, org: &OrgId, site: &str) -> Result<(), AdminError> {
        tracing::info!(org = %org, site = %site, "Migrating site config");

        let resp = self
            .authorized(
                self.http
                    .get(format!("{}/config/{}/{}", self.source_url, org, site)),
            )
            .send()
            .await?;

        match resp.status() {
            StatusCode::NOT_FOUND => {
                tracing::info!(org = %org, site = %site, "No site config to migrate");
                return Ok(());
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!(org = %org, site = %site, "Skipping site config: not authorized");
                return Ok(());
            }
            status if !status.is_success() => {
                return Err(AdminError::RequestFailed {
                    context: format!("fetch config for site '{site}'"),
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let document = resp.text().await?;
        self.post_config(
            &format!("{}/config/{}/{}", self.dest_url, org, site),
            document,
            &format!("create config for site '{site}'"),
        )
        .await
    }

    async fn post_config(
        &self,
        url: &str,
        document: String,
        context: &str,
    ) -> Result<(), AdminError> {
        let form = Form::new().text("config", document);
        let resp = self
            .authorized(self.http.post(url))
            .multipart(form)
            .send()
            .await?;
        Self::ensure_success(&resp, context)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, AdminError> {
        let resp = self.authorized(self.http.get(url)).send().await?;
        Self::ensure_success(&resp, context)?;
        resp.json()
            .await
            .map_err(|e| AdminError::InvalidResponse(e.to_string()))
    }

    fn ensure_success(resp: &reqwest::Response, context: &str) -> Result<(), AdminError> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(AdminError::RequestFailed {
                context: context.to_string(),
                status: resp.status().as_u16(),
            })
        }
    }
}
