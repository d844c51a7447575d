//! Remote post publisher
//!
//! Creates the translated post on the target WordPress site through its REST
//! API, authenticating with a username + application password pair.

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::core::config::TargetSiteConfig;
use crate::core::errors::{Result, SyncError};
use crate::core::models::{CreatedPost, NewPost};

/// Publishing seam: push one finished post to the remote site
#[async_trait]
pub trait Publish: Send + Sync {
    /// Create the post remotely; success means HTTP 201
    async fn publish(&self, post: &NewPost) -> Result<CreatedPost>;
}

/// Publisher backed by the WordPress REST API
#[derive(Debug, Clone)]
pub struct WpRestPublisher {
    client: reqwest::Client,
    config: TargetSiteConfig,
}

impl WpRestPublisher {
    /// Create a new publisher
    ///
    /// TLS verification stays on unless the config explicitly opts out.
    pub fn new(config: TargetSiteConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if config.accept_invalid_certs {
            warn!("Publishing with TLS certificate verification disabled");
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = TargetSiteConfig::from_env()?;
        Self::new(config)
    }

    /// Post-creation endpoint on the target site
    fn posts_endpoint(&self) -> String {
        format!(
            "{}/wp-json/wp/v2/posts",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Publish for WpRestPublisher {
    async fn publish(&self, post: &NewPost) -> Result<CreatedPost> {
        let response = self
            .client
            .post(self.posts_endpoint())
            .basic_auth(&self.config.username, Some(&self.config.app_password))
            .json(post)
            .send()
            .await
            .map_err(|e| {
                error!("Error sending post to target site: {}", e);
                SyncError::Http(e)
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::CREATED {
            let created: CreatedPost =
                response.json().await.map_err(|e| SyncError::InvalidResponse {
                    message: format!("created-post body did not parse: {}", e),
                })?;

            debug!("Post created on target site with id {}", created.id);
            Ok(created)
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(
                "Publish request failed. Status code: {}, response: {}",
                status.as_u16(),
                body
            );
            Err(SyncError::Publish {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}
