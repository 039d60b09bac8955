//! Unread-notification badge.
//!
//! One request per page load, no retry and no timeout. A request that never
//! resolves leaves the badge in the hidden state it was rendered with.

use shared::{SessionIdentity, UnreadCount, dom::Badge};

use crate::{Error, ShellConfig};

#[derive(Debug, Clone)]
pub struct UnreadClient {
    client: reqwest::Client,
    api_url: String,
}

impl UnreadClient {
    pub fn new(config: &ShellConfig) -> Self {
        UnreadClient {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
        }
    }

    pub fn endpoint(&self, identity: &SessionIdentity) -> String {
        format!(
            "{}/users/{}/notifications/unread-count",
            self.api_url,
            identity.url_encoded()
        )
    }

    pub async fn fetch(&self, identity: &SessionIdentity) -> Result<UnreadCount, Error> {
        let response = self.client.get(self.endpoint(identity)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(UnreadCount::from_json(&body)?)
    }

    /// Fetches the count and applies it to `badge`. Without a badge no request
    /// is made. On error the badge is left untouched and the error is handed
    /// back for logging.
    pub async fn decorate<B: Badge>(
        &self,
        badge: Option<B>,
        identity: &SessionIdentity,
    ) -> Result<(), Error> {
        let Some(badge) = badge else {
            return Ok(());
        };
        match self.fetch(identity).await {
            Ok(count) => {
                apply(&badge, count);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to fetch unread count for {}: {}", identity, e);
                Err(e)
            }
        }
    }
}

pub fn apply(badge: &impl Badge, count: UnreadCount) {
    match count.badge_text() {
        Some(text) => badge.show(&text),
        None => badge.hide(),
    }
}
