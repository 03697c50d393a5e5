use std::fmt;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::config::RobotConfig;
use crate::error::{Result, RobotError};
use crate::message::Message;
use crate::response::SendResult;
use crate::sign::signed_suffix;

/// A custom group robot, addressed by its webhook URL.
///
/// One instance can be reused for any number of sequential or concurrent
/// sends; `reqwest::Client` pools connections internally. The default client
/// has no request timeout, so supply one through [`Robot::with_http_client`]
/// when a send must not block indefinitely.
#[non_exhaustive]
#[derive(Clone)]
pub struct Robot {
    webhook: String,
    secret: Option<String>,
    client: Client,
}

impl fmt::Debug for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Robot")
            .field("webhook", &self.webhook)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl Robot {
    #[must_use]
    pub fn new(webhook: impl Into<String>) -> Self {
        Self {
            webhook: webhook.into(),
            secret: None,
            client: Client::new(),
        }
    }

    #[must_use]
    pub fn from_config(config: RobotConfig) -> Self {
        Self::from_config_with_client(config, Client::new())
    }

    #[must_use]
    pub fn from_config_with_client(config: RobotConfig, client: Client) -> Self {
        let mut robot = Self::new(config.webhook).with_http_client(client);
        if let Some(secret) = config.secret {
            robot.set_secret(secret);
        }
        robot
    }

    /// Sign every request with `secret`. An empty secret disables signing.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.set_secret(secret);
        self
    }

    /// Use a preconfigured client (timeouts, proxy, TLS settings, ...).
    #[must_use]
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn set_secret(&mut self, secret: impl Into<String>) {
        let secret = secret.into();
        self.secret = (!secret.is_empty()).then_some(secret);
    }

    pub fn set_http_client(&mut self, client: Client) {
        self.client = client;
    }

    #[must_use]
    pub fn webhook(&self) -> &str {
        &self.webhook
    }

    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.secret.is_some()
    }

    /// URL for the next request. Signed URLs carry the current timestamp, so
    /// two calls never return the same value.
    #[must_use]
    pub fn request_url(&self) -> String {
        match self.secret.as_deref() {
            Some(secret) => format!("{}{}", self.webhook, signed_suffix(secret)),
            None => self.webhook.clone(),
        }
    }

    pub async fn send_text(
        &self,
        content: &str,
        at_mobiles: &[String],
        is_at_all: bool,
    ) -> Result<()> {
        self.send(&Message::text(content, at_mobiles.to_vec(), is_at_all))
            .await
    }

    pub async fn send_link(
        &self,
        title: &str,
        text: &str,
        message_url: &str,
        pic_url: &str,
    ) -> Result<()> {
        self.send(&Message::link(title, text, message_url, pic_url))
            .await
    }

    pub async fn send_markdown(
        &self,
        title: &str,
        text: &str,
        at_mobiles: &[String],
        is_at_all: bool,
    ) -> Result<()> {
        self.send(&Message::markdown(title, text, at_mobiles.to_vec(), is_at_all))
            .await
    }

    pub async fn send_action_card(
        &self,
        title: &str,
        text: &str,
        single_title: &str,
        single_url: &str,
        btn_orientation: &str,
        hide_avatar: &str,
    ) -> Result<()> {
        self.send(&Message::action_card(
            title,
            text,
            single_title,
            single_url,
            btn_orientation,
            hide_avatar,
        ))
        .await
    }

    /// Posts `message` once. Nothing is retried; every failure is returned to
    /// the caller as-is.
    pub async fn send(&self, message: &Message) -> Result<()> {
        let body = serde_json::to_vec(message).map_err(RobotError::Serialize)?;

        debug!(
            "sending {} message (signed: {})",
            message.msgtype(),
            self.is_signed()
        );

        let response = self
            .client
            .post(self.request_url())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        // The status line is not checked: the endpoint reports failures in `errcode`.
        let bytes = response.bytes().await?;

        let result: SendResult =
            serde_json::from_slice(&bytes).map_err(|source| RobotError::ParseResponse {
                source,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })?;

        if !result.is_success() {
            warn!(
                "robot rejected {} message: {} - {}",
                message.msgtype(),
                result.errcode,
                result.errmsg
            );
            return result.into_result();
        }

        debug!("{} message delivered", message.msgtype());
        Ok(())
    }
}
