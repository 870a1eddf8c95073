use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

#[cfg(test)]
use mockall::automock;

use crate::config::MailConfig;
use crate::error::ContactError;

/// Hands a finished message to whatever delivers it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), ContactError>;
}

/// Delivers through the configured SMTP relay. A fresh transport is built for every
/// message, nothing is pooled between requests.
pub struct SmtpMailer {
    config: MailConfig,
}

impl SmtpMailer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, ContactError> {
        let host = self.config.host.as_deref().ok_or(ContactError::MissingConfig("EMAIL_HOST"))?;
        let username = self.config.username.clone().ok_or(ContactError::MissingConfig("EMAIL_USER"))?;
        let password = self.config.password.clone().ok_or(ContactError::MissingConfig("EMAIL_PASS"))?;

        // plain connection upgraded with STARTTLS when the relay offers it
        let tls = TlsParameters::new(host.to_string())?;

        Ok(AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(self.config.port)
            .tls(Tls::Opportunistic(tls))
            .credentials(Credentials::new(username, password))
            .timeout(Some(self.config.timeout))
            .build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: Message) -> Result<(), ContactError> {
        let transport = self.transport()?;
        tracing::debug!(
            "Connecting to {}:{}",
            self.config.host.as_deref().unwrap_or_default(),
            self.config.port
        );
        let response = transport.send(message).await?;
        tracing::info!("Contact email accepted by relay with code {}", response.code());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(host: Option<&str>) -> MailConfig {
        MailConfig {
            host: host.map(str::to_string),
            port: 1,
            username: Some("relay@example.com".to_string()),
            password: Some("secret".to_string()),
            to: Some("info@example.com".to_string()),
            timeout: Duration::from_secs(2),
        }
    }

    fn message() -> Message {
        Message::builder()
            .from("relay@example.com".parse().unwrap())
            .to("info@example.com".parse().unwrap())
            .subject("Neue Kontaktanfrage")
            .body("Name: Max".to_string())
            .unwrap()
    }

    #[tokio::test]
    async fn missing_host_fails_before_connecting() {
        let mailer = SmtpMailer::new(config(None));
        let result = mailer.send(message()).await;
        assert!(matches!(result, Err(ContactError::MissingConfig("EMAIL_HOST"))));
    }

    #[tokio::test]
    async fn unreachable_relay_is_a_transport_error() {
        let mailer = SmtpMailer::new(config(Some("127.0.0.1")));
        let result = mailer.send(message()).await;
        assert!(matches!(result, Err(ContactError::Transport(_))));
    }
}
