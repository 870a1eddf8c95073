use lettre::message::{Mailbox, MultiPart};
use lettre::{Address, Message};
use quick_xml::escape::escape;

use crate::config::MailConfig;
use crate::error::ContactError;
use crate::handlers::contact_dtos::ValidatedContactRequest;

pub const SENDER_NAME: &str = "AgentFlow Integrations";
pub const SUBJECT: &str = "Neue Kontaktanfrage";

fn parse_address(address: &str) -> Result<Address, ContactError> {
    address.parse::<Address>().map_err(|e| ContactError::Address {
        address: address.to_string(),
        source: e,
    })
}

/// (label, value) pairs in the order they appear in the email.
fn fields<'a>(request: &'a ValidatedContactRequest<'_>) -> Vec<(&'static str, &'a str)> {
    let mut fields = vec![
        ("Name", request.name),
        ("E-Mail", request.email),
        ("Nachricht", request.message),
    ];
    if let Some(area) = request.area {
        fields.push(("Bereich", area));
    }
    fields
}

pub fn plain_body(request: &ValidatedContactRequest<'_>) -> String {
    fields(request)
        .iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn html_body(request: &ValidatedContactRequest<'_>) -> String {
    fields(request)
        .iter()
        .map(|(label, value)| format!("<p><strong>{}:</strong> {}</p>", label, escape(*value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the notification sent to the site operator. The relay user doubles as the sender
/// address, replies go straight to whoever filled in the form.
pub fn compose(config: &MailConfig, request: &ValidatedContactRequest<'_>) -> Result<Message, ContactError> {
    let from_address = config.username.as_deref().ok_or(ContactError::MissingConfig("EMAIL_USER"))?;
    let to_address = config.to.as_deref().ok_or(ContactError::MissingConfig("EMAIL_TO"))?;

    let from = Mailbox::new(Some(SENDER_NAME.to_string()), parse_address(from_address)?);
    let to = Mailbox::new(None, parse_address(to_address)?);
    let reply_to = Mailbox::new(Some(request.name.to_string()), request.reply_to.clone());

    let message = Message::builder()
        .from(from)
        .reply_to(reply_to)
        .to(to)
        .subject(SUBJECT)
        .multipart(MultiPart::alternative_plain_html(
            plain_body(request),
            html_body(request),
        ))?;

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn mail_config() -> MailConfig {
        MailConfig {
            host: Some("smtp.example.com".to_string()),
            port: 587,
            username: Some("relay@agentflow-integrations.com".to_string()),
            password: Some("secret".to_string()),
            to: Some("info@agentflow-integrations.com".to_string()),
            timeout: Duration::from_secs(30),
        }
    }

    fn validated<'a>(name: &'a str, message: &'a str) -> ValidatedContactRequest<'a> {
        ValidatedContactRequest {
            name,
            email: "max@example.com",
            reply_to: "max@example.com".parse().unwrap(),
            message,
            area: None,
        }
    }

    #[test]
    fn plain_body_lists_all_fields() {
        let request = validated("Max", "Interesse an KI-Lösungen");
        assert_eq!(
            plain_body(&request),
            "Name: Max\nE-Mail: max@example.com\nNachricht: Interesse an KI-Lösungen"
        );
    }

    #[test]
    fn area_is_appended_when_present() {
        let mut request = validated("Max", "Hallo");
        request.area = Some("social-media");
        assert!(plain_body(&request).ends_with("\nBereich: social-media"));
        assert!(html_body(&request).contains("<p><strong>Bereich:</strong> social-media</p>"));
    }

    #[test]
    fn html_body_escapes_markup() {
        let request = validated("<script>alert(1)</script>", "a & b");
        let html = html_body(&request);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn composes_headers_for_the_operator() {
        let request = validated("Max", "Interesse an KI-Lösungen");
        let message = compose(&mail_config(), &request).unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("Subject: Neue Kontaktanfrage"));
        assert!(formatted.contains("info@agentflow-integrations.com"));
        assert!(formatted.contains("AgentFlow Integrations"));
        assert!(formatted.contains("<relay@agentflow-integrations.com>"));
        assert!(formatted.contains("Reply-To: Max <max@example.com>"));
        assert!(formatted.contains("multipart/alternative"));
    }

    #[test]
    fn missing_recipient_is_a_config_error() {
        let mut config = mail_config();
        config.to = None;
        let request = validated("Max", "Hallo");
        assert!(matches!(
            compose(&config, &request),
            Err(ContactError::MissingConfig("EMAIL_TO"))
        ));
    }
}
