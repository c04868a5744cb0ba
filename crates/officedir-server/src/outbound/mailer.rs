// SPDX-License-Identifier: Apache-2.0

use crate::config::ApiConfig;
use officedir_model::ContactRequest;
use serde_json::json;
use std::fmt::{Display, Formatter};
use tracing::error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundError(pub String);

impl Display for OutboundError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for OutboundError {}

/// Transactional-email client. The provider exposes a single
/// `POST {base}/v1/email` accepting from/to/reply_to plus text and HTML
/// bodies, authenticated with a bearer key.
pub struct Mailer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    from_email: String,
    from_name: String,
    to_email: String,
    to_name: String,
}

impl Mailer {
    /// Build a mailer when the API key is configured; callers treat
    /// `None` as a per-request configuration error.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Option<Self> {
        let api_key = config.mail_api_key.clone()?;
        let client = reqwest::Client::builder()
            .timeout(config.outbound_timeout)
            .build()
            .ok()?;
        Some(Self {
            client,
            api_key,
            base_url: config.mail_base_url.trim_end_matches('/').to_string(),
            from_email: config.mail_from_email.clone(),
            from_name: config.mail_from_name.clone(),
            to_email: config.mail_to_email.clone(),
            to_name: config.mail_to_name.clone(),
        })
    }

    pub async fn send_contact(&self, submission: &ContactRequest) -> Result<(), OutboundError> {
        let subject = "New Contact Form Submission";
        let text = contact_text_body(submission);
        let html = contact_html_body(submission);
        let payload = json!({
            "from": {"email": self.from_email, "name": self.from_name},
            "to": [{"email": self.to_email, "name": self.to_name}],
            "reply_to": {
                "email": submission.email,
                "name": submission.name.as_deref().unwrap_or("Contact Form Submitter"),
            },
            "subject": subject,
            "text": text,
            "html": html,
        });

        let response = self
            .client
            .post(format!("{}/v1/email", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| OutboundError(format!("email request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "email provider rejected submission");
            return Err(OutboundError(format!(
                "email provider returned {status}"
            )));
        }
        Ok(())
    }
}

fn contact_text_body(submission: &ContactRequest) -> String {
    format!(
        "New Contact Form Submission\n\nFrom: {}\nEmail: {}\nCompany: {}\n\nMessage:\n{}",
        submission.display_name(),
        submission.email,
        submission.display_company(),
        submission.message,
    )
}

fn contact_html_body(submission: &ContactRequest) -> String {
    let message_html = escape_html(&submission.message).replace('\n', "<br>");
    format!(
        concat!(
            "<!DOCTYPE html><html><body>",
            "<h1>New Contact Form Submission</h1>",
            "<p><strong>From:</strong> {from}</p>",
            "<p><strong>Email:</strong> <a href=\"mailto:{email}\">{email}</a></p>",
            "<p><strong>Company:</strong> {company}</p>",
            "<p><strong>Message:</strong></p><p>{message}</p>",
            "</body></html>",
        ),
        from = escape_html(submission.display_name()),
        email = escape_html(&submission.email),
        company = escape_html(submission.display_company()),
        message = message_html,
    )
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactRequest {
        ContactRequest {
            name: Some("Robin".to_string()),
            email: "robin@example.com".to_string(),
            company: None,
            message: "Line one\nLine <two>".to_string(),
        }
    }

    #[test]
    fn text_body_carries_all_fields() {
        let text = contact_text_body(&submission());
        assert!(text.contains("From: Robin"));
        assert!(text.contains("Email: robin@example.com"));
        assert!(text.contains("Company: Not provided"));
        assert!(text.contains("Line one\nLine <two>"));
    }

    #[test]
    fn html_body_escapes_and_breaks_lines() {
        let html = contact_html_body(&submission());
        assert!(html.contains("Line one<br>Line &lt;two&gt;"));
        assert!(html.contains("mailto:robin@example.com"));
    }

    #[test]
    fn mailer_requires_api_key() {
        let config = ApiConfig::default();
        assert!(Mailer::from_config(&config).is_none());

        let with_key = ApiConfig {
            mail_api_key: Some("key".to_string()),
            ..ApiConfig::default()
        };
        assert!(Mailer::from_config(&with_key).is_some());
    }
}
