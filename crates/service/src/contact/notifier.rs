use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use configs::MailConfig;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use models::contacts;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("mail transport error: {0}")]
    Transport(String),
    #[error("mail provider rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Side channel told about every stored contact submission.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, contact: &contacts::Model) -> Result<(), NotifyError>;
}

/// Payload accepted by the Resend `POST /emails` endpoint.
#[derive(Debug, Serialize)]
pub struct EmailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub reply_to: String,
    pub html: String,
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the notification mail for a submission. User input is escaped.
pub fn render_message(contact: &contacts::Model, from: &str, recipient: &str) -> EmailMessage {
    let mut rows = format!(
        "<p><strong>Name:</strong> {}</p>\n<p><strong>Email:</strong> {}</p>\n",
        escape_html(&contact.name),
        escape_html(&contact.email),
    );
    if let Some(phone) = &contact.phone {
        rows.push_str(&format!("<p><strong>Phone:</strong> {}</p>\n", escape_html(phone)));
    }
    if let Some(company) = &contact.company {
        rows.push_str(&format!("<p><strong>Company:</strong> {}</p>\n", escape_html(company)));
    }
    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
<h2 style="color: #3b82f6;">New Contact Form Submission</h2>
<div style="background: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;">
{rows}<p><strong>Message:</strong></p>
<p style="white-space: pre-wrap;">{message}</p>
</div>
<p style="color: #6b7280; font-size: 14px;">This message was sent from your website contact form.</p>
</div>"#,
        message = escape_html(&contact.message),
    );

    EmailMessage {
        from: from.to_string(),
        to: vec![recipient.to_string()],
        subject: format!("New Contact Form Submission from {}", contact.name),
        reply_to: contact.email.clone(),
        html,
    }
}

/// Sends notifications through the Resend HTTP API.
pub struct ResendNotifier {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    from: String,
    recipient: String,
}

impl ResendNotifier {
    pub fn new(cfg: &MailConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            api_key: cfg.api_key.clone(),
            endpoint: cfg.endpoint.clone(),
            from: cfg.from.clone(),
            recipient: cfg.recipient.clone(),
        })
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn notify(&self, contact: &contacts::Model) -> Result<(), NotifyError> {
        let msg = render_message(contact, &self.from, &self.recipient);
        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&msg)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected { status: status.as_u16(), body });
        }
        debug!(contact_id = %contact.id, "notification accepted by provider");
        Ok(())
    }
}

/// Used when no provider key is configured: records the skip and succeeds.
#[derive(Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, contact: &contacts::Model) -> Result<(), NotifyError> {
        info!(contact_id = %contact.id, "mail provider not configured; notification skipped");
        Ok(())
    }
}

/// Pick the notifier matching the mail config.
pub fn from_config(cfg: &MailConfig) -> Arc<dyn Notifier> {
    if !cfg.is_enabled() {
        warn!("RESEND_API_KEY not set; contact notifications will only be logged");
        return Arc::new(LogNotifier);
    }
    match ResendNotifier::new(cfg) {
        Ok(n) => Arc::new(n),
        Err(e) => {
            warn!(err = %e, "cannot build mail client; contact notifications will only be logged");
            Arc::new(LogNotifier)
        }
    }
}

/// In-memory notifiers for tests and local experiments
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Remembers the ids of every contact it was told about.
    #[derive(Default)]
    pub struct RecordingNotifier {
        seen: Mutex<Vec<String>>,
    }

    impl RecordingNotifier {
        pub fn seen(&self) -> Vec<String> {
            self.seen.lock().map(|v| v.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, contact: &contacts::Model) -> Result<(), NotifyError> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(contact.id.clone());
            }
            Ok(())
        }
    }

    /// Always fails, like a provider that is down.
    #[derive(Default)]
    pub struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn notify(&self, _contact: &contacts::Model) -> Result<(), NotifyError> {
            Err(NotifyError::Transport("connection refused".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn contact(phone: Option<&str>) -> contacts::Model {
        contacts::Model {
            id: "c-1".into(),
            name: "Eve <script>".into(),
            email: "eve@example.com".into(),
            phone: phone.map(str::to_string),
            company: None,
            message: "Hi & bye".into(),
            status: contacts::STATUS_NEW.into(),
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn message_escapes_user_input() {
        let msg = render_message(&contact(None), "site <a@b.dev>", "ops@example.com");
        assert!(msg.html.contains("Eve &lt;script&gt;"));
        assert!(msg.html.contains("Hi &amp; bye"));
        assert!(!msg.html.contains("<script>"));
        assert_eq!(msg.to, vec!["ops@example.com".to_string()]);
        assert_eq!(msg.reply_to, "eve@example.com");
        assert_eq!(msg.subject, "New Contact Form Submission from Eve <script>");
    }

    #[test]
    fn optional_rows_only_when_present() {
        let without = render_message(&contact(None), "f", "t@e.com");
        assert!(!without.html.contains("Phone:"));
        assert!(!without.html.contains("Company:"));
        let with = render_message(&contact(Some("+1 555")), "f", "t@e.com");
        assert!(with.html.contains("<strong>Phone:</strong> +1 555"));
    }

    #[tokio::test]
    async fn disabled_config_falls_back_to_log_notifier() {
        let n = from_config(&MailConfig::default());
        assert!(n.notify(&contact(None)).await.is_ok());
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_transport_error() {
        let cfg = MailConfig {
            api_key: "re_test".into(),
            endpoint: "http://127.0.0.1:9/emails".into(),
            timeout_secs: 2,
            ..MailConfig::default()
        };
        let n = ResendNotifier::new(&cfg).unwrap();
        let err = n.notify(&contact(None)).await.unwrap_err();
        assert!(matches!(err, NotifyError::Transport(_)));
    }
}
