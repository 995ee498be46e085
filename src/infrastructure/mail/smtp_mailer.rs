use async_trait::async_trait;
use mail_builder::MessageBuilder;
use mail_send::SmtpClientBuilder;

use crate::application::ports::{HtmlEmail, Mailer, MailerError};
use crate::presentation::config::EmailSettings;

/// SMTP adapter. A fresh connection per send; this pipeline emails at most
/// once per invocation.
pub struct SmtpMailer {
    host: String,
    port: u16,
    credentials: Option<(String, String)>,
    implicit_tls: bool,
}

impl SmtpMailer {
    pub fn new(settings: &EmailSettings) -> Self {
        let credentials = match (&settings.username, &settings.password) {
            (Some(user), Some(pass)) => Some((user.clone(), pass.clone())),
            _ => None,
        };
        Self {
            host: settings.smtp_host.clone(),
            port: settings.smtp_port,
            credentials,
            implicit_tls: settings.implicit_tls,
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_html(&self, email: &HtmlEmail) -> Result<(), MailerError> {
        let message = MessageBuilder::new()
            .from(email.from.as_str())
            .to(email.to.as_str())
            .subject(email.subject.as_str())
            .html_body(email.html_body.as_str());

        let mut builder =
            SmtpClientBuilder::new(self.host.clone(), self.port).implicit_tls(self.implicit_tls);
        if let Some((user, pass)) = &self.credentials {
            builder = builder.credentials((user.clone(), pass.clone()));
        }

        let mut client = builder
            .connect()
            .await
            .map_err(|e| MailerError::ConnectionFailed(e.to_string()))?;

        client
            .send(message)
            .await
            .map_err(|e| MailerError::SendFailed(e.to_string()))?;

        tracing::debug!(to = %email.to, "Email handed to SMTP relay");
        Ok(())
    }
}
