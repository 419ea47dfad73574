//! SMTPS notifier implementation using lettre.

use std::fmt;

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use super::{BodyContext, BodyRenderer, Notifier, NotifyError, NotifyOutcome};
use crate::network::AddressSet;

/// Display name wrapping the sender address.
const SENDER_NAME: &str = "Sender";
/// Display name wrapping the receiver address.
const RECEIVER_NAME: &str = "Receiver";

/// Mail submission settings.
///
/// Every account field is optional: an unset value is only reported when
/// a notification is actually attempted, as a failed outcome.
#[derive(Clone, PartialEq, Eq)]
pub struct MailSettings {
    /// Sender address, also the login user.
    pub sender: Option<String>,
    /// Login password or app-specific authorization code.
    pub password: Option<String>,
    /// Receiver address.
    pub receiver: Option<String>,
    /// SMTP server host name.
    pub server: Option<String>,
    /// SMTPS port (implicit TLS).
    pub port: u16,
    /// Subject line.
    pub subject: String,
}

impl MailSettings {
    /// Default SMTPS port.
    pub const DEFAULT_PORT: u16 = 465;

    /// Default subject line.
    pub const DEFAULT_SUBJECT: &'static str = "ip";
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            sender: None,
            password: None,
            receiver: None,
            server: None,
            port: Self::DEFAULT_PORT,
            subject: Self::DEFAULT_SUBJECT.to_string(),
        }
    }
}

// Manual Debug impl so the password never reaches logs
impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("sender", &self.sender)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("receiver", &self.receiver)
            .field("server", &self.server)
            .field("port", &self.port)
            .field("subject", &self.subject)
            .finish()
    }
}

/// Sends single-part plain-text UTF-8 mail over SMTPS.
///
/// One connection per notification: connect with implicit TLS,
/// authenticate, send, quit. There are no retries.
///
/// # Example
///
/// ```
/// use ipnotify::notify::{BodyContext, BodyRenderer, MailSettings, SmtpNotifier};
///
/// let settings = MailSettings {
///     sender: Some("me@example.com".into()),
///     password: Some("app-code".into()),
///     receiver: Some("you@example.com".into()),
///     server: Some("smtp.example.com".into()),
///     ..MailSettings::default()
/// };
/// let notifier = SmtpNotifier::new(settings, BodyRenderer::default(), BodyContext::default());
/// ```
#[derive(Debug, Clone)]
pub struct SmtpNotifier {
    settings: MailSettings,
    renderer: BodyRenderer,
    context: BodyContext,
}

impl SmtpNotifier {
    /// Creates a notifier.
    #[must_use]
    pub const fn new(settings: MailSettings, renderer: BodyRenderer, context: BodyContext) -> Self {
        Self {
            settings,
            renderer,
            context,
        }
    }

    /// Returns the mail settings.
    #[must_use]
    pub const fn settings(&self) -> &MailSettings {
        &self.settings
    }

    /// Builds the message for `addresses` without sending it.
    ///
    /// # Errors
    ///
    /// Returns an error if the sender or receiver is unset or invalid,
    /// or the body fails to render.
    pub fn build_message(&self, addresses: &AddressSet) -> Result<Message, NotifyError> {
        let from = mailbox(SENDER_NAME, self.settings.sender.as_deref(), "SENDER")?;
        let to = mailbox(RECEIVER_NAME, self.settings.receiver.as_deref(), "RECEIVER")?;
        let body = self.renderer.render(addresses, &self.context)?;

        Ok(Message::builder()
            .from(from)
            .to(to)
            .subject(self.settings.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(body)?)
    }

    async fn deliver(&self, addresses: &AddressSet) -> Result<(), NotifyError> {
        let message = self.build_message(addresses)?;
        let server = required(self.settings.server.as_deref(), "SMTP_SERVER")?;
        let user = required(self.settings.sender.as_deref(), "SENDER")?;
        let password = required(self.settings.password.as_deref(), "PASSWORD")?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(server)?
            .port(self.settings.port)
            .credentials(Credentials::new(user.to_string(), password.to_string()))
            .build();

        tracing::debug!("Submitting mail via {server}:{}", self.settings.port);
        transport.send(message).await?;
        Ok(())
    }
}

impl Notifier for SmtpNotifier {
    async fn notify(&self, addresses: &AddressSet) -> NotifyOutcome {
        match self.deliver(addresses).await {
            Ok(()) => {
                tracing::debug!("Notification sent for {addresses}");
                NotifyOutcome::Sent
            }
            Err(e) => {
                tracing::error!("Notification failed: {e}");
                NotifyOutcome::failed(e)
            }
        }
    }
}

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, NotifyError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(NotifyError::MissingSetting(key))
}

fn mailbox(name: &str, address: Option<&str>, key: &'static str) -> Result<Mailbox, NotifyError> {
    let address = required(address, key)?;
    let parsed = address
        .parse::<Address>()
        .map_err(|source| NotifyError::InvalidAddress {
            address: address.to_string(),
            source,
        })?;
    Ok(Mailbox::new(Some(name.to_string()), parsed))
}

#[cfg(test)]
#[path = "smtp_tests.rs"]
mod tests;
