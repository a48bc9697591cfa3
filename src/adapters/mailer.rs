use crate::common::error::ServiceResult;
use crate::settings::AppSettings;
use serde::Serialize;

#[derive(Serialize)]
struct MailMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    body: String,
}

/// Fires the welcome mail at the configured relay. Callers treat failure
/// as non-fatal; registration has already committed by the time this runs.
pub async fn send_welcome(email: &str, name: &str) -> ServiceResult<()> {
    let settings = AppSettings::get();
    let (Some(mailer_url), Some(sender)) =
        (settings.mailer_url.as_ref(), settings.mailer_sender.as_ref())
    else {
        tracing::warn!(email, "Mailer not configured, skipping welcome mail");
        return Ok(());
    };

    let message = MailMessage {
        from: sender,
        to: email,
        subject: "Welcome to Arena",
        body: format!(
            "Hi {name},\n\nYour account has been created. \
             You can now book grounds, join matches and follow your leagues.\n\n\
             See you on the pitch!"
        ),
    };
    let client = reqwest::Client::new();
    client
        .post(mailer_url)
        .json(&message)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
