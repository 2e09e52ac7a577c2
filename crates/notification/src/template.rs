use techfolks_inquiry::InquiryPayload;

/// Message sent to the staff mailbox.
#[derive(askama::Template)]
#[template(path = "inquiry-notification.txt")]
pub struct InquiryNotificationTemplate<'a> {
    pub payload: &'a InquiryPayload,
}

/// Acknowledgement sent back to the client.
#[derive(askama::Template)]
#[template(path = "inquiry-auto-reply.txt")]
pub struct InquiryAutoReplyTemplate<'a> {
    pub payload: &'a InquiryPayload,
    pub support_phone: &'a str,
}

pub fn render<T: askama::Template>(template: T) -> anyhow::Result<String> {
    Ok(template.render()?)
}
