//! Contact notification message template (Telegram HTML parse mode).

use folio_db::models::contact::ContactSubmission;

/// Longest message excerpt included in a notification, in characters.
pub const MAX_MESSAGE_PREVIEW_CHARS: usize = 500;

/// Render the notification text for `submission`.
///
/// User-supplied values are HTML-escaped; the message body is cut to
/// [`MAX_MESSAGE_PREVIEW_CHARS`] characters with a trailing `...`.
pub fn render(submission: &ContactSubmission) -> String {
    let phone = submission
        .phone
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(escape_html)
        .unwrap_or_else(|| "Not provided".to_string());
    let ip = submission
        .ip_address
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| "Not available".to_string());
    let consent = if submission.consent_given { "Yes" } else { "No" };

    format!(
        "🔔 <b>New Contact Form Submission</b>\n\n\
         👤 <b>Name:</b> {name}\n\
         📧 <b>Email:</b> {email}\n\
         📞 <b>Phone:</b> {phone}\n\n\
         💬 <b>Message:</b>\n{message}\n\n\
         📅 <b>Submitted:</b> {submitted}\n\
         🌐 <b>IP:</b> {ip}\n\
         ✅ <b>Consent:</b> {consent}",
        name = escape_html(&submission.name),
        email = escape_html(&submission.email),
        message = escape_html(&truncate_chars(&submission.message, MAX_MESSAGE_PREVIEW_CHARS)),
        submitted = submission.submitted_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

/// Cut `text` to at most `max` characters, appending `...` when shortened.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Escape the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
