//! TwiML message replies.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

/// Wrap `text` in a TwiML `<Message>` reply. Always 200: failures are
/// reported to the texter in the message body.
pub fn message(text: &str) -> Response {
    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response><Message><Body>{}</Body></Message></Response>\n",
        xml_escape(text)
    );
    ([(header::CONTENT_TYPE, "text/xml; charset=utf-8")], body).into_response()
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
