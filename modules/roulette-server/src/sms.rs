use std::sync::Arc;

use axum::{extract::State, response::Response, Form};
use serde::Deserialize;
use tracing::{debug, error};

use roulette_core::parse_request;

use crate::{twiml, AppState};

pub const HELP_TEXT: &str = r#"Welcome to Yelp Roulette!

Randomly select a restaurant/business in a specific location that match provided criteria.
Usage:
Provide a seed search term to select a business. Use key phrases to filter businesses by location, price, etc.
Key Phrases:
- "in": Used to provide a location (e.g. Santa Barbara, CA)
- "within": Provide a search radius with optional units. Default is in meters. (e.g. 10mi, 15 km)
- "$", "$$", "$$$", "$$$$": price levels of businesses to include. If none are provided, all price levels are included.
- "open": restrict search to businesses that are currently open.
Examples:
- "dinner in Santa Barbara, CA"
- "breakfast in NYC open $ $$"
- "italian food in Austin, TX within 10 miles"
"#;

pub const SEARCH_FAILED_TEXT: &str =
    "Sorry, there was an issue processing your request. Please try again later.";

/// Inbound SMS webhook payload. Only the message text is used.
#[derive(Debug, Deserialize)]
pub struct SmsForm {
    #[serde(rename = "Body", default)]
    pub body: String,
}

pub async fn sms_webhook(State(state): State<Arc<AppState>>, Form(form): Form<SmsForm>) -> Response {
    twiml::message(&reply(&state, &form.body).await)
}

pub async fn help() -> &'static str {
    HELP_TEXT
}

/// Text to send back for an inbound message.
pub async fn reply(state: &AppState, body: &str) -> String {
    let mut request = match parse_request(body) {
        Ok(request) => request,
        Err(e) => return format!("ERROR: {e}\n\n{HELP_TEXT}"),
    };
    debug!(?request, "Parsed SMS request");

    if request.location.is_empty() {
        return HELP_TEXT.to_string();
    }

    request.max_sample_size = state.max_sample_size;

    match state.sampler.random_business(&request).await {
        Ok(business) => format!("{} - {}\n{}", business.name, business.price, business.url),
        Err(e) => {
            error!(error = %e, "Querying for random business failed");
            SEARCH_FAILED_TEXT.to_string()
        }
    }
}
