use serde::{Deserialize, Serialize};

/// One question/answer pair shown on a treatment page.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Read-only catalog entry describing a treatment offered by the clinic.
/// Used for typing only; never persisted through the public endpoints.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Service {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub details: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub faqs: Option<Vec<Faq>>,
    pub price_hint: Option<String>,
}
