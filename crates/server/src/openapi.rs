use utoipa::OpenApi;
use utoipa::ToSchema;

// Doc-only schema mirrors; the wire structs live in the models crate.

#[derive(ToSchema)]
pub struct IdentityDoc {
    pub brand: String,
    pub status: String,
}

#[derive(ToSchema)]
pub struct CreatedDoc {
    pub id: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct BookingDoc {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub category: String,
    /// ISO calendar date, e.g. 2026-09-15
    pub preferred_date: Option<String>,
    pub notes: Option<String>,
    pub agree_policy: bool,
}

#[derive(ToSchema)]
pub struct MessageDoc {
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct NewsletterDoc {
    pub email: String,
    pub consent: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root,
        crate::routes::test_database,
        crate::records::create_booking,
        crate::records::list_bookings,
        crate::records::create_message,
        crate::records::subscribe_newsletter,
    ),
    components(
        schemas(
            IdentityDoc,
            CreatedDoc,
            BookingDoc,
            MessageDoc,
            NewsletterDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "bookings"),
        (name = "messages"),
        (name = "newsletter")
    )
)]
pub struct ApiDoc;
