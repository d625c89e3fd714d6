//! Record schemas for the Monter Medical Skin Care backend.
//!
//! Each writable kind maps to one storage collection named after the
//! lowercase kind: Booking -> "booking", Message -> "message",
//! Newsletter -> "newsletter". The catalog types (`Service`, `Faq`) are
//! read-only descriptors and are never persisted through the public
//! endpoints.

use std::fmt;

pub mod booking;
pub mod catalog;
pub mod message;
pub mod newsletter;

pub use booking::Booking;
pub use catalog::{Faq, Service};
pub use message::Message;
pub use newsletter::Newsletter;

/// A writable record kind and its storage collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Booking,
    Message,
    Newsletter,
}

impl RecordKind {
    pub fn collection(self) -> &'static str {
        match self {
            RecordKind::Booking => "booking",
            RecordKind::Message => "message",
            RecordKind::Newsletter => "newsletter",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}
