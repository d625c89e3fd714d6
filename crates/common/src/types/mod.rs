use serde::Serialize;

/// Static identity payload served at `/` as a liveness probe.
#[derive(Serialize, Debug)]
pub struct Identity {
    pub brand: &'static str,
    pub status: &'static str,
}
