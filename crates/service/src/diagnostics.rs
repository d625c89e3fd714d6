use serde::Serialize;

use crate::store::RecordStore;

/// Backend error messages are cut to this many characters in the report.
const ERROR_SNIPPET_LEN: usize = 50;
/// At most this many collection names are sampled.
const COLLECTION_SAMPLE: usize = 10;

/// Status report returned by `GET /test`. Every field degrades to a
/// descriptive string; building the report never fails and never mutates
/// state.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub async fn collect(store: &dyn RecordStore) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: "running".into(),
        database: "not available".into(),
        database_url: env_presence("DATABASE_URL"),
        database_name: env_presence("DATABASE_NAME"),
        connection_status: "not connected".into(),
        collections: Vec::new(),
    };

    if !store.available() {
        report.database = "available but not initialized".into();
        return report;
    }

    match store.collection_names(COLLECTION_SAMPLE).await {
        Ok(names) => {
            report.collections = names;
            report.database = "connected and working".into();
            report.connection_status = "connected".into();
        }
        Err(e) => {
            report.database = format!("connected but error: {}", snippet(&e.to_string()));
        }
    }

    report
}

fn env_presence(key: &str) -> String {
    let set = std::env::var(key).map(|v| !v.is_empty()).unwrap_or(false);
    if set { "set".into() } else { "not set".into() }
}

fn snippet(message: &str) -> String {
    message.chars().take(ERROR_SNIPPET_LEN).collect()
}
