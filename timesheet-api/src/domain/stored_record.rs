//! Layout of the JSON blob kept in `timesheet.meta_data`.
//!
//! A blob is either the bare metadata record or an envelope that also carries
//! upload details:
//!
//! ```json
//! { "meta": { ... }, "extras": { "filename": "...", "pdf_text": "...", "notes": "..." } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use timesheet::StoredMetadata;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataExtras {
    pub filename: Option<String>,
    pub pdf_text: Option<String>,
    pub notes: Option<String>,
}

impl MetadataExtras {
    pub fn is_empty(&self) -> bool {
        self.filename.is_none() && self.pdf_text.is_none() && self.notes.is_none()
    }
}

/// Build the blob to store. Extras switch to the envelope layout.
pub fn to_stored_blob(meta: Value, extras: &MetadataExtras) -> Value {
    if extras.is_empty() {
        meta
    } else {
        json!({ "meta": meta, "extras": extras })
    }
}

/// Read the metadata record out of a stored blob, unwrapping an envelope.
pub fn from_stored_blob(blob: Value) -> Result<StoredMetadata, serde_json::Error> {
    let meta = match blob {
        Value::Object(mut fields) if fields.get("meta").is_some_and(Value::is_object) => fields
            .remove("meta")
            .unwrap_or_default(),
        other => other,
    };

    serde_json::from_value(meta)
}
