use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

/// Location of the descriptor catalog, relative to the hosting page.
pub const DATA_URL: &str = "data.json";

/// Identifier of the element that receives rendered figures.
pub const GALLERY_ID: &str = "gallery";

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub leptos_options: std::sync::Arc<LeptosOptions>,
    /// Catalog generated at startup; `None` means `data.json` is a static file.
    pub catalog: Option<std::sync::Arc<Vec<ImageDescriptor>>>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

/// One image to render: where to load it from, its alt text and its caption.
///
/// Every field is optional. A missing field leaves the matching attribute
/// unset (or the caption empty) instead of rejecting the descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl ImageDescriptor {
    pub fn new(
        src: impl Into<String>,
        alt: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            src: Some(src.into()),
            alt: Some(alt.into()),
            caption: Some(caption.into()),
        }
    }

    /// Reads a descriptor out of one element of the catalog array.
    ///
    /// Strings are taken verbatim, numbers and booleans are stringified, and
    /// anything else (null, nested objects, arrays, or a non-object element)
    /// leaves the field empty.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(scalar_to_string);
        Self {
            src: field("src"),
            alt: field("alt"),
            caption: field("caption"),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Name of a JSON value's kind, used when the catalog has the wrong shape.
#[must_use]
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
