//! Page Configuration
//!
//! Reads the optional JSON blocks the server embeds in the page.

use form_enhance::EnhanceConfig;
use web_sys::Document;

use crate::models::SignupCode;

/// `<script type="application/json">` holding an `EnhanceConfig`
pub const CONFIG_SCRIPT_ID: &str = "form-enhance-config";
/// `<script type="application/json">` holding the signup codes to render
pub const DATA_SCRIPT_ID: &str = "signup-codes-data";

/// Selectors from the page, or the defaults when the page has none
pub fn load_config(doc: &Document) -> Result<EnhanceConfig, String> {
    match script_text(doc, CONFIG_SCRIPT_ID) {
        Some(json) => parse_config(&json),
        None => Ok(EnhanceConfig::default()),
    }
}

/// Codes to render with Leptos; `None` means the markup is server-rendered
pub fn load_signup_codes(doc: &Document) -> Result<Option<Vec<SignupCode>>, String> {
    script_text(doc, DATA_SCRIPT_ID)
        .map(|json| parse_signup_codes(&json))
        .transpose()
}

pub fn parse_config(json: &str) -> Result<EnhanceConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse {}: {}", CONFIG_SCRIPT_ID, e))
}

pub fn parse_signup_codes(json: &str) -> Result<Vec<SignupCode>, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse {}: {}", DATA_SCRIPT_ID, e))
}

fn script_text(doc: &Document, id: &str) -> Option<String> {
    doc.get_element_by_id(id).and_then(|el| el.text_content())
}
