//! Page-level configuration of the product form
//!
//! Defaults match the catalog admin markup. A page can override any subset
//! of fields with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="product-form-config">
//!   { "edit_enabled": false }
//! </script>
//! ```

use serde::Deserialize;
use web_sys::Document;

/// Id of the optional inline JSON override
pub const CONFIG_ELEMENT_ID: &str = "product-form-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    // anchors
    pub add_trigger_id: String,
    pub close_trigger_id: String,
    pub overlay_selector: String,
    pub name_input_id: String,
    pub price_input_id: String,
    pub save_control_id: String,
    pub edit_trigger_selector: String,

    // endpoints
    pub create_endpoint: String,
    pub update_endpoint: String,

    /// CSS `display` value used when the overlay is shown
    pub overlay_display: String,

    /// Bind row edit triggers. Off gives a create-only form.
    pub edit_enabled: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            add_trigger_id: "add-btn".to_string(),
            close_trigger_id: "productCloseButton".to_string(),
            overlay_selector: ".bg-modal".to_string(),
            name_input_id: "productNameId".to_string(),
            price_input_id: "productPriceId".to_string(),
            save_control_id: "productSaveButton".to_string(),
            edit_trigger_selector: ".edit-btn".to_string(),
            create_endpoint: "/create".to_string(),
            update_endpoint: "/update".to_string(),
            overlay_display: "flex".to_string(),
            edit_enabled: true,
        }
    }
}

impl FormConfig {
    /// Missing keys keep their default values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Load configuration for the current page
///
/// Search order:
/// 1. Inline `<script id="product-form-config">` JSON
/// 2. Falls back to defaults (also when the inline JSON is malformed)
pub fn load_config(document: &Document) -> FormConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        log::debug!("no #{} element, using default form config", CONFIG_ELEMENT_ID);
        return FormConfig::default();
    };

    let text = element.text_content().unwrap_or_default();
    match FormConfig::from_json(&text) {
        Ok(config) => {
            log::info!("loaded form config from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(err) => {
            log::warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, err);
            FormConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.create_endpoint, "/create");
        assert_eq!(config.update_endpoint, "/update");
        assert_eq!(config.overlay_selector, ".bg-modal");
        assert!(config.edit_enabled);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = FormConfig::from_json("{}").unwrap();
        assert_eq!(config, FormConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config =
            FormConfig::from_json(r#"{ "edit_enabled": false, "create_endpoint": "/products/new" }"#)
                .unwrap();
        assert!(!config.edit_enabled);
        assert_eq!(config.create_endpoint, "/products/new");
        assert_eq!(config.update_endpoint, "/update");
        assert_eq!(config.name_input_id, "productNameId");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(FormConfig::from_json("{ edit_enabled: nope").is_err());
        assert!(FormConfig::from_json(r#"{ "edit_enabled": "yes" }"#).is_err());
    }
}
