//! Enhancement Configuration
//!
//! Selectors used to find the elements to enhance. Every field falls back to
//! the markup the admin pages render, so an empty JSON object is valid.

use serde::{Deserialize, Serialize};

/// Page-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    /// Checkbox group to bind; `None` for pages without one
    pub group: Option<GroupSelectors>,
    pub loader: LoaderSelectors,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            group: Some(GroupSelectors::default()),
            loader: LoaderSelectors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupSelectors {
    /// Id of the select-all checkbox
    pub select_all_id: String,
    /// `name` attribute shared by the item checkboxes
    pub item_name: String,
    /// Id of the hidden field receiving the joined tokens
    pub output_id: String,
}

impl Default for GroupSelectors {
    fn default() -> Self {
        Self {
            select_all_id: "select-all".to_string(),
            item_name: "code-checkbox".to_string(),
            output_id: "codes".to_string(),
        }
    }
}

impl GroupSelectors {
    pub fn item_selector(&self) -> String {
        format!("input[name='{}']", self.item_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSelectors {
    pub form: String,
    pub indicator: String,
    pub submit_button: String,
    /// Class toggled on indicators
    pub hidden_class: String,
}

impl Default for LoaderSelectors {
    fn default() -> Self {
        Self {
            form: "form".to_string(),
            indicator: "[data-loader]".to_string(),
            submit_button: "button[type=submit]".to_string(),
            hidden_class: "hidden".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: EnhanceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EnhanceConfig::default());
        assert_eq!(config.group.unwrap().item_selector(), "input[name='code-checkbox']");
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{ "group": { "item_name": "user-checkbox" }, "loader": { "hidden_class": "invisible" } }"#;
        let config: EnhanceConfig = serde_json::from_str(json).unwrap();

        let group = config.group.unwrap();
        assert_eq!(group.item_name, "user-checkbox");
        assert_eq!(group.select_all_id, "select-all");
        assert_eq!(config.loader.hidden_class, "invisible");
        assert_eq!(config.loader.indicator, "[data-loader]");
    }

    #[test]
    fn test_null_group_disables_binding() {
        let config: EnhanceConfig = serde_json::from_str(r#"{ "group": null }"#).unwrap();
        assert!(config.group.is_none());
    }
}
