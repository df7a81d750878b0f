//! Конфигурация страницы, передаваемая из шаблона в точки входа
//! `initializeFormFields` и `initializeBulkActions`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Лимиты символов по умолчанию (по id поля)
pub const DEFAULT_CHARACTER_LIMITS: &[(&str, u32)] = &[
    ("title", 255),
    ("description", 1000),
    ("header", 100),
    ("message", 500),
    ("url", 500),
];

pub const DEFAULT_SELECT_ALL_ID: &str = "selectAll";
pub const DEFAULT_CHECKBOX_SELECTOR: &str = ".form-check-input:not(#selectAll)";
pub const DEFAULT_BULK_BUTTON_SELECTOR: &str = ".bulk-action-btn";
pub const DEFAULT_AUTO_RESIZE_MIN_HEIGHT: i32 = 100;

fn enabled() -> bool {
    true
}

fn default_select_all_id() -> String {
    DEFAULT_SELECT_ALL_ID.to_string()
}

fn default_checkbox_selector() -> String {
    DEFAULT_CHECKBOX_SELECTOR.to_string()
}

fn default_bulk_button_selector() -> String {
    DEFAULT_BULK_BUTTON_SELECTOR.to_string()
}

fn default_min_height() -> i32 {
    DEFAULT_AUTO_RESIZE_MIN_HEIGHT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    #[serde(default = "enabled")]
    pub enable_character_count: bool,
    #[serde(default = "enabled")]
    pub enable_auto_resize: bool,
    #[serde(default = "enabled")]
    pub enable_real_time_validation: bool,
    #[serde(default = "enabled")]
    pub enable_preview: bool,
    /// `#validFrom` по умолчанию сегодня, `#validTo` не раньше `#validFrom`
    #[serde(default = "enabled")]
    pub enable_date_defaults: bool,
    /// Пользовательские лимиты, накладываются поверх значений по умолчанию
    #[serde(default)]
    pub character_limits: BTreeMap<String, u32>,
    #[serde(default = "default_min_height")]
    pub auto_resize_min_height: i32,
    #[serde(flatten)]
    pub selection: SelectionConfig,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            enable_character_count: true,
            enable_auto_resize: true,
            enable_real_time_validation: true,
            enable_preview: true,
            enable_date_defaults: true,
            character_limits: BTreeMap::new(),
            auto_resize_min_height: DEFAULT_AUTO_RESIZE_MIN_HEIGHT,
            selection: SelectionConfig::default(),
        }
    }
}

impl PortalConfig {
    /// Итоговые лимиты: значения по умолчанию, переопределённые пользовательскими
    pub fn effective_character_limits(&self) -> BTreeMap<String, u32> {
        let mut limits: BTreeMap<String, u32> = DEFAULT_CHARACTER_LIMITS
            .iter()
            .map(|(name, limit)| (name.to_string(), *limit))
            .collect();
        for (name, limit) in &self.character_limits {
            limits.insert(name.clone(), *limit);
        }
        limits
    }
}

/// Селекторы чекбоксов и кнопок массовых операций
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConfig {
    #[serde(default = "default_select_all_id")]
    pub select_all_id: String,
    #[serde(default = "default_checkbox_selector")]
    pub checkbox_selector: String,
    #[serde(default = "default_bulk_button_selector")]
    pub bulk_button_selector: String,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            select_all_id: default_select_all_id(),
            checkbox_selector: default_checkbox_selector(),
            bulk_button_selector: default_bulk_button_selector(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config: PortalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PortalConfig::default());
        assert!(config.enable_character_count);
        assert!(config.enable_date_defaults);
        assert_eq!(config.selection.select_all_id, "selectAll");
    }

    #[test]
    fn test_camel_case_keys() {
        let config: PortalConfig = serde_json::from_str(
            r#"{
                "enablePreview": false,
                "characterLimits": {"title": 80, "summary": 300},
                "selectAllId": "checkAll",
                "checkboxSelector": ".row-check",
                "bulkButtonSelector": ".bulk"
            }"#,
        )
        .unwrap();
        assert!(!config.enable_preview);
        assert!(config.enable_auto_resize);
        assert_eq!(config.selection.select_all_id, "checkAll");
        assert_eq!(config.selection.checkbox_selector, ".row-check");
        assert_eq!(config.selection.bulk_button_selector, ".bulk");
    }

    #[test]
    fn test_custom_limits_override_defaults() {
        let mut config = PortalConfig::default();
        config.character_limits.insert("title".into(), 80);
        config.character_limits.insert("summary".into(), 300);

        let limits = config.effective_character_limits();
        assert_eq!(limits.get("title"), Some(&80));
        assert_eq!(limits.get("summary"), Some(&300));
        assert_eq!(limits.get("description"), Some(&1000));
        assert_eq!(limits.len(), 6);
    }
}
