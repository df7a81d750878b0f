//! Настройки таблицы списка для `initializeTable`.

use super::page_config::SelectionConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_LENGTH: i32 = 10;
pub const DEFAULT_PRIORITY_COLUMN: usize = 2;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

fn default_page_length() -> i32 {
    DEFAULT_PAGE_LENGTH
}

fn default_length_menu() -> Vec<i32> {
    vec![10, 25, 50, 100, -1]
}

fn default_entity_noun() -> String {
    "records".to_string()
}

fn default_debounce() -> u32 {
    DEFAULT_SEARCH_DEBOUNCE_MS
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    #[serde(default = "default_page_length")]
    pub page_length: i32,
    /// Варианты размера страницы; `-1` означает "All"
    #[serde(default = "default_length_menu")]
    pub length_menu: Vec<i32>,
    #[serde(default = "enabled")]
    pub searching: bool,
    /// Существительное в текстах таблицы: "records", "announcements", "messages"
    #[serde(default = "default_entity_noun")]
    pub entity_noun: String,
    #[serde(default)]
    pub centered_columns: Vec<usize>,
    /// Колонка приоритета; `Some` включает выпадающий список сортировки
    #[serde(default)]
    pub priority_column: Option<usize>,
    #[serde(default = "default_debounce")]
    pub search_debounce_ms: u32,
    /// Если задано, после каждой перерисовки пересчитывается выбор строк
    #[serde(default)]
    pub selection: Option<SelectionConfig>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_length: DEFAULT_PAGE_LENGTH,
            length_menu: default_length_menu(),
            searching: true,
            entity_noun: default_entity_noun(),
            centered_columns: Vec::new(),
            priority_column: None,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            selection: None,
        }
    }
}

impl TableConfig {
    /// Конфигурация для `initializeTableWithPriorityFilter`.
    /// Выбор строк пересчитывается после каждой перерисовки.
    pub fn with_priority_column(priority_column: usize) -> Self {
        Self {
            centered_columns: vec![priority_column],
            priority_column: Some(priority_column),
            selection: Some(SelectionConfig::default()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: TableConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TableConfig::default());
        assert_eq!(config.page_length, 10);
        assert_eq!(config.length_menu, vec![10, 25, 50, 100, -1]);
        assert_eq!(config.priority_column, None);
        assert_eq!(config.selection, None);
    }

    #[test]
    fn test_nested_selection() {
        let config: TableConfig = serde_json::from_str(
            r#"{"entityNoun": "messages", "priorityColumn": 3, "selection": {}}"#,
        )
        .unwrap();
        assert_eq!(config.entity_noun, "messages");
        assert_eq!(config.priority_column, Some(3));
        assert_eq!(config.selection, Some(SelectionConfig::default()));
    }

    #[test]
    fn test_with_priority_column() {
        let config = TableConfig::with_priority_column(2);
        assert_eq!(config.priority_column, Some(2));
        assert_eq!(config.centered_columns, vec![2]);
        assert_eq!(config.page_length, DEFAULT_PAGE_LENGTH);
        assert_eq!(config.selection, Some(SelectionConfig::default()));
    }
}
