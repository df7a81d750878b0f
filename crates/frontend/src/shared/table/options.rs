//! Опции виджета DataTables, собранные из `TableConfig`.

use contracts::shared::table_config::TableConfig;
use serde::Serialize;

/// Раскладка: размер страницы и поиск сверху, таблица, номера страниц по центру
pub const DOM_LAYOUT: &str = concat!(
    r#"<"row"<"col-sm-6"l><"col-sm-6"f>>"#,
    r#"<"row"<"col-sm-12"tr>>"#,
    r#"<"row"<"col-sm-12 text-center"p>>"#
);

/// Подпись пункта меню размера страницы
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LengthLabel {
    Count(i32),
    Text(&'static str),
}

impl LengthLabel {
    pub fn for_length(length: i32) -> Self {
        if length < 0 {
            LengthLabel::Text("All")
        } else {
            LengthLabel::Count(length)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginate {
    pub first: &'static str,
    pub last: &'static str,
    pub next: &'static str,
    pub previous: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub search: String,
    pub search_placeholder: String,
    pub length_menu: String,
    pub info: String,
    pub info_empty: String,
    pub info_filtered: String,
    pub zero_records: String,
    pub empty_table: String,
    pub paginate: Paginate,
}

impl Language {
    pub fn for_noun(noun: &str) -> Self {
        Self {
            search: "Search:".to_string(),
            search_placeholder: format!("Search {}...", noun),
            length_menu: "Show _MENU_ entries".to_string(),
            info: format!("Showing _START_ to _END_ of _TOTAL_ {}", noun),
            info_empty: format!("Showing 0 to 0 of 0 {}", noun),
            info_filtered: format!("(filtered from _MAX_ total {})", noun),
            zero_records: format!("No matching {} found", noun),
            empty_table: format!("No {} available", noun),
            paginate: Paginate {
                first: "First",
                last: "Last",
                next: "Next",
                previous: "Previous",
            },
        }
    }
}

/// Цель `columnDefs`: все колонки или список индексов
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Targets {
    All(&'static str),
    Columns(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub targets: Targets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTableOptions {
    pub responsive: bool,
    pub paging: bool,
    pub page_length: i32,
    pub length_menu: (Vec<i32>, Vec<LengthLabel>),
    pub searching: bool,
    pub info: bool,
    /// Сортировка выключена; колонка приоритета получает её отдельно
    pub ordering: bool,
    pub language: Language,
    pub dom: &'static str,
    pub paging_type: &'static str,
    pub column_defs: Vec<ColumnDef>,
}

impl DataTableOptions {
    pub fn from_config(config: &TableConfig) -> Self {
        let labels = config
            .length_menu
            .iter()
            .copied()
            .map(LengthLabel::for_length)
            .collect();

        let mut column_defs = vec![ColumnDef {
            targets: Targets::All("_all"),
            orderable: Some(false),
            class_name: None,
        }];
        if !config.centered_columns.is_empty() {
            column_defs.push(ColumnDef {
                targets: Targets::Columns(config.centered_columns.clone()),
                orderable: None,
                class_name: Some("text-center"),
            });
        }

        Self {
            responsive: true,
            paging: true,
            page_length: config.page_length,
            length_menu: (config.length_menu.clone(), labels),
            searching: config.searching,
            info: false,
            ordering: false,
            language: Language::for_noun(&config.entity_noun),
            dom: DOM_LAYOUT,
            paging_type: "numbers",
            column_defs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options() {
        let value = serde_json::to_value(DataTableOptions::from_config(&TableConfig::default())).unwrap();

        assert_eq!(value["pageLength"], 10);
        assert_eq!(value["lengthMenu"], json!([[10, 25, 50, 100, -1], [10, 25, 50, 100, "All"]]));
        assert_eq!(value["ordering"], false);
        assert_eq!(value["info"], false);
        assert_eq!(value["pagingType"], "numbers");
        assert_eq!(
            value["columnDefs"],
            json!([{ "targets": "_all", "orderable": false }])
        );
        assert_eq!(
            value["dom"],
            r#"<"row"<"col-sm-6"l><"col-sm-6"f>><"row"<"col-sm-12"tr>><"row"<"col-sm-12 text-center"p>>"#
        );
    }

    #[test]
    fn test_priority_column_is_centered() {
        let options = DataTableOptions::from_config(&TableConfig::with_priority_column(2));
        let value = serde_json::to_value(options).unwrap();

        assert_eq!(value["columnDefs"][1], json!({ "targets": [2], "className": "text-center" }));
    }

    #[test]
    fn test_language_uses_entity_noun() {
        let language = Language::for_noun("announcements");
        assert_eq!(language.search_placeholder, "Search announcements...");
        assert_eq!(language.info, "Showing _START_ to _END_ of _TOTAL_ announcements");
        assert_eq!(language.zero_records, "No matching announcements found");
        assert_eq!(language.empty_table, "No announcements available");

        let value = serde_json::to_value(&language).unwrap();
        assert_eq!(value["infoFiltered"], "(filtered from _MAX_ total announcements)");
        assert_eq!(value["paginate"]["previous"], "Previous");
    }
}
