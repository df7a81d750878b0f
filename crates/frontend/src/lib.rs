pub mod app;
pub mod shared;

use contracts::shared::page_config::PortalConfig;
use contracts::shared::table_config::{TableConfig, DEFAULT_PRIORITY_COLUMN};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::bulk_actions::dom_host::{add_bulk_action_toolbar, setup_bulk_actions};
use shared::components::alert::{self, AlertKind};
use shared::selection::dom::SelectionTracker;
use shared::selection::SelectCriteria;
use shared::table::TableController;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    app::auto_hide_server_alerts();
}

/// Объект настроек со страницы; `undefined`/`null` и ошибки разбора дают настройки по умолчанию
fn parse_config<T: DeserializeOwned + Default>(raw: JsValue, what: &str) -> T {
    if raw.is_undefined() || raw.is_null() {
        return T::default();
    }
    serde_wasm_bindgen::from_value(raw).unwrap_or_else(|err| {
        log::warn!("invalid {} config, using defaults: {}", what, err);
        T::default()
    })
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::UNDEFINED)
}

#[wasm_bindgen(js_name = initializeFormFields)]
pub fn initialize_form_fields(config: JsValue) {
    let config: PortalConfig = parse_config(config, "form");
    shared::forms::initialize_form_fields(&config);
}

#[wasm_bindgen(js_name = initializeBulkActions)]
pub fn initialize_bulk_actions(config: JsValue) -> SelectionHandle {
    let config: PortalConfig = parse_config(config, "bulk actions");
    let tracker = Rc::new(SelectionTracker::new(config.selection));
    let handle = SelectionHandle {
        tracker: Rc::clone(&tracker),
    };
    shared::guarded("bulk actions", || setup_bulk_actions(tracker));
    handle
}

#[wasm_bindgen(js_name = initializeTable)]
pub fn initialize_table(table_id: &str, config: JsValue) -> Option<TableHandle> {
    let config: TableConfig = parse_config(config, "table");
    create_table(table_id, config)
}

#[wasm_bindgen(js_name = initializeTableWithPriorityFilter)]
pub fn initialize_table_with_priority_filter(table_id: &str, priority_column: Option<u32>) -> Option<TableHandle> {
    let column = priority_column.map(|c| c as usize).unwrap_or(DEFAULT_PRIORITY_COLUMN);
    create_table(table_id, TableConfig::with_priority_column(column))
}

fn create_table(table_id: &str, config: TableConfig) -> Option<TableHandle> {
    match TableController::initialize(table_id, config) {
        Ok(controller) => Some(TableHandle { controller }),
        Err(err) => {
            log::warn!("table #{} not initialized: {}", table_id, err);
            None
        }
    }
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form_id: &str) -> bool {
    match shared::dom::element_by_id(form_id) {
        Some(form) => shared::forms::validate_form(&form),
        None => {
            log::debug!("form #{} not found, nothing to validate", form_id);
            true
        }
    }
}

#[wasm_bindgen(js_name = clearFormValidation)]
pub fn clear_form_validation(form_id: &str) {
    if let Some(form) = shared::dom::element_by_id(form_id) {
        shared::forms::clear_form_validation(&form);
    }
}

#[wasm_bindgen(js_name = showFormSuccess)]
pub fn show_form_success(message: &str) {
    show_form_alert(message, "success");
}

#[wasm_bindgen(js_name = showFormError)]
pub fn show_form_error(message: &str) {
    show_form_alert(message, "danger");
}

/// `kind`: "success", "warning", "danger" или "info"
#[wasm_bindgen(js_name = showFormAlert)]
pub fn show_form_alert(message: &str, kind: &str) {
    if alert::show_form_alert(message, AlertKind::from_code(kind)).is_none() {
        log::debug!("no form or main container for alert {:?}", message);
    }
}

/// Блокирует форму на время долгой операции страницы
#[wasm_bindgen(js_name = toggleFormEnabled)]
pub fn toggle_form_enabled(form_id: &str, enabled: bool) {
    if let Some(form) = shared::dom::element_by_id(form_id) {
        shared::forms::lifecycle::set_form_enabled(&form, enabled);
    }
}

/// Выбор строк для скриптов страницы
#[wasm_bindgen]
pub struct SelectionHandle {
    tracker: Rc<SelectionTracker>,
}

#[wasm_bindgen]
impl SelectionHandle {
    #[wasm_bindgen(js_name = toggleAll)]
    pub fn toggle_all(&self, checked: bool) {
        self.tracker.toggle_all(checked);
    }

    /// "all", "none", "visible" или "invert"
    #[wasm_bindgen(js_name = selectByCriteria)]
    pub fn select_by_criteria(&self, criteria: &str) {
        match SelectCriteria::from_code(criteria) {
            Some(criteria) => self.tracker.select_by(criteria),
            None => log::warn!("unknown selection criteria {:?}", criteria),
        }
    }

    #[wasm_bindgen(js_name = selectedIds)]
    pub fn selected_ids(&self) -> Vec<String> {
        self.tracker.snapshot().ids
    }

    pub fn stats(&self) -> JsValue {
        to_js(&self.tracker.snapshot().stats())
    }

    pub fn recount(&self) {
        self.tracker.recount();
    }

    /// `actions`: `{ delete: url, enable: url, disable: url, archive: url }`
    #[wasm_bindgen(js_name = addBulkActionToolbar)]
    pub fn add_bulk_action_toolbar(&self, container_id: &str, actions: JsValue) {
        let actions: BTreeMap<String, String> = parse_config(actions, "bulk toolbar");
        shared::guarded("bulk toolbar", || {
            add_bulk_action_toolbar(&self.tracker, container_id, &actions)
        });
    }
}

/// Таблица списка, возвращается из `initializeTable`
#[wasm_bindgen]
pub struct TableHandle {
    controller: Rc<TableController>,
}

#[wasm_bindgen]
impl TableHandle {
    #[wasm_bindgen(js_name = prioritySort)]
    pub fn priority_sort(&self, value: &str) {
        self.controller.priority_sort(value);
    }

    #[wasm_bindgen(js_name = clearPrioritySortFilter)]
    pub fn clear_priority_sort_filter(&self) {
        self.controller.clear_priority_sort_filter();
    }

    #[wasm_bindgen(js_name = addCustomSearch)]
    pub fn add_custom_search(&self, input_id: &str) {
        shared::guarded("custom search", || self.controller.add_custom_search(input_id));
    }

    #[wasm_bindgen(js_name = filterColumn)]
    pub fn filter_column(&self, column: u32, value: &str) {
        self.controller.filter_column(column as usize, value);
    }

    #[wasm_bindgen(js_name = clearAllFilters)]
    pub fn clear_all_filters(&self) {
        self.controller.clear_all_filters();
    }

    #[wasm_bindgen(js_name = setLoading)]
    pub fn set_loading(&self, loading: bool) {
        self.controller.set_loading(loading);
    }

    #[wasm_bindgen(js_name = exportCsv)]
    pub fn export_csv(&self, filename: &str) {
        shared::guarded("csv export", || self.controller.export_csv(filename));
    }

    #[wasm_bindgen(js_name = showLoadAllNotice)]
    pub fn show_load_all_notice(&self, total: u32, current: u32, url: &str) {
        shared::guarded("load-all notice", || {
            self.controller
                .show_load_all_notice(total as usize, current as usize, url)
        });
    }

    #[wasm_bindgen(js_name = pageInfo)]
    pub fn page_info(&self) -> JsValue {
        self.controller
            .page_info()
            .map(|info| to_js(&info))
            .unwrap_or(JsValue::UNDEFINED)
    }
}
