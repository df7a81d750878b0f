//! Контроллер таблицы списка: виджет, сортировка по приоритету, поиск,
//! фильтры, выгрузка и связь с выбором строк.

use super::data_table::DataTable;
use super::options::DataTableOptions;
use super::sort_overlay::{PrioritySortOverlay, RedrawAction};
use super::styles::ensure_styles;
use super::widget::{PageInfo, TableWidget};
use crate::shared::components::load_all_notice::LoadAllNotice;
use crate::shared::components::priority_sort_select::PriorityFilterBar;
use crate::shared::debounce::Debouncer;
use crate::shared::dom::{self, js_error};
use crate::shared::export;
use crate::shared::selection::dom::SelectionTracker;
use contracts::enums::sort_direction::direction_code;
use contracts::shared::table_config::TableConfig;
use contracts::PortalError;
use leptos::callback::UnsyncCallback;
use leptos::prelude::*;
use std::cell::{OnceCell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, Node};

pub const FILTER_CONTAINER_CLASS: &str = "priority-filter-container";
pub const LOADING_CLASS: &str = "table-loading";

/// Id таблицы без ведущего `#`: страницы передают и "orders", и "#orders"
pub fn bare_table_id(raw: &str) -> &str {
    let raw = raw.trim();
    raw.strip_prefix('#').unwrap_or(raw)
}

/// Пересчёт выбора строк после перерисовки, если таблица с чекбоксами
fn redraw_selection(config: &TableConfig) -> Option<SelectionTracker> {
    config.selection.clone().map(SelectionTracker::new)
}

pub struct TableController {
    table_id: String,
    table: DataTable,
    overlay: Option<PrioritySortOverlay<DataTable>>,
    /// Значение выпадающего списка сортировки
    dropdown: RwSignal<String>,
    selection: Option<SelectionTracker>,
    search: Debouncer,
    search_inputs: RefCell<Vec<HtmlInputElement>>,
}

impl TableController {
    /// Создаёт виджет на `#table_id` и, если задана колонка приоритета,
    /// список сортировки над таблицей.
    pub fn initialize(table_id: &str, config: TableConfig) -> Result<Rc<Self>, PortalError> {
        let table_id = bare_table_id(table_id);
        if table_id.is_empty() {
            return Err(PortalError::InvalidConfig("empty table id".to_string()));
        }
        ensure_styles();

        // Первая перерисовка происходит внутри конструктора виджета,
        // когда контроллера ещё нет: пустой слот означает "ничего не делать"
        let slot: Rc<OnceCell<Rc<TableController>>> = Rc::new(OnceCell::new());
        let hook = Rc::clone(&slot);
        let options = DataTableOptions::from_config(&config);
        let table = DataTable::create(table_id, &options, move || {
            if let Some(controller) = hook.get() {
                controller.on_redraw();
            }
        })?;

        let dropdown = RwSignal::new(String::new());
        let overlay = config.priority_column.map(|column| {
            let overlay = PrioritySortOverlay::new(table.clone(), column);
            overlay.set_display_listener(move |direction| dropdown.set(direction_code(direction).to_string()));
            overlay
        });

        let controller = Rc::new(Self {
            table_id: table_id.to_string(),
            table,
            overlay,
            dropdown,
            selection: redraw_selection(&config),
            search: Debouncer::new(config.search_debounce_ms),
            search_inputs: RefCell::new(Vec::new()),
        });
        // Контроллер живёт до перезагрузки страницы вместе с обработчиком перерисовки
        let _ = slot.set(Rc::clone(&controller));

        if controller.overlay.is_some() {
            controller.mount_priority_filter()?;
        }
        Ok(controller)
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    fn on_redraw(&self) {
        if let Some(overlay) = &self.overlay {
            if overlay.on_redraw() == RedrawAction::Reapplied {
                // draw() внутри on_redraw уже вызвал этот обработчик повторно
                return;
            }
        }
        if let Some(selection) = &self.selection {
            selection.recount();
        }
    }

    /// Контейнер над таблицей, создаётся один раз
    fn filter_container(&self) -> Result<Element, PortalError> {
        let wrapper = self.table.wrapper();
        if let Ok(Some(existing)) = wrapper.query_selector(&format!(".{}", FILTER_CONTAINER_CLASS)) {
            log::debug!("reusing priority filter container of #{}", self.table_id);
            return Ok(existing);
        }

        let document = dom::require_document()?;
        let container = document.create_element("div").map_err(js_error)?;
        container.set_class_name(&format!("{} mb-3", FILTER_CONTAINER_CLASS));

        // Между строкой "размер/поиск" и самой таблицей
        let table_row = wrapper.query_selector(":scope > .row:nth-child(2)").ok().flatten();
        let reference: Option<Node> = table_row.or_else(|| wrapper.first_element_child()).map(Into::into);
        wrapper
            .insert_before(&container, reference.as_ref())
            .map_err(js_error)?;
        Ok(container)
    }

    fn mount_priority_filter(self: &Rc<Self>) -> Result<(), PortalError> {
        let container = self.filter_container()?;
        if container.has_child_nodes() {
            return Ok(());
        }

        let controller = Rc::clone(self);
        let value = self.dropdown;
        dom::mount_into(&container, move || {
            let on_select = UnsyncCallback::new(move |value: String| controller.priority_sort(&value));
            view! { <PriorityFilterBar value=value on_select=on_select/> }
        });
        log::info!("priority filter added to #{}", self.table_id);
        Ok(())
    }

    /// Выбор в списке сортировки: "", "asc" или "desc"
    pub fn priority_sort(&self, value: &str) {
        match &self.overlay {
            Some(overlay) => {
                overlay.select(value);
            }
            None => log::debug!("#{} has no priority column", self.table_id),
        }
    }

    pub fn clear_priority_sort_filter(&self) {
        if let Some(overlay) = &self.overlay {
            overlay.clear();
        }
    }

    /// Поле поиска вне виджета; поиск запускается после паузы в наборе
    pub fn add_custom_search(self: &Rc<Self>, input_id: &str) -> Result<(), PortalError> {
        let Some(input) = dom::element_by_id(input_id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) else {
            log::debug!("search input #{} not found", input_id);
            return Ok(());
        };

        let controller = Rc::clone(self);
        let source = input.clone();
        dom::listen(&input, "input", move |_| {
            let query = source.value();
            let table = controller.table.clone();
            controller.search.call(move || {
                table.search(&query);
                table.draw();
            });
        })?;
        self.search_inputs.borrow_mut().push(input);
        Ok(())
    }

    pub fn filter_column(&self, column: usize, value: &str) {
        self.table.search_column(column, value);
        self.table.draw();
    }

    /// Сбрасывает поиск и фильтры колонок; сортировка по приоритету остаётся
    pub fn clear_all_filters(&self) {
        self.search.cancel();
        self.table.clear_searches();

        for field in dom::query_all_in(&self.table.wrapper(), "input, select") {
            if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
                if matches!(input.type_().as_str(), "search" | "text") {
                    input.set_value("");
                }
            } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
                if !select.class_list().contains("priority-sort-filter") {
                    select.set_selected_index(0);
                }
            }
        }
        for input in self.search_inputs.borrow().iter() {
            input.set_value("");
        }

        self.table.draw();
    }

    pub fn set_loading(&self, loading: bool) {
        dom::toggle_class(&self.table.wrapper(), LOADING_CLASS, loading);
    }

    /// CSV из строк, прошедших текущий поиск
    pub fn export_csv(&self, filename: &str) -> Result<(), PortalError> {
        let headers = self.table.headers();
        let rows = self.table.filtered_rows()?;
        let csv = export::build_csv(&headers, &rows);
        export::download_csv(&csv, filename)?;
        log::info!("exported {} rows of #{}", rows.len(), self.table_id);
        Ok(())
    }

    /// Уведомление перед карточкой таблицы, если загружена только часть записей
    pub fn show_load_all_notice(&self, total: usize, current: usize, url: &str) -> Result<(), PortalError> {
        if current >= total {
            return Ok(());
        }
        if dom::query(".load-all-notification").is_some() {
            log::debug!("load-all notice already shown");
            return Ok(());
        }

        let card = dom::element_by_id(&self.table_id)
            .and_then(|table| table.closest(".card").ok().flatten())
            .or_else(|| dom::query(".card.border-0.shadow-sm"))
            .ok_or_else(|| PortalError::missing("table card"))?;
        let parent = card.parent_element().ok_or_else(|| PortalError::missing("table card parent"))?;

        let document = dom::require_document()?;
        let notice = document.create_element("div").map_err(js_error)?;
        notice.set_class_name("load-all-notification");
        parent.insert_before(&notice, Some(&card)).map_err(js_error)?;

        let url = url.to_string();
        dom::mount_into(&notice, move || view! { <LoadAllNotice total=total current=current url=url/> });
        Ok(())
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        self.table.page_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::page_config::SelectionConfig;

    #[test]
    fn test_priority_table_recounts_selection() {
        let tracker = redraw_selection(&TableConfig::with_priority_column(2));
        assert_eq!(tracker.map(|t| t.config().clone()), Some(SelectionConfig::default()));
    }

    #[test]
    fn test_plain_table_without_selection() {
        assert!(redraw_selection(&TableConfig::default()).is_none());
    }

    #[test]
    fn test_table_id_accepts_selector_form() {
        assert_eq!(bare_table_id("#x"), "x");
        assert_eq!(bare_table_id("x"), "x");
        assert_eq!(bare_table_id(" #orders "), "orders");
        assert_eq!(bare_table_id("#"), "");
    }
}
