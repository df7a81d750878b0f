use super::{annotate_label, RowCheckbox, SelectCriteria, SelectionSnapshot};
use crate::shared::components::bulk_toolbar::TOOLBAR_CLASS;
use crate::shared::dom::{self, js_error};
use contracts::shared::page_config::SelectionConfig;
use contracts::PortalError;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, Node};

/// Связь чекбокса "выбрать все", чекбоксов строк и кнопок массовых операций
pub struct SelectionTracker {
    config: SelectionConfig,
}

impl SelectionTracker {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    fn master(&self) -> Option<HtmlInputElement> {
        dom::element_by_id(&self.config.select_all_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    fn row_inputs(&self) -> Vec<HtmlInputElement> {
        dom::query_all(&self.config.checkbox_selector)
            .into_iter()
            .filter(|el| el.id() != self.config.select_all_id)
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .collect()
    }

    fn row_state(input: &HtmlInputElement) -> RowCheckbox {
        RowCheckbox {
            value: input.value(),
            checked: input.checked(),
            visible: input.offset_parent().is_some(),
        }
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        let rows: Vec<RowCheckbox> = self.row_inputs().iter().map(Self::row_state).collect();
        SelectionSnapshot::from_rows(&rows)
    }

    /// Пересчитывает выбор и обновляет все зависящие от него элементы
    pub fn recount(&self) -> SelectionSnapshot {
        let snapshot = self.snapshot();

        if let Some(master) = self.master() {
            let (checked, indeterminate) = snapshot.master_state().flags();
            master.set_indeterminate(indeterminate);
            master.set_checked(checked);
        }

        for button in dom::query_all(&self.config.bulk_button_selector) {
            if snapshot.actions_visible() {
                dom::set_display(&button, "inline-block");
                set_button_label(&button, snapshot.count);
            } else {
                dom::set_display(&button, "none");
            }
        }

        for info in dom::query_all(".selection-info") {
            match snapshot.info_text() {
                Some(text) => {
                    info.set_text_content(Some(&text));
                    dom::set_display(&info, "inline-block");
                }
                None => dom::set_display(&info, "none"),
            }
        }

        for toolbar in dom::query_all(&format!(".{}", TOOLBAR_CLASS)) {
            dom::toggle_class(&toolbar, "d-none", !snapshot.actions_visible());
        }
        snapshot
    }

    pub fn toggle_all(&self, checked: bool) {
        for input in self.row_inputs() {
            input.set_checked(checked);
        }
        self.recount();
    }

    pub fn select_by(&self, criteria: SelectCriteria) {
        for input in self.row_inputs() {
            let row = Self::row_state(&input);
            input.set_checked(criteria.apply(&row));
        }
        self.recount();
    }

    /// Подписывает чекбоксы и выполняет первый пересчёт
    pub fn attach(self: &Rc<Self>) -> Result<(), PortalError> {
        if let Some(master) = self.master() {
            let tracker = Rc::clone(self);
            let m = master.clone();
            dom::listen(&master, "change", move |_| tracker.toggle_all(m.checked()))?;
        } else {
            log::debug!("select-all checkbox #{} not found", self.config.select_all_id);
        }

        // Делегирование: строки могут появиться после перерисовки таблицы
        let document = dom::require_document()?;
        let tracker = Rc::clone(self);
        dom::listen(&document, "change", move |event: Event| {
            let matches = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| {
                    el.id() != tracker.config.select_all_id
                        && el.matches(&tracker.config.checkbox_selector).unwrap_or(false)
                })
                .unwrap_or(false);
            if matches {
                tracker.recount();
            }
        })?;

        self.recount();
        Ok(())
    }
}

/// Меняет только текст кнопки, иконка внутри сохраняется
fn set_button_label(button: &Element, count: usize) {
    let current = button.text_content().unwrap_or_default();
    let label = annotate_label(&current, count);
    if current.trim() == label {
        return;
    }
    if let Err(err) = replace_text(button, &label) {
        log::debug!("bulk button label not updated: {}", err);
    }
}

fn replace_text(button: &Element, label: &str) -> Result<(), PortalError> {
    let children = button.child_nodes();
    let text_nodes: Vec<Node> = (0..children.length())
        .filter_map(|i| children.get(i))
        .filter(|node| node.node_type() == Node::TEXT_NODE)
        .collect();
    for node in text_nodes {
        button.remove_child(&node).map_err(js_error)?;
    }
    let document = dom::require_document()?;
    button
        .append_child(&document.create_text_node(label))
        .map_err(js_error)?;
    Ok(())
}
