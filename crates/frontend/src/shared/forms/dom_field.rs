use super::validation::{ConstrainedField, FieldMark};
use crate::shared::dom;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Поле формы в DOM: input, textarea или select
#[derive(Clone)]
pub struct DomField {
    element: Element,
}

impl DomField {
    /// `None`, если элемент не поддерживает проверку ограничений
    pub fn new(element: Element) -> Option<Self> {
        let supported = element.is_instance_of::<HtmlInputElement>()
            || element.is_instance_of::<HtmlTextAreaElement>()
            || element.is_instance_of::<HtmlSelectElement>();
        supported.then_some(Self { element })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn error_id(&self) -> String {
        format!("{}Error", self.element.id())
    }

    /// Элемент сообщения ищется по id, а у поля без id среди соседей
    fn existing_error(&self) -> Option<Element> {
        if !self.element.id().is_empty() {
            return dom::element_by_id(&self.error_id());
        }
        self.element
            .next_element_sibling()
            .filter(|sibling| sibling.class_list().contains("invalid-feedback"))
    }
}

impl ConstrainedField for DomField {
    fn check_validity(&self) -> bool {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            return input.check_validity();
        }
        if let Some(textarea) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            return textarea.check_validity();
        }
        self.element
            .dyn_ref::<HtmlSelectElement>()
            .map(|select| select.check_validity())
            .unwrap_or(true)
    }

    fn validation_message(&self) -> String {
        let message = if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.validation_message()
        } else if let Some(textarea) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            textarea.validation_message()
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.validation_message()
        } else {
            Ok(String::new())
        };
        message.unwrap_or_default()
    }

    fn set_mark(&self, mark: FieldMark) {
        let (add, remove) = match mark {
            FieldMark::Valid => (FieldMark::Valid, FieldMark::Invalid),
            FieldMark::Invalid => (FieldMark::Invalid, FieldMark::Valid),
        };
        dom::toggle_class(&self.element, remove.css_class(), false);
        dom::toggle_class(&self.element, add.css_class(), true);
    }

    fn clear_mark(&self) {
        let _ = self
            .element
            .class_list()
            .remove_2(FieldMark::Valid.css_class(), FieldMark::Invalid.css_class());
    }

    fn show_error(&self, message: &str) {
        self.clear_error();
        let Some(document) = dom::document() else {
            return;
        };
        let Ok(feedback) = document.create_element("div") else {
            return;
        };
        feedback.set_class_name("invalid-feedback");
        if !self.element.id().is_empty() {
            feedback.set_id(&self.error_id());
        }
        feedback.set_text_content(Some(message));
        // Сообщение сразу за полем, чтобы работал селектор `.is-invalid ~ .invalid-feedback`
        let _ = self.element.after_with_node_1(&feedback);
    }

    fn clear_error(&self) {
        if let Some(existing) = self.existing_error() {
            existing.remove();
        }
    }
}

/// Поля формы, помеченные `required`
pub fn required_fields(form: &Element) -> Vec<DomField> {
    dom::query_all_in(form, super::validation::REQUIRED_FIELDS_SELECTOR)
        .into_iter()
        .filter_map(DomField::new)
        .collect()
}
