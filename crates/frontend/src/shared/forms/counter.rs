//! Счётчик символов для текстовых полей.

use crate::shared::dom::{self, js_error};
use contracts::PortalError;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

/// Порог, ниже которого счётчик подсвечивается предупреждением
pub const WARNING_THRESHOLD: i64 = 20;

const COUNTER_CLASS: &str = "character-counter form-text";
const ATTACHED_ATTR: &str = "data-counter-attached";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterSeverity {
    Normal,
    Warning,
    Error,
}

impl CounterSeverity {
    pub fn css_class(&self) -> &'static str {
        match self {
            CounterSeverity::Normal => "text-muted",
            CounterSeverity::Warning => "text-warning",
            CounterSeverity::Error => "text-danger",
        }
    }
}

/// Снимок состояния счётчика для текущего значения поля
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterReading {
    pub length: usize,
    pub limit: u32,
}

impl CounterReading {
    /// Длина считается в UTF-16 единицах, как у `maxlength` в браузере
    pub fn for_value(value: &str, limit: u32) -> Self {
        Self {
            length: value.encode_utf16().count(),
            limit,
        }
    }

    pub fn remaining(&self) -> i64 {
        i64::from(self.limit) - self.length as i64
    }

    pub fn severity(&self) -> CounterSeverity {
        let remaining = self.remaining();
        if remaining < 0 {
            CounterSeverity::Error
        } else if remaining < WARNING_THRESHOLD {
            CounterSeverity::Warning
        } else {
            CounterSeverity::Normal
        }
    }

    pub fn fraction(&self) -> String {
        format!("{}/{}", self.length, self.limit)
    }

    pub fn text(&self) -> String {
        format!("{} characters", self.fraction())
    }
}

/// Id элемента счётчика, выведенный из id поля
pub fn counter_id(field_id: &str) -> String {
    format!("{}Counter", field_id)
}

/// Значение текстового поля (input или textarea)
pub fn field_value(field: &Element) -> Option<String> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    field.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}

fn render(field: &Element, counter: &Element, limit: u32) {
    let Some(value) = field_value(field) else {
        return;
    };
    let reading = CounterReading::for_value(&value, limit);
    let severity = reading.severity();

    counter.set_text_content(Some(&reading.text()));
    counter.set_class_name(&format!("{} {}", COUNTER_CLASS, severity.css_class()));
    dom::toggle_class(field, "is-invalid", severity == CounterSeverity::Error);
}

/// Подключает счётчик к полю.
///
/// Повторный вызов для того же поля только обновляет существующий счётчик.
pub fn attach_counter(field: &Element, limit: u32) -> Result<(), PortalError> {
    let field_id = field.id();
    if field_id.is_empty() {
        return Err(PortalError::missing("id on counted field"));
    }
    let document = dom::require_document()?;
    let id = counter_id(&field_id);

    let counter = match document.get_element_by_id(&id) {
        Some(existing) => existing,
        None => {
            let parent = field
                .parent_element()
                .ok_or_else(|| PortalError::missing(format!("parent of #{}", field_id)))?;
            dom::append_div(&parent, COUNTER_CLASS, Some(&id))?
        }
    };

    let already_attached = field.has_attribute(ATTACHED_ATTR);
    // Лимит последнего вызова; обработчики читают его из атрибута
    field.set_attribute(ATTACHED_ATTR, &limit.to_string()).map_err(js_error)?;
    render(field, &counter, limit);
    if already_attached {
        return Ok(());
    }

    let (f, c) = (field.clone(), counter.clone());
    dom::listen(field, "input", move |_| render(&f, &c, current_limit(&f, limit)))?;

    let (f, c) = (field.clone(), counter);
    dom::listen(field, "paste", move |_| {
        // Значение появляется в поле только после обработчика paste
        let (f, c) = (f.clone(), c.clone());
        dom::defer(move || {
            let limit = current_limit(&f, limit);
            render(&f, &c, limit);
        });
    })?;
    Ok(())
}

fn current_limit(field: &Element, fallback: u32) -> u32 {
    effective_limit(field.get_attribute(ATTACHED_ATTR).as_deref(), fallback)
}

/// Действующий лимит: записанный последним подключением, иначе исходный
pub fn effective_limit(stored: Option<&str>, fallback: u32) -> u32 {
    stored.and_then(parse_limit_attribute).unwrap_or(fallback)
}

/// Лимит из атрибута `data-char-limit`; учитываются только положительные числа
pub fn parse_limit_attribute(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|limit| *limit > 0)
}
