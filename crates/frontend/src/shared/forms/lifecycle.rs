//! Отправка и сброс форм: защита от двойной отправки, подтверждение сброса,
//! блокировка невалидных форм с `novalidate`.

use super::dom_field::required_fields;
use super::validation::clear_validation;
use crate::shared::dom::{self, js_error};
use contracts::PortalError;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlFormElement};

const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"], input[type=\"submit\"]";
const RESET_BUTTON_SELECTOR: &str = "button[type=\"reset\"], input[type=\"reset\"]";
const SAVING_HTML: &str = "<i class=\"bi bi-arrow-repeat spin me-2\"></i>Saving...";
const RESET_CONFIRM: &str =
    "Are you sure you want to reset all fields? All unsaved changes will be lost.";

/// Отметки на `<form>`: обработчики отправки и сброса уже подключены
pub const SUBMIT_GUARD_ATTR: &str = "data-submit-guarded";
pub const RESET_GUARD_ATTR: &str = "data-reset-confirm";

/// Через сколько проверить, не отклонил ли браузер отправку
const RESTORE_CHECK_MS: u32 = 100;

fn forms() -> Vec<HtmlFormElement> {
    dom::query_all("form")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .collect()
}

fn guard_double_submit(form: &HtmlFormElement) -> Result<(), PortalError> {
    let f = form.clone();
    dom::listen(form, "submit", move |event: Event| {
        let Some(button) = f.query_selector(SUBMIT_BUTTON_SELECTOR).ok().flatten() else {
            return;
        };
        if button.has_attribute("disabled") {
            event.prevent_default();
            return;
        }

        let original = button.inner_html();
        let _ = button.set_attribute("disabled", "");
        button.set_inner_html(SAVING_HTML);

        // Если браузер не пропустил форму, кнопку нужно вернуть
        let form = f.clone();
        dom::after(RESTORE_CHECK_MS, move || {
            if !form.check_validity() {
                let _ = button.remove_attribute("disabled");
                button.set_inner_html(&original);
            }
        });
    })
}

/// После сброса браузером значений снимает отметки валидации и
/// заново запускает счётчики и превью
fn refresh_after_reset(form: &HtmlFormElement) {
    clear_validation(&required_fields(form));
    for feedback in dom::query_all_in(form, ".invalid-feedback") {
        feedback.remove();
    }
    for marked in dom::query_all_in(form, ".is-valid, .is-invalid") {
        let _ = marked.class_list().remove_2("is-valid", "is-invalid");
    }

    for field in dom::query_all_in(form, "[data-counter-attached]") {
        if let Ok(event) = Event::new("input") {
            let _ = field.dispatch_event(&event);
        }
    }
    for id in ["priority", "validFrom", "validTo"] {
        if let (Some(field), Ok(event)) = (dom::element_by_id(id), Event::new("change")) {
            let _ = field.dispatch_event(&event);
        }
    }
    if let (Some(field), Ok(event)) = (dom::element_by_id("message"), Event::new("input")) {
        let _ = field.dispatch_event(&event);
    }
}

fn confirm_reset(form: &HtmlFormElement) -> Result<(), PortalError> {
    let Some(button) = form.query_selector(RESET_BUTTON_SELECTOR).map_err(js_error)? else {
        return Ok(());
    };
    let f = form.clone();
    dom::listen(&button, "click", move |event: Event| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(RESET_CONFIRM).ok())
            .unwrap_or(false);
        if !confirmed {
            event.prevent_default();
            return;
        }
        let form = f.clone();
        dom::defer(move || refresh_after_reset(&form));
    })
}

/// Формы с `novalidate`: невалидная форма не отправляется, фокус на первое
/// невалидное поле
fn block_invalid_submit(form: &HtmlFormElement) -> Result<(), PortalError> {
    let f = form.clone();
    dom::listen(form, "submit", move |event: Event| {
        if !f.check_validity() {
            event.prevent_default();
            event.stop_propagation();
            if let Some(first) = f
                .query_selector(":invalid")
                .ok()
                .flatten()
                .and_then(|el: Element| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = first.focus();
            }
        }
        let _ = f.class_list().add_1("was-validated");
    })
}

pub fn setup_submit_handling() -> Result<(), PortalError> {
    for form in forms() {
        let element: &Element = &form;
        if !dom::mark_once(element, SUBMIT_GUARD_ATTR) {
            continue;
        }
        if form.has_attribute("novalidate") {
            block_invalid_submit(&form)?;
        }
        guard_double_submit(&form)?;
    }
    Ok(())
}

pub fn setup_reset_handling() -> Result<(), PortalError> {
    for form in forms() {
        let element: &Element = &form;
        if !dom::mark_once(element, RESET_GUARD_ATTR) {
            continue;
        }
        confirm_reset(&form)?;
    }
    Ok(())
}

/// Включает или блокирует все элементы формы
pub fn set_form_enabled(form: &Element, enabled: bool) {
    for field in dom::query_all_in(form, "input, textarea, select, button") {
        let _ = if enabled {
            field.remove_attribute("disabled")
        } else {
            field.set_attribute("disabled", "")
        };
    }
    dom::toggle_class(form, "form-loading", !enabled);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_markers_are_distinct() {
        // Обе отметки ставятся на один и тот же `<form>`
        assert_ne!(SUBMIT_GUARD_ATTR, RESET_GUARD_ATTR);
        assert!(SUBMIT_GUARD_ATTR.starts_with("data-"));
        assert!(RESET_GUARD_ATTR.starts_with("data-"));
    }
}
