//! Улучшения форм: счётчики символов, авторазмер, валидация, превью.

pub mod auto_resize;
pub mod counter;
pub mod date_defaults;
pub mod dom_field;
pub mod lifecycle;
pub mod preview;
pub mod validation;

use crate::shared::{dom, guarded};
use contracts::shared::page_config::PortalConfig;
use contracts::PortalError;
use dom_field::{required_fields, DomField};
use validation::{clear_validation, validate_field, validate_fields};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

fn setup_character_counters(config: &PortalConfig) -> Result<(), PortalError> {
    for (field_id, limit) in config.effective_character_limits() {
        if let Some(field) = dom::element_by_id(&field_id) {
            counter::attach_counter(&field, limit)?;
        }
    }

    for field in dom::query_all("[data-char-limit]") {
        let limit = field
            .get_attribute("data-char-limit")
            .and_then(|raw| counter::parse_limit_attribute(&raw));
        if let Some(limit) = limit {
            counter::attach_counter(&field, limit)?;
        }
    }
    Ok(())
}

fn setup_auto_resize(min_height: i32) -> Result<(), PortalError> {
    for textarea in dom::query_all(auto_resize::AUTO_RESIZE_SELECTOR) {
        if let Ok(textarea) = textarea.dyn_into::<HtmlTextAreaElement>() {
            auto_resize::attach_auto_resize(&textarea, min_height)?;
        }
    }
    Ok(())
}

fn setup_date_defaults() -> Result<(), PortalError> {
    let date_field = |id: &str| dom::element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    match date_field("validFrom") {
        Some(valid_from) => date_defaults::attach_date_defaults(&valid_from, date_field("validTo").as_ref()),
        None => Ok(()),
    }
}

const LIVE_VALIDATION_ATTR: &str = "data-live-validation";

/// Проверка на лету: при потере фокуса, а при вводе только уже невалидных полей
fn setup_real_time_validation() -> Result<(), PortalError> {
    let Some(form) = dom::query("form") else {
        log::debug!("no form on page, real-time validation skipped");
        return Ok(());
    };
    for field in required_fields(&form) {
        let target = field.element().clone();
        if !dom::mark_once(&target, LIVE_VALIDATION_ATTR) {
            continue;
        }

        let f = field.clone();
        dom::listen(&target, "blur", move |_| {
            validate_field(&f);
        })?;

        dom::listen(&target, "input", move |_| {
            if field.element().class_list().contains("is-invalid") {
                validate_field(&field);
            }
        })?;
    }
    Ok(())
}

/// Подключает улучшения ко всем полям страницы.
///
/// Каждая функция инициализируется отдельно: ошибка в одной не мешает остальным.
pub fn initialize_form_fields(config: &PortalConfig) {
    if config.enable_character_count {
        guarded("character counters", || setup_character_counters(config));
    }
    if config.enable_auto_resize {
        guarded("auto-resize", || setup_auto_resize(config.auto_resize_min_height));
    }
    if config.enable_real_time_validation {
        guarded("real-time validation", setup_real_time_validation);
    }
    // До превью, чтобы оно сразу увидело дату начала
    if config.enable_date_defaults {
        guarded("date defaults", setup_date_defaults);
    }
    if config.enable_preview {
        guarded("previews", preview::setup_previews);
    }
    guarded("submit handling", lifecycle::setup_submit_handling);
    guarded("reset handling", lifecycle::setup_reset_handling);
    log::info!("form enhancements initialized");
}

/// Проверяет все обязательные поля формы и отмечает каждое
pub fn validate_form(form: &Element) -> bool {
    validate_fields(&required_fields(form))
}

/// Снимает отметки валидации и сообщения со всех полей формы
pub fn clear_form_validation(form: &Element) {
    let marked: Vec<DomField> = dom::query_all_in(form, ".is-valid, .is-invalid")
        .into_iter()
        .filter_map(DomField::new)
        .collect();
    clear_validation(&marked);
    for feedback in dom::query_all_in(form, ".invalid-feedback") {
        feedback.remove();
    }
}
