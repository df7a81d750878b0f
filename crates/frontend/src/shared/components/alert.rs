//! Закрываемые уведомления (массовые операции, формы) и оверлей загрузки.

use crate::shared::dom;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Уведомление закрывается само через это время
pub const ALERT_AUTO_HIDE_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Warning,
    Danger,
    Info,
}

impl AlertKind {
    /// Тип из скрипта страницы; незнакомое значение даёт `Info`
    pub fn from_code(code: &str) -> Self {
        match code {
            "success" => AlertKind::Success,
            "warning" => AlertKind::Warning,
            "danger" | "error" => AlertKind::Danger,
            _ => AlertKind::Info,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
            AlertKind::Info => "info",
        }
    }

    /// Иконка Bootstrap Icons
    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Success => "check-circle",
            AlertKind::Warning => "exclamation-triangle",
            AlertKind::Danger => "x-circle",
            AlertKind::Info => "info-circle",
        }
    }
}

#[component]
pub fn DismissibleAlert(
    kind: AlertKind,
    #[prop(into)]
    message: String,
    /// Селектор элемента, который удаляется по кнопке закрытия
    #[prop(into)]
    dismiss_selector: String,
) -> impl IntoView {
    let close = move |ev: leptos::ev::MouseEvent| {
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(&dismiss_selector).ok().flatten());
        if let Some(target) = target {
            target.remove();
        }
    };

    view! {
        <div class=format!("alert alert-{} alert-dismissible fade show", kind.code()) role="alert">
            <i class=format!("bi bi-{} me-2", kind.icon())></i>
            {message}
            <button type="button" class="btn-close" on:click=close></button>
        </div>
    }
}

/// Показывает уведомление в начале основного контейнера страницы.
///
/// Все предыдущие уведомления с тем же `slot_class` удаляются, так что
/// повторный вызов не накапливает сообщения.
pub fn show_alert(message: &str, kind: AlertKind, slot_class: &str) -> Option<Element> {
    let document = dom::document()?;
    let container = dom::query("main .container, .container-fluid")
        .or_else(|| document.body().map(Element::from))?;
    show_alert_in(&container, message, kind, slot_class, true)
}

/// То же в заданном контейнере; `auto_hide` закрывает уведомление через 5 с
pub fn show_alert_in(
    container: &Element,
    message: &str,
    kind: AlertKind,
    slot_class: &str,
    auto_hide: bool,
) -> Option<Element> {
    for existing in dom::query_all(&format!(".{}", slot_class)) {
        existing.remove();
    }

    let document = dom::document()?;
    let slot = document.create_element("div").ok()?;
    slot.set_class_name(slot_class);
    container
        .insert_before(&slot, container.first_child().as_ref())
        .ok()?;

    let message = message.to_string();
    let dismiss_selector = format!(".{}", slot_class);
    dom::mount_into(&slot, move || view! {
        <DismissibleAlert kind=kind message=message dismiss_selector=dismiss_selector/>
    });

    if auto_hide {
        let slot_for_timer = slot.clone();
        dom::after(ALERT_AUTO_HIDE_MS, move || slot_for_timer.remove());
    }
    Some(slot)
}

/// Класс слота уведомлений формы
pub const FORM_ALERT_SLOT: &str = "form-alert";

/// Сообщение об ошибке формы остаётся, пока его не закроют
pub fn form_alert_auto_hides(kind: AlertKind) -> bool {
    kind == AlertKind::Success
}

/// Уведомление над первой формой страницы (или в основном контейнере)
pub fn show_form_alert(message: &str, kind: AlertKind) -> Option<Element> {
    let container = dom::query("form").or_else(|| dom::query("main .container"))?;
    let slot = show_alert_in(&container, message, kind, FORM_ALERT_SLOT, form_alert_auto_hides(kind))?;
    slot.scroll_into_view_with_bool(false);
    Some(slot)
}

#[component]
pub fn LoadingOverlay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bulk-loading-content">
            <div class="spinner-border text-primary mb-3" role="status">
                <span class="visually-hidden">"Loading..."</span>
            </div>
            <div class="bulk-loading-text">{message}</div>
        </div>
    }
}

pub fn show_loading_overlay(message: &str) -> Option<Element> {
    hide_loading_overlay();
    let document = dom::document()?;
    let body = document.body()?;
    let overlay = dom::append_div(&body, "bulk-loading-overlay", None).ok()?;
    let message = message.to_string();
    dom::mount_into(&overlay, move || view! { <LoadingOverlay message=message/> });
    Some(overlay)
}

pub fn hide_loading_overlay() {
    for overlay in dom::query_all(".bulk-loading-overlay") {
        overlay.remove();
    }
}
