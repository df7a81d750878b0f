use super::{dispatch, parse_action, BulkActionHost, BulkSubmission, CsrfToken, Endpoints, DEFAULT_CSRF_PARAMETER};
use crate::shared::components::alert::{hide_loading_overlay, show_alert, show_loading_overlay, AlertKind};
use crate::shared::components::bulk_toolbar::{mount_toolbar, toolbar_buttons, TOOLBAR_CLASS};
use crate::shared::dom::{self, js_error};
use crate::shared::selection::dom::SelectionTracker;
use contracts::enums::BulkAction;
use contracts::PortalError;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

/// Класс слота предупреждений массовых операций
const ALERT_SLOT: &str = "bulk-alert";

/// Реализация [`BulkActionHost`] поверх страницы
pub struct DomBulkHost;

impl BulkActionHost for DomBulkHost {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn warn(&self, message: &str) {
        show_alert(message, AlertKind::Warning, ALERT_SLOT);
    }

    fn show_progress(&self, message: &str) {
        show_loading_overlay(message);
    }

    fn hide_progress(&self) {
        hide_loading_overlay();
    }

    fn csrf_token(&self) -> Option<CsrfToken> {
        let value = dom::meta_content("_csrf")?;
        let parameter =
            dom::meta_content("_csrf_parameter").unwrap_or_else(|| DEFAULT_CSRF_PARAMETER.to_string());
        Some(CsrfToken { parameter, value })
    }

    fn submit(&self, submission: &BulkSubmission) -> Result<(), PortalError> {
        let document = dom::require_document()?;
        let body = document.body().ok_or_else(|| PortalError::missing("document body"))?;

        let form: HtmlFormElement = document
            .create_element("form")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| PortalError::Dom("created element is not a form".into()))?;
        form.set_method(submission.method);
        form.set_action(&submission.action_url);
        dom::set_display(&form, "none");

        for (name, value) in &submission.fields {
            let input = document.create_element("input").map_err(js_error)?;
            input.set_attribute("type", "hidden").map_err(js_error)?;
            input.set_attribute("name", name).map_err(js_error)?;
            input.set_attribute("value", value).map_err(js_error)?;
            form.append_child(&input).map_err(js_error)?;
        }

        body.append_child(&form).map_err(js_error)?;
        form.submit().map_err(js_error)
    }
}

/// Адреса, заданные на кнопке атрибутами `data-<action>-url`
fn endpoints_from_button(button: &Element) -> Endpoints {
    BulkAction::all()
        .into_iter()
        .fold(Endpoints::default(), |endpoints, action| {
            match button.get_attribute(action.endpoint_attribute()) {
                Some(url) => endpoints.with_override(action, url),
                None => endpoints,
            }
        })
}

/// Обработка клика по кнопке с `data-bulk-action`
fn on_bulk_click(tracker: &SelectionTracker, button: &Element) -> Result<(), PortalError> {
    let code = button.get_attribute("data-bulk-action").unwrap_or_default();
    let action = parse_action(&code)?;
    let ids = tracker.snapshot().ids;
    dispatch(&DomBulkHost, action, &ids, &endpoints_from_button(button)).map(|_| ())
}

/// Подключает выбор строк и кнопки массовых операций
pub fn setup_bulk_actions(tracker: Rc<SelectionTracker>) -> Result<(), PortalError> {
    super::styles::ensure_styles();
    tracker.attach()?;

    let document = dom::require_document()?;
    dom::listen(&document, "click", move |event: Event| {
        let button = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("[data-bulk-action]").ok().flatten());
        let Some(button) = button else {
            return;
        };
        event.prevent_default();

        match on_bulk_click(&tracker, &button) {
            Ok(()) | Err(PortalError::EmptySelection) => {}
            Err(err) => log::warn!("bulk action failed: {}", err),
        }
    })?;

    log::info!("bulk actions initialized");
    Ok(())
}

/// Вставляет панель массовых операций в начало `#container_id`.
/// `actions`: операция → адрес, например `{"delete": "/messages/bulk-delete"}`.
pub fn add_bulk_action_toolbar(
    tracker: &SelectionTracker,
    container_id: &str,
    actions: &BTreeMap<String, String>,
) -> Result<(), PortalError> {
    let container = dom::element_by_id(container_id)
        .ok_or_else(|| PortalError::missing(format!("toolbar container #{}", container_id)))?;
    if !dom::query_all_in(&container, &format!(".{}", TOOLBAR_CLASS)).is_empty() {
        log::debug!("bulk toolbar already present in #{}", container_id);
        return Ok(());
    }

    let buttons = toolbar_buttons(actions);
    if buttons.is_empty() {
        log::debug!("no bulk actions configured for #{}", container_id);
        return Ok(());
    }

    let document = dom::require_document()?;
    let slot = document.create_element("div").map_err(js_error)?;
    container
        .insert_before(&slot, container.first_child().as_ref())
        .map_err(js_error)?;
    mount_toolbar(&slot, buttons);

    tracker.recount();
    Ok(())
}
