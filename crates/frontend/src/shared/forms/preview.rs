use crate::shared::components::previews::{PriorityPreview, ScrollingPreview, ValidityCard};
use crate::shared::date_utils::evaluate_validity;
use crate::shared::dom::{self, js_error};
use contracts::PortalError;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Отметка на поле-источнике: превью для него уже создано
pub const PREVIEW_ATTR: &str = "data-preview-attached";

fn selected_option_text(select: &HtmlSelectElement) -> String {
    let index = select.selected_index();
    if index < 0 {
        return String::new();
    }
    select
        .item(index as u32)
        .and_then(|option| option.text_content())
        .unwrap_or_default()
}

fn parent_of(element: &Element) -> Result<Element, PortalError> {
    element
        .parent_element()
        .ok_or_else(|| PortalError::missing(format!("parent of #{}", element.id())))
}

/// Бейдж приоритета под `<select id="priority">`
pub fn attach_priority_preview(select: &HtmlSelectElement) -> Result<(), PortalError> {
    let container = dom::append_div(&parent_of(select)?, "mt-2", None)?;

    let value = RwSignal::new(select.value());
    let label = RwSignal::new(selected_option_text(select));
    dom::mount_into(&container, move || view! { <PriorityPreview value=value label=label/> });

    let s = select.clone();
    dom::listen(select, "change", move |_| {
        value.set(s.value());
        label.set(selected_option_text(&s));
    })
}

/// Превью бегущей строки для поля `#message`
pub fn attach_scrolling_preview(field: &Element) -> Result<(), PortalError> {
    let read_value = {
        let field = field.clone();
        move || {
            if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
                textarea.value()
            } else {
                field
                    .dyn_ref::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            }
        }
    };

    // Разметка превью может уже быть в шаблоне
    if let Some(text) = dom::element_by_id("scrollingText") {
        let render = move || {
            let message = read_value();
            text.set_text_content(Some(&crate::shared::components::previews::scrolling_text(&message)));
        };
        render();
        return dom::listen(field, "input", move |_| render());
    }

    let container = dom::append_div(&parent_of(field)?, "scrolling-preview", Some("scrollingPreview"))?;
    let message = RwSignal::new(read_value());
    dom::mount_into(&container, move || view! { <ScrollingPreview message=message/> });
    dom::listen(field, "input", move |_| message.set(read_value()))
}

/// Срок действия между `#validFrom` и `#validTo`
pub fn attach_validity_preview(
    valid_from: &HtmlInputElement,
    valid_to: &HtmlInputElement,
) -> Result<(), PortalError> {
    let document = dom::require_document()?;
    let container = document.create_element("div").map_err(js_error)?;
    container.set_class_name("mt-3");
    valid_to.after_with_node_1(&container).map_err(js_error)?;

    let evaluate = {
        let (from, to) = (valid_from.clone(), valid_to.clone());
        move || {
            let now = chrono::Local::now().naive_local();
            evaluate_validity(&from.value(), &to.value(), now)
        }
    };

    let preview = RwSignal::new(evaluate());
    dom::mount_into(&container, move || view! { <ValidityCard preview=preview/> });

    for field in [valid_from, valid_to] {
        let evaluate = evaluate.clone();
        dom::listen(field, "change", move |_| preview.set(evaluate()))?;
    }
    Ok(())
}

/// Подключает все превью, для которых на странице есть поля
pub fn setup_previews() -> Result<(), PortalError> {
    let first_time = |el: &Element| dom::mark_once(el, PREVIEW_ATTR);

    if let Some(select) = dom::element_by_id("priority")
        .filter(|el| first_time(el))
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    {
        attach_priority_preview(&select)?;
    }

    if let Some(message) = dom::element_by_id("message").filter(|el| first_time(el)) {
        attach_scrolling_preview(&message)?;
    }

    let date_field = |id: &str| {
        dom::element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    };
    if let (Some(from), Some(to)) = (date_field("validFrom"), date_field("validTo")) {
        let source: &Element = &from;
        if first_time(source) {
            attach_validity_preview(&from, &to)?;
        }
    }
    Ok(())
}
