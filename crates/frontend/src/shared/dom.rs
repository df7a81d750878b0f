//! Небольшие обёртки над web-sys, общие для всех функций страницы.
//!
//! Все функции поиска возвращают `Option`/пустой `Vec`, если элемента нет:
//! шаблон страницы может не содержать необязательных виджетов.

use contracts::PortalError;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn require_document() -> Result<Document, PortalError> {
    document().ok_or_else(|| PortalError::missing("document"))
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(node_list_elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .ok()
        .map(node_list_elements)
        .unwrap_or_default()
}

pub fn node_list_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// JS-исключение в текстовую ошибку
pub fn js_error(err: JsValue) -> PortalError {
    PortalError::Dom(format!("{:?}", err))
}

/// Атрибут-отметка "обработчики уже подключены"
pub trait AttachMarker {
    fn has_marker(&self, attr: &str) -> bool;
    fn set_marker(&self, attr: &str);
}

impl AttachMarker for Element {
    fn has_marker(&self, attr: &str) -> bool {
        self.has_attribute(attr)
    }

    fn set_marker(&self, attr: &str) {
        let _ = self.set_attribute(attr, "");
    }
}

/// `true` только при первом вызове для элемента: повторная инициализация
/// страницы не вешает обработчики второй раз
pub fn mark_once<M: AttachMarker + ?Sized>(target: &M, attr: &str) -> bool {
    if target.has_marker(attr) {
        return false;
    }
    target.set_marker(attr);
    true
}

/// Подписка на событие на всё время жизни страницы
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PortalError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Выполнить после текущего обработчика (аналог `setTimeout(f, 0)`)
pub fn defer<F: FnOnce() + 'static>(f: F) {
    after(0, f);
}

pub fn after<F: FnOnce() + 'static>(millis: u32, f: F) {
    gloo_timers::callback::Timeout::new(millis, f).forget();
}

pub fn set_display(element: &Element, display: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("display", display);
    }
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Создаёт `<div>` с классом (и id, если задан) и добавляет его в конец `parent`
pub fn append_div(parent: &Element, class: &str, id: Option<&str>) -> Result<Element, PortalError> {
    let document = require_document()?;
    let div = document.create_element("div").map_err(js_error)?;
    div.set_class_name(class);
    if let Some(id) = id {
        div.set_id(id);
    }
    parent.append_child(&div).map_err(js_error)?;
    Ok(div)
}

/// Монтирует Leptos-компонент внутрь существующего элемента страницы
pub fn mount_into<F, N>(parent: &Element, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let Ok(parent) = parent.clone().dyn_into::<HtmlElement>() else {
        return;
    };
    let handle = leptos::mount::mount_to(parent, view);
    // Компонент живёт до перезагрузки страницы
    std::mem::forget(handle);
}

/// Содержимое `<meta name=...>` страницы
pub fn meta_content(name: &str) -> Option<String> {
    query(&format!("meta[name=\"{}\"]", name))
        .and_then(|meta| meta.get_attribute("content"))
        .filter(|content| !content.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    #[derive(Default)]
    struct FakeNode {
        attrs: RefCell<BTreeSet<String>>,
    }

    impl AttachMarker for FakeNode {
        fn has_marker(&self, attr: &str) -> bool {
            self.attrs.borrow().contains(attr)
        }

        fn set_marker(&self, attr: &str) {
            self.attrs.borrow_mut().insert(attr.to_string());
        }
    }

    #[test]
    fn test_mark_once_only_first_time() {
        let node = FakeNode::default();
        assert!(mark_once(&node, "data-submit-guarded"));
        assert!(!mark_once(&node, "data-submit-guarded"));
        assert!(!mark_once(&node, "data-submit-guarded"));
    }

    #[test]
    fn test_markers_are_independent() {
        let node = FakeNode::default();
        assert!(mark_once(&node, "data-submit-guarded"));
        assert!(mark_once(&node, "data-reset-confirm"));
        assert!(!mark_once(&node, "data-reset-confirm"));
    }
}
