use crate::shared::dom;
use contracts::PortalError;
use web_sys::{Element, HtmlTextAreaElement};

pub const AUTO_RESIZE_SELECTOR: &str = "textarea.auto-resize, textarea[data-auto-resize]";
pub const ATTACHED_ATTR: &str = "data-auto-resize-attached";

/// Высота textarea под содержимое, но не меньше минимальной
pub fn resized_height(content_height: i32, min_height: i32) -> i32 {
    content_height.max(min_height)
}

fn resize(textarea: &HtmlTextAreaElement, min_height: i32) {
    let style = textarea.style();
    // Сначала сбрасываем высоту, иначе scrollHeight не уменьшается
    let _ = style.set_property("height", "auto");
    let height = resized_height(textarea.scroll_height(), min_height);
    let _ = style.set_property("height", &format!("{}px", height));
}

pub fn attach_auto_resize(textarea: &HtmlTextAreaElement, min_height: i32) -> Result<(), PortalError> {
    let element: &Element = textarea;
    if !dom::mark_once(element, ATTACHED_ATTR) {
        return Ok(());
    }
    for event in ["input", "change"] {
        let t = textarea.clone();
        dom::listen(textarea, event, move |_| resize(&t, min_height))?;
    }
    let t = textarea.clone();
    dom::defer(move || resize(&t, min_height));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resized_height() {
        assert_eq!(resized_height(40, 100), 100);
        assert_eq!(resized_height(100, 100), 100);
        assert_eq!(resized_height(640, 100), 640);
    }

    #[test]
    fn test_marker_not_matched_by_selector() {
        // Отметка не должна совпадать с `textarea[data-auto-resize]`
        assert_ne!(ATTACHED_ATTR, "data-auto-resize");
        assert!(!AUTO_RESIZE_SELECTOR.contains(ATTACHED_ATTR));
    }
}
