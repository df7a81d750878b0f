use crate::shared::dom;
use leptos::prelude::*;

pub const STYLES_ID: &str = "portal-table-css";

#[component]
pub fn TableStyles() -> impl IntoView {
    view! {
        <style id=STYLES_ID>
        "
        .table-loading {
            position: relative;
            opacity: 0.6;
            pointer-events: none;
        }

        .table-loading::after {
            content: \"\";
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            bottom: 0;
            background: rgba(255, 255, 255, 0.8);
            z-index: 10;
        }

        .spin {
            animation: spin 1s linear infinite;
        }

        @keyframes spin {
            from { transform: rotate(0deg); }
            to { transform: rotate(360deg); }
        }
        "
        </style>
    }
}

/// Стили загрузки таблицы добавляются в `<head>` один раз на страницу
pub fn ensure_styles() {
    if dom::element_by_id(STYLES_ID).is_some() {
        return;
    }
    if let Some(head) = dom::document().and_then(|d| d.head()) {
        dom::mount_into(&head, TableStyles);
    }
}
