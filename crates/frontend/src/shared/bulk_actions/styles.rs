use crate::shared::dom;
use leptos::prelude::*;

pub const STYLES_ID: &str = "bulk-actions-css";

/// Оверлей загрузки, панель массовых операций и чекбокс в состоянии "частично"
#[component]
pub fn BulkActionStyles() -> impl IntoView {
    view! {
        <style id=STYLES_ID>
        "
        .bulk-loading-overlay {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            bottom: 0;
            background: rgba(0, 0, 0, 0.5);
            display: flex;
            align-items: center;
            justify-content: center;
            z-index: 9999;
        }

        .bulk-loading-content {
            background: white;
            padding: 2rem;
            border-radius: 8px;
            text-align: center;
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
        }

        .bulk-loading-text {
            font-weight: 500;
            color: #495057;
        }

        .bulk-action-toolbar {
            transition: all 0.3s ease;
        }

        .selection-info {
            font-size: 0.875rem;
        }

        .bulk-action-btn {
            transition: all 0.2s ease;
        }

        .bulk-action-btn:hover {
            transform: translateY(-1px);
        }

        .bulk-alert {
            position: relative;
            z-index: 1050;
        }

        .form-check-input:indeterminate {
            background-color: #0d6efd;
            border-color: #0d6efd;
            background-image: url(\"data:image/svg+xml,%3csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 20 20'%3e%3cpath fill='none' stroke='%23fff' stroke-linecap='round' stroke-linejoin='round' stroke-width='3' d='M6 10h8'/%3e%3c/svg%3e\");
        }

        .table tbody tr:hover .form-check-input {
            opacity: 1;
        }

        .table tbody .form-check-input {
            opacity: 0.7;
            transition: opacity 0.2s ease;
        }
        "
        </style>
    }
}

/// Добавляет стили в `<head>` один раз на страницу
pub fn ensure_styles() {
    if dom::element_by_id(STYLES_ID).is_some() {
        return;
    }
    if let Some(head) = dom::document().and_then(|d| d.head()) {
        dom::mount_into(&head, BulkActionStyles);
    }
}
