//! Живые превью на формах объявлений и сообщений.

use crate::shared::date_utils::ValidityPreview;
use leptos::prelude::*;

pub const SCROLLING_PLACEHOLDER: &str = "Enter your message above to see the preview";
pub const VALIDITY_PLACEHOLDER: &str = "Select dates to see validity period";

/// Класс бейджа приоритета для значения `<select id="priority">`
pub fn priority_badge_class(value: &str) -> String {
    if value.is_empty() {
        "priority-preview".to_string()
    } else {
        format!("priority-preview priority-{}", value)
    }
}

/// Текст бегущей строки: сообщение без краевых пробелов или подсказка
pub fn scrolling_text(message: &str) -> String {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        SCROLLING_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}

#[component]
pub fn PriorityPreview(
    /// Значение выбранного варианта
    #[prop(into)]
    value: Signal<String>,
    /// Текст выбранного варианта
    #[prop(into)]
    label: Signal<String>,
) -> impl IntoView {
    view! {
        <small class="text-muted">"Preview:"</small>
        <br/>
        <span id="priorityPreview" class=move || priority_badge_class(&value.get())>
            {move || label.get()}
        </span>
    }
}

#[component]
pub fn ScrollingPreview(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <h6><i class="bi bi-eye me-2"></i>"Scrolling Message Preview"</h6>
        <div class="scrolling-text" id="scrollingText">
            {move || scrolling_text(&message.get())}
        </div>
    }
}

#[component]
pub fn ValidityCard(#[prop(into)] preview: Signal<ValidityPreview>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-body py-2">
                <h6 class="card-title mb-2">
                    <i class="bi bi-calendar-check me-2"></i>"Validity Period"
                </h6>
                <div id="dateValidityPreview" class="text-muted">
                    {move || match preview.get() {
                        ValidityPreview::Incomplete => view! {
                            <span>{VALIDITY_PLACEHOLDER}</span>
                        }.into_any(),
                        ValidityPreview::EndBeforeStart => view! {
                            <span class="text-danger">
                                <i class="bi bi-exclamation-triangle me-1"></i>
                                "End date must be after start date"
                            </span>
                        }.into_any(),
                        ValidityPreview::Period { days, status } => view! {
                            <div class="d-flex justify-content-between align-items-center">
                                <span>{format!("Duration: {} day(s)", days)}</span>
                                <span>
                                    "Status: "
                                    <span class=status.css_class()>
                                        <i class=status.icon()></i>
                                        {status.label()}
                                    </span>
                                </span>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_badge_class() {
        assert_eq!(priority_badge_class(""), "priority-preview");
        assert_eq!(priority_badge_class("3"), "priority-preview priority-3");
    }

    #[test]
    fn test_scrolling_text() {
        assert_eq!(scrolling_text("   "), SCROLLING_PLACEHOLDER);
        assert_eq!(scrolling_text("  Plant shutdown at 6pm "), "Plant shutdown at 6pm");
    }
}
