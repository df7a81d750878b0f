//! Выпадающий список сортировки по колонке приоритета.
//!
//! # Пример
//!
//! ```ignore
//! <PrioritySortSelect
//!     value=dropdown_value
//!     on_select=UnsyncCallback::new(move |value: String| controller.priority_sort(&value))
//! />
//! ```

use leptos::callback::UnsyncCallback;
use leptos::prelude::*;

/// Варианты списка: значение `<option>` и подпись
pub const PRIORITY_SORT_OPTIONS: &[(&str, &str)] = &[
    ("", "Default Order"),
    ("asc", "Priority: Low to High"),
    ("desc", "Priority: High to Low"),
];

/// Стиль списка: активная сортировка подсвечивается
pub fn dropdown_style(value: &str) -> &'static str {
    if value.is_empty() {
        "font-size: 0.75rem; padding: 2px 4px; font-weight: normal;"
    } else {
        "font-size: 0.75rem; padding: 2px 4px; background-color: #e3f2fd; font-weight: bold;"
    }
}

#[component]
pub fn PrioritySortSelect(
    /// Текущее значение ("", "asc", "desc")
    #[prop(into)]
    value: Signal<String>,
    /// Выбор пользователя
    on_select: UnsyncCallback<String>,
) -> impl IntoView {
    view! {
        <select
            class="form-select form-select-sm priority-sort-filter"
            style=move || dropdown_style(&value.get())
            prop:value=move || value.get()
            on:change=move |ev| on_select.run(event_target_value(&ev))
        >
            {PRIORITY_SORT_OPTIONS
                .iter()
                .map(|(code, label)| view! { <option value=*code>{*label}</option> })
                .collect_view()}
        </select>
    }
}

/// Обёртка с подписью, вставляется над таблицей
#[component]
pub fn PriorityFilterBar(
    #[prop(into)]
    value: Signal<String>,
    on_select: UnsyncCallback<String>,
) -> impl IntoView {
    view! {
        <div class="row align-items-center">
            <div class="col-auto">
                <label class="form-label mb-0 fw-bold">"Priority Filter:"</label>
            </div>
            <div class="col-auto" id="priority-sort-dropdown-container">
                <PrioritySortSelect value=value on_select=on_select/>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::SortDirection;

    #[test]
    fn test_option_values_match_sort_codes() {
        assert_eq!(PRIORITY_SORT_OPTIONS[0].0, "");
        assert_eq!(PRIORITY_SORT_OPTIONS[1].0, SortDirection::Ascending.code());
        assert_eq!(PRIORITY_SORT_OPTIONS[2].0, SortDirection::Descending.code());
    }

    #[test]
    fn test_dropdown_style_highlights_active_sort() {
        assert!(!dropdown_style("").contains("background-color"));
        assert!(dropdown_style("desc").contains("font-weight: bold"));
    }
}
