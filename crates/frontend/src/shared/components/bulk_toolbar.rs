//! Панель массовых операций над таблицей списка.
//!
//! Кнопки размечены так же, как кнопки шаблона (`data-bulk-action`,
//! `data-<action>-url`), и обрабатываются тем же делегированным кликом.

use crate::shared::dom;
use contracts::enums::BulkAction;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::Element;

pub const TOOLBAR_CLASS: &str = "bulk-action-toolbar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub action: BulkAction,
    pub url: String,
}

impl ToolbarButton {
    pub fn button_class(&self) -> &'static str {
        match self.action {
            BulkAction::Delete => "btn btn-outline-danger btn-sm bulk-action-btn",
            BulkAction::Enable => "btn btn-outline-success btn-sm bulk-action-btn",
            BulkAction::Disable => "btn btn-outline-warning btn-sm bulk-action-btn",
            BulkAction::Archive => "btn btn-outline-secondary btn-sm bulk-action-btn",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self.action {
            BulkAction::Delete => "bi bi-trash me-1",
            BulkAction::Enable => "bi bi-check-circle me-1",
            BulkAction::Disable => "bi bi-x-circle me-1",
            BulkAction::Archive => "bi bi-archive me-1",
        }
    }

    pub fn label(&self) -> &'static str {
        match self.action {
            BulkAction::Delete => "Delete",
            BulkAction::Enable => "Enable",
            BulkAction::Disable => "Disable",
            BulkAction::Archive => "Archive",
        }
    }

    /// Значение для `data-<action>-url`, только у атрибута своей операции
    fn url_if(&self, action: BulkAction) -> Option<String> {
        (self.action == action).then(|| self.url.clone())
    }
}

/// Кнопки по словарю "операция → адрес"; порядок фиксирован,
/// операции без адреса и незнакомые ключи пропускаются
pub fn toolbar_buttons(actions: &BTreeMap<String, String>) -> Vec<ToolbarButton> {
    BulkAction::all()
        .into_iter()
        .filter_map(|action| {
            actions
                .get(action.code())
                .filter(|url| !url.is_empty())
                .map(|url| ToolbarButton {
                    action,
                    url: url.clone(),
                })
        })
        .collect()
}

/// Видна, пока выбрана хотя бы одна строка (переключает пересчёт выбора)
#[component]
pub fn BulkActionToolbar(buttons: Vec<ToolbarButton>) -> impl IntoView {
    view! {
        <div class=format!("{} d-none mb-3", TOOLBAR_CLASS)>
            <div class="card border-primary">
                <div class="card-body py-2">
                    <div class="row align-items-center">
                        <div class="col-md-6">
                            <span class="selection-info text-primary fw-bold"></span>
                        </div>
                        <div class="col-md-6 text-end">
                            <div class="btn-group" role="group">
                                {buttons
                                    .into_iter()
                                    .map(|button| view! {
                                        <button
                                            type="button"
                                            class=button.button_class()
                                            data-bulk-action=button.action.code()
                                            data-delete-url=button.url_if(BulkAction::Delete)
                                            data-enable-url=button.url_if(BulkAction::Enable)
                                            data-disable-url=button.url_if(BulkAction::Disable)
                                            data-archive-url=button.url_if(BulkAction::Archive)
                                        >
                                            <i class=button.icon_class()></i>
                                            {button.label()}
                                        </button>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

pub fn mount_toolbar(slot: &Element, buttons: Vec<ToolbarButton>) {
    dom::mount_into(slot, move || view! { <BulkActionToolbar buttons=buttons/> });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_buttons_follow_fixed_order() {
        let buttons = toolbar_buttons(&actions(&[
            ("disable", "/messages/disable"),
            ("delete", "/messages/delete"),
        ]));
        let order: Vec<BulkAction> = buttons.iter().map(|b| b.action).collect();
        assert_eq!(order, vec![BulkAction::Delete, BulkAction::Disable]);
        assert_eq!(buttons[0].url, "/messages/delete");
    }

    #[test]
    fn test_empty_and_unknown_actions_skipped() {
        let buttons = toolbar_buttons(&actions(&[("enable", ""), ("purge", "/purge")]));
        assert!(buttons.is_empty());
    }

    #[test]
    fn test_url_only_on_own_attribute() {
        let button = ToolbarButton {
            action: BulkAction::Enable,
            url: "/whats-new/enable".into(),
        };
        assert_eq!(button.url_if(BulkAction::Enable).as_deref(), Some("/whats-new/enable"));
        assert_eq!(button.url_if(BulkAction::Delete), None);
        assert!(button.button_class().contains("bulk-action-btn"));
    }
}
