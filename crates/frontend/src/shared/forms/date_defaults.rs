//! Значения по умолчанию для срока действия `#validFrom` / `#validTo`.

use crate::shared::date_utils::parse_form_datetime;
use crate::shared::dom;
use chrono::NaiveDate;
use contracts::PortalError;
use web_sys::{Element, Event, HtmlInputElement};

const ATTACHED_ATTR: &str = "data-date-defaults";

/// Сегодняшняя дата в формате поля: `date` или `datetime-local` (полночь)
pub fn default_start_value(today: NaiveDate, input_type: &str) -> String {
    if input_type == "datetime-local" {
        today.format("%Y-%m-%dT00:00").to_string()
    } else {
        today.format("%Y-%m-%d").to_string()
    }
}

/// Окончание раньше нового начала сбрасывается
pub fn clears_valid_to(valid_from: &str, valid_to: &str) -> bool {
    match (parse_form_datetime(valid_from), parse_form_datetime(valid_to)) {
        (Some(from), Some(to)) => to < from,
        _ => false,
    }
}

fn sync_valid_to(valid_from: &HtmlInputElement, valid_to: &HtmlInputElement) {
    let from = valid_from.value();
    valid_to.set_min(&from);
    if clears_valid_to(&from, &valid_to.value()) {
        valid_to.set_value("");
        // Превью срока действия слушает change
        if let Ok(event) = Event::new("change") {
            let _ = valid_to.dispatch_event(&event);
        }
    }
}

pub fn attach_date_defaults(
    valid_from: &HtmlInputElement,
    valid_to: Option<&HtmlInputElement>,
) -> Result<(), PortalError> {
    let element: &Element = valid_from;
    if !dom::mark_once(element, ATTACHED_ATTR) {
        return Ok(());
    }

    if valid_from.value().is_empty() {
        let today = chrono::Local::now().date_naive();
        let value = default_start_value(today, &valid_from.type_());
        valid_from.set_value(&value);
        valid_from.set_min(&value);
    }

    let Some(valid_to) = valid_to else {
        return Ok(());
    };
    let (from, to) = (valid_from.clone(), valid_to.clone());
    dom::listen(valid_from, "change", move |_| sync_valid_to(&from, &to))
}
