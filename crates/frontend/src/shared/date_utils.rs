/// Utilities for the validity-period preview on announcement forms
///
/// Accepts the values produced by `<input type="date">` and
/// `<input type="datetime-local">`
use chrono::{NaiveDate, NaiveDateTime};

/// Parse "YYYY-MM-DD", "YYYY-MM-DDTHH:MM" or "YYYY-MM-DDTHH:MM:SS"
/// A bare date is taken as midnight
pub fn parse_form_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityStatus {
    Future,
    Active,
    Expired,
}

impl ValidityStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ValidityStatus::Future => "Future",
            ValidityStatus::Active => "Active",
            ValidityStatus::Expired => "Expired",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ValidityStatus::Future => "text-info",
            ValidityStatus::Active => "text-success",
            ValidityStatus::Expired => "text-secondary",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ValidityStatus::Future => "bi bi-clock me-1",
            ValidityStatus::Active => "bi bi-check-circle me-1",
            ValidityStatus::Expired => "bi bi-x-circle me-1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityPreview {
    /// One or both dates are not filled in
    Incomplete,
    EndBeforeStart,
    Period { days: i64, status: ValidityStatus },
}

/// Evaluate the period between two form values relative to `now`
pub fn evaluate_validity(from: &str, to: &str, now: NaiveDateTime) -> ValidityPreview {
    let (Some(from), Some(to)) = (parse_form_datetime(from), parse_form_datetime(to)) else {
        return ValidityPreview::Incomplete;
    };
    if to < from {
        return ValidityPreview::EndBeforeStart;
    }

    // Partial days count as a whole day
    let seconds = (to - from).num_seconds();
    let days = (seconds + 86_399) / 86_400;

    let status = if now < from {
        ValidityStatus::Future
    } else if now <= to {
        ValidityStatus::Active
    } else {
        ValidityStatus::Expired
    };
    ValidityPreview::Period { days, status }
}
