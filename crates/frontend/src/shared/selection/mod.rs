//! Выбор строк списка чекбоксами.
//!
//! Состояние не хранится: после любого изменения оно заново вычисляется
//! по текущим чекбоксам строк ([`SelectionSnapshot::from_rows`]).

pub mod dom;

use serde::Serialize;

/// Состояние чекбокса "выбрать все"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    /// `(checked, indeterminate)` для свойств элемента
    pub fn flags(&self) -> (bool, bool) {
        match self {
            CheckboxState::Unchecked => (false, false),
            CheckboxState::Checked => (true, false),
            CheckboxState::Indeterminate => (false, true),
        }
    }
}

/// Чекбокс строки, как он выглядит в DOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCheckbox {
    pub value: String,
    pub checked: bool,
    /// Строка видна на странице (не скрыта пагинацией или фильтром)
    pub visible: bool,
}

impl RowCheckbox {
    pub fn new(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: value.into(),
            checked,
            visible: true,
        }
    }
}

/// Значение чекбокса без id: пустое или браузерное "on" по умолчанию
pub fn is_payload_free(value: &str) -> bool {
    value.is_empty() || value == "on"
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    pub total: usize,
    /// Отмеченные строки, включая чекбоксы без id
    pub count: usize,
    /// Id отмеченных строк; чекбоксы без id сюда не попадают
    pub ids: Vec<String>,
}

impl SelectionSnapshot {
    pub fn from_rows(rows: &[RowCheckbox]) -> Self {
        let checked: Vec<&RowCheckbox> = rows.iter().filter(|row| row.checked).collect();
        Self {
            total: rows.len(),
            count: checked.len(),
            ids: checked
                .iter()
                .filter(|row| !is_payload_free(&row.value))
                .map(|row| row.value.clone())
                .collect(),
        }
    }

    pub fn master_state(&self) -> CheckboxState {
        if self.count == 0 {
            CheckboxState::Unchecked
        } else if self.count == self.total {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }

    /// Кнопки массовых операций видны только при непустом выборе
    pub fn actions_visible(&self) -> bool {
        self.count > 0
    }

    pub fn info_text(&self) -> Option<String> {
        self.actions_visible()
            .then(|| format!("{} item(s) selected", self.count))
    }

    pub fn stats(&self) -> SelectionStats {
        let percentage = if self.total > 0 {
            ((self.count as f64 / self.total as f64) * 100.0).round() as u32
        } else {
            0
        };
        SelectionStats {
            total: self.total,
            selected: self.count,
            unselected: self.total - self.count,
            percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionStats {
    pub total: usize,
    pub selected: usize,
    pub unselected: usize,
    pub percentage: u32,
}

/// Критерии быстрого выбора
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectCriteria {
    All,
    None,
    Visible,
    Invert,
}

impl SelectCriteria {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(SelectCriteria::All),
            "none" => Some(SelectCriteria::None),
            "visible" => Some(SelectCriteria::Visible),
            "invert" => Some(SelectCriteria::Invert),
            _ => None,
        }
    }

    /// Новое состояние строки после применения критерия
    pub fn apply(&self, row: &RowCheckbox) -> bool {
        match self {
            SelectCriteria::All => true,
            SelectCriteria::None => false,
            SelectCriteria::Visible => row.checked || row.visible,
            SelectCriteria::Invert => !row.checked,
        }
    }
}

/// Вписывает количество в подпись кнопки после первого слова:
/// "Delete" -> "Delete (3)", "Delete (2) selected" -> "Delete (3) selected"
pub fn annotate_label(label: &str, count: usize) -> String {
    let label = label.trim();
    let (first, rest) = match label.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (label, ""),
    };

    let rest = strip_count(rest);
    if rest.is_empty() {
        format!("{} ({})", first, count)
    } else {
        format!("{} ({}) {}", first, count, rest)
    }
}

/// Убирает ранее вписанное "(N)" в начале остатка подписи
fn strip_count(rest: &str) -> &str {
    let Some(inner) = rest.strip_prefix('(') else {
        return rest;
    };
    match inner.split_once(')') {
        Some((digits, tail)) if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) => {
            tail.trim_start()
        }
        _ => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(checked: &[bool]) -> Vec<RowCheckbox> {
        checked
            .iter()
            .enumerate()
            .map(|(i, c)| RowCheckbox::new(format!("id-{}", i + 1), *c))
            .collect()
    }

    #[test]
    fn test_master_state_tri_state() {
        // 5 строк, отмечены 1 и 3
        let some = SelectionSnapshot::from_rows(&rows(&[true, false, true, false, false]));
        assert_eq!(some.master_state(), CheckboxState::Indeterminate);
        assert_eq!(some.master_state().flags(), (false, true));

        let all = SelectionSnapshot::from_rows(&rows(&[true; 5]));
        assert_eq!(all.master_state(), CheckboxState::Checked);
        assert_eq!(all.master_state().flags(), (true, false));

        let none = SelectionSnapshot::from_rows(&rows(&[false; 5]));
        assert_eq!(none.master_state(), CheckboxState::Unchecked);
        assert_eq!(none.master_state().flags(), (false, false));
    }

    #[test]
    fn test_empty_table_is_unchecked() {
        let snapshot = SelectionSnapshot::from_rows(&[]);
        assert_eq!(snapshot.master_state(), CheckboxState::Unchecked);
        assert!(!snapshot.actions_visible());
        assert_eq!(snapshot.stats().percentage, 0);
    }

    #[test]
    fn test_payload_free_values_count_but_have_no_id() {
        let snapshot = SelectionSnapshot::from_rows(&[
            RowCheckbox::new("17", true),
            RowCheckbox::new("on", true),
            RowCheckbox::new("", true),
            RowCheckbox::new("42", false),
        ]);
        assert_eq!(snapshot.count, 3);
        assert_eq!(snapshot.ids, vec!["17".to_string()]);
        assert_eq!(snapshot.info_text().as_deref(), Some("3 item(s) selected"));
    }

    #[test]
    fn test_stats() {
        let stats = SelectionSnapshot::from_rows(&rows(&[true, false, false])).stats();
        assert_eq!(
            stats,
            SelectionStats {
                total: 3,
                selected: 1,
                unselected: 2,
                percentage: 33,
            }
        );
        let stats = SelectionSnapshot::from_rows(&rows(&[true, true, false])).stats();
        assert_eq!(stats.percentage, 67);
    }

    #[test]
    fn test_select_criteria() {
        let mut hidden = RowCheckbox::new("9", false);
        hidden.visible = false;
        let checked = RowCheckbox::new("1", true);

        assert!(SelectCriteria::All.apply(&hidden));
        assert!(!SelectCriteria::None.apply(&checked));
        assert!(!SelectCriteria::Visible.apply(&hidden));
        assert!(SelectCriteria::Visible.apply(&checked));
        assert!(SelectCriteria::Invert.apply(&hidden));
        assert!(!SelectCriteria::Invert.apply(&checked));
        assert_eq!(SelectCriteria::from_code("invert"), Some(SelectCriteria::Invert));
        assert_eq!(SelectCriteria::from_code("some"), None);
    }

    #[test]
    fn test_annotate_label() {
        assert_eq!(annotate_label("Delete", 3), "Delete (3)");
        assert_eq!(annotate_label("Delete selected", 2), "Delete (2) selected");
        assert_eq!(annotate_label("Delete (2) selected", 5), "Delete (5) selected");
        assert_eq!(annotate_label("  Archive (12) ", 1), "Archive (1)");
        assert_eq!(annotate_label("Enable (all)", 4), "Enable (4) (all)");
    }
}
