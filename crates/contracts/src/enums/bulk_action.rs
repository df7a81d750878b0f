use serde::{Deserialize, Serialize};

/// Массовые операции над выбранными строками списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Delete,
    Enable,
    Disable,
    Archive,
}

impl BulkAction {
    /// Код операции, как он записан в `data-bulk-action`
    pub fn code(&self) -> &'static str {
        match self {
            BulkAction::Delete => "delete",
            BulkAction::Enable => "enable",
            BulkAction::Disable => "disable",
            BulkAction::Archive => "archive",
        }
    }

    /// Отглагольная форма для индикатора загрузки ("Deleting 3 item(s)...")
    pub fn progress_verb(&self) -> &'static str {
        match self {
            BulkAction::Delete => "Deleting",
            BulkAction::Enable => "Enabling",
            BulkAction::Disable => "Disabling",
            BulkAction::Archive => "Archiving",
        }
    }

    /// Адрес по умолчанию, если кнопка не задала `data-<action>-url`
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            BulkAction::Delete => "/bulk-delete",
            BulkAction::Enable => "/bulk-enable",
            BulkAction::Disable => "/bulk-disable",
            BulkAction::Archive => "/bulk-archive",
        }
    }

    /// Имя data-атрибута кнопки с переопределённым адресом
    pub fn endpoint_attribute(&self) -> &'static str {
        match self {
            BulkAction::Delete => "data-delete-url",
            BulkAction::Enable => "data-enable-url",
            BulkAction::Disable => "data-disable-url",
            BulkAction::Archive => "data-archive-url",
        }
    }

    /// Текст подтверждения для `count` выбранных элементов
    pub fn confirm_message(&self, count: usize) -> String {
        match self {
            BulkAction::Delete => format!(
                "Are you sure you want to delete {} selected item(s)? This action cannot be undone.",
                count
            ),
            _ => format!(
                "Are you sure you want to {} {} selected item(s)?",
                self.code(),
                count
            ),
        }
    }

    /// Все операции
    pub fn all() -> Vec<BulkAction> {
        vec![
            BulkAction::Delete,
            BulkAction::Enable,
            BulkAction::Disable,
            BulkAction::Archive,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "delete" => Some(BulkAction::Delete),
            "enable" => Some(BulkAction::Enable),
            "disable" => Some(BulkAction::Disable),
            "archive" => Some(BulkAction::Archive),
            _ => None,
        }
    }
}

impl std::fmt::Display for BulkAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for action in BulkAction::all() {
            assert_eq!(BulkAction::from_code(action.code()), Some(action));
        }
        assert_eq!(BulkAction::from_code("purge"), None);
        assert_eq!(BulkAction::from_code("Delete"), None);
    }

    #[test]
    fn test_confirm_messages() {
        assert_eq!(
            BulkAction::Delete.confirm_message(2),
            "Are you sure you want to delete 2 selected item(s)? This action cannot be undone."
        );
        assert_eq!(
            BulkAction::Archive.confirm_message(1),
            "Are you sure you want to archive 1 selected item(s)?"
        );
    }

    #[test]
    fn test_deserialize_lowercase() {
        let action: BulkAction = serde_json::from_str("\"disable\"").unwrap();
        assert_eq!(action, BulkAction::Disable);
    }
}
