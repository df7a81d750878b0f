use serde::{Deserialize, Serialize};

/// Направление сортировки колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Значение в API таблицы и в `<option value>`
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Значение выпадающего списка сортировки: пустая строка означает "без сортировки"
pub fn direction_code(direction: Option<SortDirection>) -> &'static str {
    direction.map(|d| d.code()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(SortDirection::from_code("asc"), Some(SortDirection::Ascending));
        assert_eq!(SortDirection::from_code("desc"), Some(SortDirection::Descending));
        assert_eq!(SortDirection::from_code(""), None);
        assert_eq!(SortDirection::from_code("ASC"), None);
    }

    #[test]
    fn test_direction_code() {
        assert_eq!(direction_code(None), "");
        assert_eq!(direction_code(Some(SortDirection::Descending)), "desc");
    }
}
