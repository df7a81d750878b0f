use thiserror::Error;

/// Ошибки слоя улучшений страницы.
///
/// Ни одна из них не фатальна для страницы: точки входа логируют ошибку
/// и продолжают инициализацию остальных функций.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    /// Массовая операция без выбранных строк
    #[error("no rows selected")]
    EmptySelection,

    /// Элемент страницы или виджет таблицы отсутствует
    #[error("missing collaborator: {0}")]
    MissingCollaborator(String),

    #[error("unknown bulk action: {0}")]
    UnknownAction(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Исключение JS, пробросившееся из web-sys
    #[error("dom error: {0}")]
    Dom(String),
}

impl PortalError {
    pub fn missing(what: impl Into<String>) -> Self {
        PortalError::MissingCollaborator(what.into())
    }
}
