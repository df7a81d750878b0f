//! Массовые операции над выбранными строками.
//!
//! Подтверждённая операция превращается в обычную отправку формы POST:
//! ответ сервера это полная страница, обработчиков результата нет.

pub mod dom_host;
pub mod styles;

use contracts::enums::BulkAction;
use contracts::PortalError;
use std::collections::BTreeMap;

pub const EMPTY_SELECTION_WARNING: &str = "Please select at least one item.";
pub const IDS_FIELD: &str = "ids";
/// Имя поля токена, если страница не указала своё
pub const DEFAULT_CSRF_PARAMETER: &str = "_csrf";

/// Токен защиты от CSRF из метаданных страницы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub parameter: String,
    pub value: String,
}

/// Адреса операций, переопределённые кнопкой
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoints {
    overrides: BTreeMap<&'static str, String>,
}

impl Endpoints {
    pub fn with_override(mut self, action: BulkAction, url: impl Into<String>) -> Self {
        let url = url.into();
        if !url.is_empty() {
            self.overrides.insert(action.code(), url);
        }
        self
    }

    pub fn url_for(&self, action: BulkAction) -> String {
        self.overrides
            .get(action.code())
            .cloned()
            .unwrap_or_else(|| action.default_endpoint().to_string())
    }
}

/// Скрытая форма, которая будет отправлена браузером
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSubmission {
    pub action_url: String,
    pub method: &'static str,
    pub fields: Vec<(String, String)>,
}

impl BulkSubmission {
    /// Токен идёт первым, затем по полю `ids` на каждый id
    pub fn new(action_url: String, ids: &[String], csrf: Option<&CsrfToken>) -> Self {
        let mut fields = Vec::with_capacity(ids.len() + 1);
        if let Some(token) = csrf {
            fields.push((token.parameter.clone(), token.value.clone()));
        }
        fields.extend(ids.iter().map(|id| (IDS_FIELD.to_string(), id.clone())));
        Self {
            action_url,
            method: "POST",
            fields,
        }
    }
}

pub fn progress_message(action: BulkAction, count: usize) -> String {
    format!("{} {} item(s)...", action.progress_verb(), count)
}

/// Всё, что диспетчеру нужно от страницы
pub trait BulkActionHost {
    /// Синхронный диалог да/нет
    fn confirm(&self, message: &str) -> bool;

    /// Закрываемое предупреждение; новое заменяет предыдущее
    fn warn(&self, message: &str);

    fn show_progress(&self, message: &str);

    fn hide_progress(&self);

    fn csrf_token(&self) -> Option<CsrfToken>;

    fn submit(&self, submission: &BulkSubmission) -> Result<(), PortalError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Submitted(BulkSubmission),
    Cancelled,
}

/// Выполняет операцию: пустой выбор даёт предупреждение без запроса,
/// иначе подтверждение и отправка формы
pub fn dispatch<H: BulkActionHost + ?Sized>(
    host: &H,
    action: BulkAction,
    ids: &[String],
    endpoints: &Endpoints,
) -> Result<DispatchOutcome, PortalError> {
    if ids.is_empty() {
        host.warn(EMPTY_SELECTION_WARNING);
        return Err(PortalError::EmptySelection);
    }

    if !host.confirm(&action.confirm_message(ids.len())) {
        log::debug!("bulk {} cancelled by user", action);
        return Ok(DispatchOutcome::Cancelled);
    }

    let submission = BulkSubmission::new(endpoints.url_for(action), ids, host.csrf_token().as_ref());
    host.show_progress(&progress_message(action, ids.len()));
    if let Err(err) = host.submit(&submission) {
        // Страница не уходит, оверлей не должен её блокировать
        host.hide_progress();
        return Err(err);
    }
    log::info!("bulk {} submitted for {} item(s)", action, ids.len());
    Ok(DispatchOutcome::Submitted(submission))
}

/// Разбор `data-bulk-action` с кнопки
pub fn parse_action(code: &str) -> Result<BulkAction, PortalError> {
    BulkAction::from_code(code).ok_or_else(|| PortalError::UnknownAction(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeHost {
        answer: bool,
        reject_submit: bool,
        overlay_shown: Cell<bool>,
        token: Option<CsrfToken>,
        /// Видимые предупреждения: как в DOM, новое вытесняет старое
        alerts: RefCell<Vec<String>>,
        warn_calls: RefCell<usize>,
        confirms: RefCell<Vec<String>>,
        progress: RefCell<Vec<String>>,
        submitted: RefCell<Vec<BulkSubmission>>,
    }

    impl BulkActionHost for FakeHost {
        fn confirm(&self, message: &str) -> bool {
            self.confirms.borrow_mut().push(message.to_string());
            self.answer
        }

        fn warn(&self, message: &str) {
            *self.warn_calls.borrow_mut() += 1;
            let mut alerts = self.alerts.borrow_mut();
            alerts.clear();
            alerts.push(message.to_string());
        }

        fn show_progress(&self, message: &str) {
            self.overlay_shown.set(true);
            self.progress.borrow_mut().push(message.to_string());
        }

        fn hide_progress(&self) {
            self.overlay_shown.set(false);
        }

        fn csrf_token(&self) -> Option<CsrfToken> {
            self.token.clone()
        }

        fn submit(&self, submission: &BulkSubmission) -> Result<(), PortalError> {
            if self.reject_submit {
                return Err(PortalError::Dom("form submit blocked".into()));
            }
            self.submitted.borrow_mut().push(submission.clone());
            Ok(())
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_selection_never_submits() {
        let host = FakeHost {
            answer: true,
            ..Default::default()
        };
        let endpoints = Endpoints::default();

        for _ in 0..2 {
            let result = dispatch(&host, BulkAction::Delete, &[], &endpoints);
            assert_eq!(result, Err(PortalError::EmptySelection));
        }

        assert!(host.submitted.borrow().is_empty());
        assert!(host.confirms.borrow().is_empty());
        assert_eq!(*host.warn_calls.borrow(), 2);
        assert_eq!(host.alerts.borrow().as_slice(), [EMPTY_SELECTION_WARNING]);
    }

    #[test]
    fn test_cancelled_confirmation() {
        let host = FakeHost::default();
        let outcome = dispatch(&host, BulkAction::Archive, &ids(&["1"]), &Endpoints::default());
        assert_eq!(outcome, Ok(DispatchOutcome::Cancelled));
        assert!(host.submitted.borrow().is_empty());
        assert!(host.progress.borrow().is_empty());
    }

    #[test]
    fn test_submission_carries_token_and_ids() {
        let host = FakeHost {
            answer: true,
            token: Some(CsrfToken {
                parameter: "_csrf".into(),
                value: "tok-123".into(),
            }),
            ..Default::default()
        };
        let endpoints = Endpoints::default().with_override(BulkAction::Delete, "/whats-new/bulk-delete");

        let outcome = dispatch(&host, BulkAction::Delete, &ids(&["4", "9"]), &endpoints).unwrap();
        let expected = BulkSubmission {
            action_url: "/whats-new/bulk-delete".into(),
            method: "POST",
            fields: vec![
                ("_csrf".into(), "tok-123".into()),
                ("ids".into(), "4".into()),
                ("ids".into(), "9".into()),
            ],
        };
        assert_eq!(outcome, DispatchOutcome::Submitted(expected.clone()));
        assert_eq!(host.submitted.borrow().as_slice(), [expected]);
        assert_eq!(
            host.confirms.borrow()[0],
            "Are you sure you want to delete 2 selected item(s)? This action cannot be undone."
        );
        assert_eq!(host.progress.borrow().as_slice(), ["Deleting 2 item(s)..."]);
    }

    #[test]
    fn test_failed_submit_hides_overlay() {
        let host = FakeHost {
            answer: true,
            reject_submit: true,
            ..Default::default()
        };

        let result = dispatch(&host, BulkAction::Delete, &ids(&["1"]), &Endpoints::default());
        assert_eq!(result, Err(PortalError::Dom("form submit blocked".into())));
        assert_eq!(host.progress.borrow().as_slice(), ["Deleting 1 item(s)..."]);
        assert!(!host.overlay_shown.get());
    }

    #[test]
    fn test_overlay_stays_while_page_submits() {
        let host = FakeHost {
            answer: true,
            ..Default::default()
        };
        dispatch(&host, BulkAction::Enable, &ids(&["3"]), &Endpoints::default()).unwrap();
        assert!(host.overlay_shown.get());
    }

    #[test]
    fn test_submission_without_token() {
        let submission = BulkSubmission::new("/bulk-enable".into(), &ids(&["7"]), None);
        assert_eq!(submission.fields, vec![("ids".to_string(), "7".to_string())]);
    }

    #[test]
    fn test_endpoints() {
        let endpoints = Endpoints::default()
            .with_override(BulkAction::Enable, "/messages/enable")
            .with_override(BulkAction::Disable, "");
        assert_eq!(endpoints.url_for(BulkAction::Enable), "/messages/enable");
        assert_eq!(endpoints.url_for(BulkAction::Disable), "/bulk-disable");
        assert_eq!(endpoints.url_for(BulkAction::Archive), "/bulk-archive");
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(parse_action("enable"), Ok(BulkAction::Enable));
        assert_eq!(
            parse_action("purge"),
            Err(PortalError::UnknownAction("purge".into()))
        );
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(progress_message(BulkAction::Disable, 1), "Disabling 1 item(s)...");
    }
}
