pub mod bulk_actions;
pub mod components;
pub mod date_utils;
pub mod debounce;
pub mod dom;
pub mod export;
pub mod forms;
pub mod selection;
pub mod table;

use contracts::PortalError;

/// Инициализация одной функции страницы: ошибка пишется в лог и не
/// прерывает подключение остальных
pub fn guarded<F>(feature: &str, f: F)
where
    F: FnOnce() -> Result<(), PortalError>,
{
    match f() {
        Ok(()) => log::debug!("{} ready", feature),
        Err(err) => log::warn!("{} not initialized: {}", feature, err),
    }
}
