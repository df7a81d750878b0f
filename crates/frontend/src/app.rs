use crate::shared::components::alert::ALERT_AUTO_HIDE_MS;
use crate::shared::dom;

/// Серверные уведомления (`.alert-dismissible` в шаблоне) закрываются сами
pub fn auto_hide_server_alerts() {
    let alerts = dom::query_all(".alert.alert-dismissible");
    if alerts.is_empty() {
        return;
    }
    dom::after(ALERT_AUTO_HIDE_MS, move || {
        for alert in alerts {
            alert.remove();
        }
    });
}
