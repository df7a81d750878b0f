use leptos::prelude::*;

/// Уведомление о том, что загружена только часть записей
#[component]
pub fn LoadAllNotice(
    total: usize,
    current: usize,
    /// Адрес страницы со всеми записями
    #[prop(into)]
    url: String,
) -> impl IntoView {
    let (loading, set_loading) = signal(false);

    let load_all = move |_| {
        set_loading.set(true);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&url);
        }
    };

    view! {
        <div class="row align-items-center">
            <div class="col-md-8">
                <div class="d-flex align-items-center">
                    <i class="bi bi-info-circle notification-icon me-3"></i>
                    <div>
                        <h6 class="mb-1">"Limited Data View"</h6>
                        <p class="mb-0 text-muted">
                            {format!(
                                "Showing {} of {} records. Load all data for full search and sorting capabilities.",
                                current, total
                            )}
                        </p>
                    </div>
                </div>
            </div>
            <div class="col-md-4 text-end">
                <button class="btn btn-load-all" disabled=move || loading.get() on:click=load_all>
                    {move || if loading.get() {
                        view! { <i class="bi bi-arrow-repeat spin me-2"></i>"Loading..." }.into_any()
                    } else {
                        view! { <i class="bi bi-download me-2"></i>"Load All Data" }.into_any()
                    }}
                </button>
            </div>
        </div>
    }
}
