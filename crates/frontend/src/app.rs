use crate::routes::routes::AppRoutes;
use crate::shared::notifications::ToastService;
use crate::shared::query::QueryClient;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Explicit per-app cache instance, created at mount and dropped with the
    // app. Nothing below reaches for an ambient global.
    provide_context(QueryClient::new());

    // Toast notifications for mutation feedback
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
