pub mod sidebar;

use crate::shared::notifications::ToastHost;
use leptos::prelude::*;
use sidebar::Sidebar;

/// Application shell.
///
/// ```text
/// +-----------+---------------------------+
/// |  Sidebar  |         Content           |
/// |  (nav)    |     (routed page)         |
/// +-----------+---------------------------+
/// ```
///
/// The toast stack floats above everything in a fixed corner.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="app-main">
                {children()}
            </main>
            <ToastHost />
        </div>
    }
}
