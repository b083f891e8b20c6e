use leptos::prelude::*;

/// Single aggregate figure shown above a list (count, sum)
#[component]
pub fn StatCard(
    /// Caption under the figure
    label: &'static str,
    /// Formatted figure
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__value">{move || value.get()}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}
