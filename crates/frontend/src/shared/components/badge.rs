use contracts::domain::common::DocumentStatus;
use leptos::prelude::*;

/// Status badge mapping a document status to label + variant.
/// Unknown statuses render their raw code with the neutral variant.
#[component]
pub fn StatusBadge(
    #[prop(into)] status: Signal<DocumentStatus>,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--{}", status.get().badge_variant())>
            {move || status.get().label().to_string()}
        </span>
    }
}
