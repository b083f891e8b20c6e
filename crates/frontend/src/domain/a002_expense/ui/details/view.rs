use super::view_model::ExpenseDetailsViewModel;
use crate::shared::mutation::MutationExecutor;
use leptos::prelude::*;

/// Create/edit form for an expense, shown inside the list page modal.
#[component]
pub fn ExpenseDetails(
    /// `Some(id)` edits an existing expense, `None` creates one
    #[prop(into)]
    editing: Signal<Option<String>>,
    executor: MutationExecutor,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ExpenseDetailsViewModel::new();
    vm.load_if_needed(editing.get_untracked());

    let form = vm.form;
    let error = vm.error;

    let save = {
        let vm = vm.clone();
        move |_| vm.save(&executor, on_saved)
    };

    view! {
        <div class="details-form">
            <h3 class="details-form__title">
                {move || if editing.get().is_some() { "Editar gasto" } else { "Nuevo gasto" }}
            </h3>

            {move || error.get().map(|message| view! {
                <div class="warning-box">{message}</div>
            })}

            <div class="details-form__field">
                <label>{"Descripción"}</label>
                <input
                    type="text"
                    prop:value=move || form.get().description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.description = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Categoría"}</label>
                <input
                    type="text"
                    placeholder="arriendo, servicios, insumos..."
                    prop:value=move || form.get().category
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.category = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Monto"}</label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || form.get().amount.to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                        form.update(|f| f.amount = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Fecha del gasto"}</label>
                <input
                    type="date"
                    prop:value=move || form.get().expense_date
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.expense_date = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Notas"}</label>
                <textarea
                    prop:value=move || form.get().notes.unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| {
                            f.notes = if value.trim().is_empty() { None } else { Some(value) };
                        });
                    }
                ></textarea>
            </div>

            <div class="details-form__actions">
                <button class="button button--primary" on:click=save>
                    {"Guardar"}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {"Cancelar"}
                </button>
            </div>
        </div>
    }
}
