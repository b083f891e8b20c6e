use crate::shared::components::number_format::format_cop;
use crate::shared::mutation::MutationExecutor;
use crate::shared::service::ResourceService;
use contracts::domain::a005_service_order::aggregate::{ServiceOrder, ServiceOrderDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SERVICE: ResourceService = ResourceService::new("service-order");

/// Create/edit form for a service order. Shows the outstanding balance
/// (total minus advance) as the figures change.
#[component]
pub fn ServiceOrderDetails(
    /// `Some(id)` edits an existing order, `None` creates one
    #[prop(into)]
    editing: Signal<Option<String>>,
    executor: MutationExecutor,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(ServiceOrderDto::default());
    let error = RwSignal::new(None::<String>);

    if let Some(existing_id) = editing.get_untracked() {
        spawn_local(async move {
            match SERVICE.get::<ServiceOrder>(&existing_id).await {
                Ok(order) => form.set(ServiceOrderDto {
                    id: Some(order.base.id.as_string()),
                    code: Some(order.base.code),
                    description: order.base.description,
                    customer_name: order.customer_name,
                    total: order.total,
                    advance: order.advance,
                    delivery_date: order.delivery_date,
                    notes: order.base.notes,
                }),
                Err(e) => error.set(Some(format!("Error al cargar: {}", e))),
            }
        });
    }

    let save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        executor.execute(
            "guardar".into(),
            None,
            async move {
                match dto.id.clone() {
                    Some(id) => SERVICE
                        .update::<_, ServiceOrder>(&id, &dto)
                        .await
                        .map(|_| ()),
                    None => SERVICE.create::<_, ServiceOrder>(&dto).await.map(|_| ()),
                }
            },
            move || on_saved.run(()),
        );
    };

    view! {
        <div class="details-form">
            <h3 class="details-form__title">
                {move || if editing.get().is_some() {
                    "Editar orden de servicio"
                } else {
                    "Nueva orden de servicio"
                }}
            </h3>

            {move || error.get().map(|message| view! {
                <div class="warning-box">{message}</div>
            })}

            <div class="details-form__field">
                <label>{"Cliente"}</label>
                <input
                    type="text"
                    prop:value=move || form.get().customer_name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.customer_name = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Trabajo"}</label>
                <input
                    type="text"
                    placeholder="Montaje de lentes, ajuste de montura..."
                    prop:value=move || form.get().description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.description = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Total"}</label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || form.get().total.to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                        form.update(|f| f.total = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Abono"}</label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || form.get().advance.to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                        form.update(|f| f.advance = value);
                    }
                />
            </div>

            <div class="details-form__field details-form__field--readonly">
                <label>{"Saldo pendiente"}</label>
                <span class="details-form__derived">
                    {move || {
                        let f = form.get();
                        format_cop(f.total - f.advance)
                    }}
                </span>
            </div>

            <div class="details-form__field">
                <label>{"Fecha de entrega"}</label>
                <input
                    type="date"
                    prop:value=move || form.get().delivery_date
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.delivery_date = value);
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
