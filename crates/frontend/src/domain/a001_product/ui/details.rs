use crate::shared::mutation::MutationExecutor;
use crate::shared::service::ResourceService;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SERVICE: ResourceService = ResourceService::new("product");

/// Create/edit form for a catalogue product.
#[component]
pub fn ProductDetails(
    /// `Some(id)` edits an existing product, `None` creates one
    #[prop(into)]
    editing: Signal<Option<String>>,
    executor: MutationExecutor,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(ProductDto::default());
    let error = RwSignal::new(None::<String>);

    if let Some(existing_id) = editing.get_untracked() {
        spawn_local(async move {
            match SERVICE.get::<Product>(&existing_id).await {
                Ok(product) => form.set(ProductDto {
                    id: Some(product.base.id.as_string()),
                    code: Some(product.base.code),
                    description: product.base.description,
                    brand: product.brand,
                    category: product.category,
                    purchase_price: product.purchase_price,
                    sale_price: product.sale_price,
                    stock: product.stock,
                    notes: product.base.notes,
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
                    Some(id) => SERVICE.update::<_, Product>(&id, &dto).await.map(|_| ()),
                    None => SERVICE.create::<_, Product>(&dto).await.map(|_| ()),
                }
            },
            move || on_saved.run(()),
        );
    };

    view! {
        <div class="details-form">
            <h3 class="details-form__title">
                {move || if editing.get().is_some() { "Editar producto" } else { "Nuevo producto" }}
            </h3>

            {move || error.get().map(|message| view! {
                <div class="warning-box">{message}</div>
            })}

            <div class="details-form__field">
                <label>{"Nombre"}</label>
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
                <label>{"Marca"}</label>
                <input
                    type="text"
                    prop:value=move || form.get().brand
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.brand = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Categoría"}</label>
                <input
                    type="text"
                    placeholder="monturas, lentes, accesorios..."
                    prop:value=move || form.get().category
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.category = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Precio de compra"}</label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || form.get().purchase_price.to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                        form.update(|f| f.purchase_price = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Precio de venta"}</label>
                <input
                    type="number"
                    min="0"
                    prop:value=move || form.get().sale_price.to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse().unwrap_or(0.0);
                        form.update(|f| f.sale_price = value);
                    }
                />
            </div>

            <div class="details-form__field">
                <label>{"Stock"}</label>
                <input
                    type="number"
                    min="0"
                    step="1"
                    prop:value=move || form.get().stock.to_string()
                    on:input=move |ev| {
                        let value = event_target_value(&ev).parse().unwrap_or(0);
                        form.update(|f| f.stock = value);
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
