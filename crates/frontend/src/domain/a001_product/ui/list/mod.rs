use super::details::ProductDetails;
use crate::shared::columns::Column;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::modal::Modal;
use crate::shared::components::number_format::format_cop;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::list_controller::{load_stats, ListController};
use crate::shared::mutation::MutationExecutor;
use crate::shared::notifications::ToastService;
use crate::shared::query::QueryClient;
use crate::shared::service::ResourceService;
use contracts::domain::a001_product::aggregate::{Product, ProductStats};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

const SERVICE: ResourceService = ResourceService::new("product");

#[derive(Clone, PartialEq)]
struct ProductRow {
    id: String,
    code: String,
    description: String,
    brand: String,
    category: String,
    sale_price: f64,
    stock: i64,
}

impl From<Product> for ProductRow {
    fn from(product: Product) -> Self {
        Self {
            id: product.base.id.as_string(),
            code: product.base.code,
            description: product.base.description,
            brand: product.brand,
            category: product.category,
            sale_price: product.sale_price,
            stock: product.stock,
        }
    }
}

fn columns() -> Vec<Column<ProductRow>> {
    vec![
        Column::text("code", "Código", |r: &ProductRow| r.code.clone()),
        Column::text("description", "Nombre", |r: &ProductRow| {
            r.description.clone()
        }),
        Column::text("brand", "Marca", |r: &ProductRow| r.brand.clone()),
        Column::text("category", "Categoría", |r: &ProductRow| r.category.clone()),
        Column::money("sale_price", "Precio de venta", |r: &ProductRow| {
            r.sale_price
        }),
        Column::text("stock", "Stock", |r: &ProductRow| r.stock.to_string()),
        Column::actions("actions", "Acciones"),
    ]
}

/// Catalogue page. Products have no lifecycle, so the table offers only
/// edit and delete.
#[component]
pub fn ProductListPage() -> impl IntoView {
    let client = use_context::<QueryClient>().expect("QueryClient not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let controller = ListController::new(SERVICE, client.clone());
    let executor = MutationExecutor::new(client.clone(), toasts, "product");
    let stats = RwSignal::new(ProductStats::default());

    controller.load();
    load_stats(client.clone(), SERVICE, stats);

    let modal_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);

    let rows = {
        let controller = controller.clone();
        Signal::derive(move || {
            controller
                .typed_rows::<Product>()
                .into_iter()
                .map(ProductRow::from)
                .collect::<Vec<_>>()
        })
    };

    let reload = {
        let controller = controller.clone();
        let client = client.clone();
        move || {
            controller.load();
            load_stats(client.clone(), SERVICE, stats);
        }
    };

    let on_search = {
        let controller = controller.clone();
        Callback::new(move |value: String| controller.set_search(value))
    };
    let on_page_change = {
        let controller = controller.clone();
        Callback::new(move |page: usize| controller.set_page(page))
    };
    let on_per_page_change = {
        let controller = controller.clone();
        Callback::new(move |per_page: usize| controller.set_per_page(per_page))
    };
    let on_refresh = {
        let controller = controller.clone();
        move |_| controller.force_refresh()
    };

    let on_new = move |_| {
        editing_id.set(None);
        modal_open.set(true);
    };
    let on_edit = Callback::new(move |id: String| {
        editing_id.set(Some(id));
        modal_open.set(true);
    });
    let on_delete = {
        let executor = executor.clone();
        let reload = reload.clone();
        Callback::new(move |id: String| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("¿Eliminar este producto?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let target_id = id.clone();
            executor.execute(
                "eliminar".into(),
                Some(id),
                async move { SERVICE.delete(&target_id).await },
                reload.clone(),
            );
        })
    };
    let on_saved = {
        let reload = reload.clone();
        Callback::new(move |_| {
            modal_open.set(false);
            reload();
        })
    };

    let state = controller.state;
    let loading = controller.loading;
    let total = controller.total;
    let last_page = controller.last_page;
    let error = controller.error;
    let pending_rows = executor.pending_rows;
    let modal_executor = executor.clone();

    {
        let controller = controller.clone();
        on_cleanup(move || controller.cancel());
    }

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">{"Productos"}</h2>
                <div class="page__header-actions">
                    <button class="button button--secondary" on:click=on_refresh title="Recargar">
                        {"Actualizar"}
                    </button>
                    <button class="button button--primary" on:click=on_new>
                        {"Nuevo producto"}
                    </button>
                </div>
            </div>

            <div class="stats-strip">
                <StatCard
                    label="Productos"
                    value=Signal::derive(move || stats.get().total_products.to_string())
                />
                <StatCard
                    label="Stock bajo"
                    value=Signal::derive(move || stats.get().low_stock.to_string())
                />
                <StatCard
                    label="Valor de inventario"
                    value=Signal::derive(move || format_cop(stats.get().inventory_value))
                />
            </div>

            <div class="page__filters">
                <SearchInput on_change=on_search placeholder="Buscar por código, nombre o marca..." />
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">{e.to_string()}</div>
            })}

            <DataTable
                columns=columns()
                rows=rows
                loading=loading
                row_id=|r: &ProductRow| r.id.clone()
                on_edit=on_edit
                on_delete=on_delete
                pending_rows=Signal::from(pending_rows)
                empty_message="No hay productos en el catálogo"
            />

            <PaginationControls
                current_page=Signal::derive(move || state.get().page)
                last_page=last_page
                total_count=total
                per_page=Signal::derive(move || state.get().per_page)
                on_page_change=on_page_change
                on_per_page_change=on_per_page_change
            />

            <Modal open=modal_open on_close=Callback::new(move |_| modal_open.set(false))>
                <ProductDetails
                    editing=editing_id
                    executor=modal_executor.clone()
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| modal_open.set(false))
                />
            </Modal>
        </div>
    }
}
