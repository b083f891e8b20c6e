use super::details::ServiceOrderDetails;
use crate::shared::columns::Column;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::modal::Modal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::list_controller::{load_stats, ListController};
use crate::shared::mutation::MutationExecutor;
use crate::shared::notifications::ToastService;
use crate::shared::query::QueryClient;
use crate::shared::service::ResourceService;
use contracts::domain::a005_service_order::aggregate::{ServiceOrder, ServiceOrderStats};
use contracts::domain::common::{
    AggregateId, DocumentStatus, StatusPatch, ALL_STATUSES,
};
use leptos::prelude::*;

const SERVICE: ResourceService = ResourceService::new("service-order");

#[derive(Clone, PartialEq)]
struct ServiceOrderRow {
    id: String,
    code: String,
    customer_name: String,
    description: String,
    total: f64,
    advance: f64,
    delivery_date: String,
    status: DocumentStatus,
}

impl From<ServiceOrder> for ServiceOrderRow {
    fn from(order: ServiceOrder) -> Self {
        Self {
            id: order.base.id.as_string(),
            code: order.base.code,
            customer_name: order.customer_name,
            description: order.base.description,
            total: order.total,
            advance: order.advance,
            delivery_date: order.delivery_date,
            status: order.status,
        }
    }
}

fn columns() -> Vec<Column<ServiceOrderRow>> {
    vec![
        Column::text("code", "Código", |r: &ServiceOrderRow| r.code.clone()),
        Column::text("customer", "Cliente", |r: &ServiceOrderRow| {
            r.customer_name.clone()
        }),
        Column::text("description", "Trabajo", |r: &ServiceOrderRow| {
            r.description.clone()
        }),
        Column::money("total", "Total", |r: &ServiceOrderRow| r.total),
        Column::money("advance", "Abono", |r: &ServiceOrderRow| r.advance),
        Column::money("balance", "Saldo", |r: &ServiceOrderRow| {
            r.total - r.advance
        }),
        Column::date("delivery_date", "Entrega", |r: &ServiceOrderRow| {
            r.delivery_date.clone()
        }),
        Column::status("status", "Estado", |r: &ServiceOrderRow| r.status.clone()),
        Column::actions("actions", "Acciones"),
    ]
}

#[component]
pub fn ServiceOrderListPage() -> impl IntoView {
    let client = use_context::<QueryClient>().expect("QueryClient not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let controller = ListController::new(SERVICE, client.clone());
    let executor = MutationExecutor::new(client.clone(), toasts, "service-order");
    let stats = RwSignal::new(ServiceOrderStats::default());

    controller.load();
    load_stats(client.clone(), SERVICE, stats);

    let modal_open = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);

    let rows = {
        let controller = controller.clone();
        Signal::derive(move || {
            controller
                .typed_rows::<ServiceOrder>()
                .into_iter()
                .map(ServiceOrderRow::from)
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
    let on_status_change = {
        let controller = controller.clone();
        move |ev| {
            let value = event_target_value(&ev);
            let filter = (value != ALL_STATUSES).then(|| DocumentStatus::from_code(&value));
            controller.set_status_filter(filter);
        }
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
                    w.confirm_with_message("¿Eliminar esta orden de servicio?")
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
    let on_transition = {
        let executor = executor.clone();
        let reload = reload.clone();
        Callback::new(move |(id, status): (String, DocumentStatus)| {
            let verb = status.action_label().to_lowercase();
            let target_id = id.clone();
            executor.execute(
                verb,
                Some(id),
                async move {
                    SERVICE
                        .update::<_, serde_json::Value>(&target_id, &StatusPatch { status })
                        .await
                        .map(|_| ())
                },
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
                <h2 class="page__title">{"Órdenes de servicio"}</h2>
                <div class="page__header-actions">
                    <button class="button button--secondary" on:click=on_refresh title="Recargar">
                        {"Actualizar"}
                    </button>
                    <button class="button button--primary" on:click=on_new>
                        {"Nueva orden"}
                    </button>
                </div>
            </div>

            <div class="stats-strip">
                <StatCard
                    label="Órdenes"
                    value=Signal::derive(move || stats.get().total_count.to_string())
                />
                <StatCard
                    label="Pendientes"
                    value=Signal::derive(move || stats.get().pending_count.to_string())
                />
                <StatCard
                    label="En proceso"
                    value=Signal::derive(move || stats.get().in_progress_count.to_string())
                />
            </div>

            <div class="page__filters">
                <SearchInput on_change=on_search placeholder="Buscar por código o cliente..." />
                <select class="filter-select" on:change=on_status_change>
                    <option value=ALL_STATUSES>{"Todos los estados"}</option>
                    {DocumentStatus::all().into_iter().map(|s| {
                        let code = s.code().to_string();
                        let label = s.label().to_string();
                        view! { <option value=code>{label}</option> }
                    }).collect_view()}
                </select>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">{e.to_string()}</div>
            })}

            <DataTable
                columns=columns()
                rows=rows
                loading=loading
                row_id=|r: &ServiceOrderRow| r.id.clone()
                status_of=|r: &ServiceOrderRow| r.status.clone()
                on_edit=on_edit
                on_delete=on_delete
                on_transition=on_transition
                pending_rows=Signal::from(pending_rows)
                empty_message="No hay órdenes de servicio"
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
                <ServiceOrderDetails
                    editing=editing_id
                    executor=modal_executor.clone()
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| modal_open.set(false))
                />
            </Modal>
        </div>
    }
}
