use crate::shared::columns::Column;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::list_controller::{load_stats, ListController};
use crate::shared::mutation::MutationExecutor;
use crate::shared::notifications::ToastService;
use crate::shared::query::QueryClient;
use crate::shared::service::ResourceService;
use contracts::domain::a007_lab_order::aggregate::{LabOrder, LabOrderStats};
use contracts::domain::common::{
    AggregateId, DocumentStatus, StatusPatch, ALL_STATUSES,
};
use leptos::prelude::*;

const SERVICE: ResourceService = ResourceService::new("lab-order");

#[derive(Clone, PartialEq)]
struct LabOrderRow {
    id: String,
    code: String,
    patient_name: String,
    laboratory: String,
    cost: f64,
    expected_date: String,
    status: DocumentStatus,
}

impl From<LabOrder> for LabOrderRow {
    fn from(order: LabOrder) -> Self {
        Self {
            id: order.base.id.as_string(),
            code: order.base.code,
            patient_name: order.patient_name,
            laboratory: order.laboratory,
            cost: order.cost,
            expected_date: order.expected_date,
            status: order.status,
        }
    }
}

fn columns() -> Vec<Column<LabOrderRow>> {
    vec![
        Column::text("code", "Código", |r: &LabOrderRow| r.code.clone()),
        Column::text("patient", "Paciente", |r: &LabOrderRow| {
            r.patient_name.clone()
        }),
        Column::text("laboratory", "Laboratorio", |r: &LabOrderRow| {
            r.laboratory.clone()
        }),
        Column::money("cost", "Costo", |r: &LabOrderRow| r.cost),
        Column::date("expected_date", "Fecha esperada", |r: &LabOrderRow| {
            r.expected_date.clone()
        }),
        Column::status("status", "Estado", |r: &LabOrderRow| r.status.clone()),
        Column::actions("actions", "Acciones"),
    ]
}

#[component]
pub fn LabOrderListPage() -> impl IntoView {
    let client = use_context::<QueryClient>().expect("QueryClient not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let controller = ListController::new(SERVICE, client.clone());
    let executor = MutationExecutor::new(client.clone(), toasts, "lab-order");
    let stats = RwSignal::new(LabOrderStats::default());

    controller.load();
    load_stats(client.clone(), SERVICE, stats);

    let rows = {
        let controller = controller.clone();
        Signal::derive(move || {
            controller
                .typed_rows::<LabOrder>()
                .into_iter()
                .map(LabOrderRow::from)
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

    let on_delete = {
        let executor = executor.clone();
        let reload = reload.clone();
        Callback::new(move |id: String| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("¿Eliminar esta orden de laboratorio?")
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

    let state = controller.state;
    let loading = controller.loading;
    let total = controller.total;
    let last_page = controller.last_page;
    let error = controller.error;
    let pending_rows = executor.pending_rows;

    {
        let controller = controller.clone();
        on_cleanup(move || controller.cancel());
    }

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">{"Órdenes de laboratorio"}</h2>
                <div class="page__header-actions">
                    <button class="button button--secondary" on:click=on_refresh title="Recargar">
                        {"Actualizar"}
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
                    label="En laboratorio"
                    value=Signal::derive(move || stats.get().in_lab_count.to_string())
                />
            </div>

            <div class="page__filters">
                <SearchInput on_change=on_search placeholder="Buscar por código o paciente..." />
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
                row_id=|r: &LabOrderRow| r.id.clone()
                status_of=|r: &LabOrderRow| r.status.clone()
                on_delete=on_delete
                on_transition=on_transition
                pending_rows=Signal::from(pending_rows)
                empty_message="No hay órdenes de laboratorio"
            />

            <PaginationControls
                current_page=Signal::derive(move || state.get().page)
                last_page=last_page
                total_count=total
                per_page=Signal::derive(move || state.get().per_page)
                on_page_change=on_page_change
                on_per_page_change=on_per_page_change
            />
        </div>
    }
}
