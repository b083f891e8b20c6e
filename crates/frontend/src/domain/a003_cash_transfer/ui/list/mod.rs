use crate::shared::columns::Column;
use crate::shared::components::data_table::DataTable;
use crate::shared::components::number_format::format_cop;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::stat_card::StatCard;
use crate::shared::list_controller::{load_stats, ListController};
use crate::shared::mutation::MutationExecutor;
use crate::shared::notifications::ToastService;
use crate::shared::query::QueryClient;
use crate::shared::service::ResourceService;
use contracts::domain::a003_cash_transfer::aggregate::{CashTransfer, CashTransferStats};
use contracts::domain::common::{
    AggregateId, DocumentStatus, StatusPatch, ALL_STATUSES,
};
use leptos::prelude::*;

const SERVICE: ResourceService = ResourceService::new("cash-transfer");

#[derive(Clone, PartialEq)]
struct CashTransferRow {
    id: String,
    code: String,
    from_register: String,
    to_register: String,
    amount: f64,
    transfer_date: String,
    status: DocumentStatus,
}

impl From<CashTransfer> for CashTransferRow {
    fn from(transfer: CashTransfer) -> Self {
        Self {
            id: transfer.base.id.as_string(),
            code: transfer.base.code,
            from_register: transfer.from_register,
            to_register: transfer.to_register,
            amount: transfer.amount,
            transfer_date: transfer.transfer_date,
            status: transfer.status,
        }
    }
}

fn columns() -> Vec<Column<CashTransferRow>> {
    vec![
        Column::text("code", "Código", |r: &CashTransferRow| r.code.clone()),
        Column::text("from", "Origen", |r: &CashTransferRow| {
            r.from_register.clone()
        }),
        Column::text("to", "Destino", |r: &CashTransferRow| {
            r.to_register.clone()
        }),
        Column::money("amount", "Monto", |r: &CashTransferRow| r.amount),
        Column::date("transfer_date", "Fecha", |r: &CashTransferRow| {
            r.transfer_date.clone()
        }),
        Column::status("status", "Estado", |r: &CashTransferRow| r.status.clone()),
        Column::actions("actions", "Acciones"),
    ]
}

/// Transfers between registers are recorded at the point of sale; here they
/// are only reviewed, approved or annulled.
#[component]
pub fn CashTransferListPage() -> impl IntoView {
    let client = use_context::<QueryClient>().expect("QueryClient not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let controller = ListController::new(SERVICE, client.clone());
    let executor = MutationExecutor::new(client.clone(), toasts, "cash-transfer");
    let stats = RwSignal::new(CashTransferStats::default());

    controller.load();
    load_stats(client.clone(), SERVICE, stats);

    let rows = {
        let controller = controller.clone();
        Signal::derive(move || {
            controller
                .typed_rows::<CashTransfer>()
                .into_iter()
                .map(CashTransferRow::from)
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
                    w.confirm_with_message("¿Eliminar este traslado?")
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
                <h2 class="page__title">{"Traslados de caja"}</h2>
                <div class="page__header-actions">
                    <button class="button button--secondary" on:click=on_refresh title="Recargar">
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="stats-strip">
                <StatCard
                    label="Traslados"
                    value=Signal::derive(move || stats.get().total_count.to_string())
                />
                <StatCard
                    label="Pendientes"
                    value=Signal::derive(move || stats.get().pending_count.to_string())
                />
                <StatCard
                    label="Total del mes"
                    value=Signal::derive(move || format_cop(stats.get().month_total))
                />
            </div>

            <div class="page__filters">
                <SearchInput on_change=on_search placeholder="Buscar por código o caja..." />
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
                row_id=|r: &CashTransferRow| r.id.clone()
                status_of=|r: &CashTransferRow| r.status.clone()
                on_delete=on_delete
                on_transition=on_transition
                pending_rows=Signal::from(pending_rows)
                empty_message="No hay traslados registrados"
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
