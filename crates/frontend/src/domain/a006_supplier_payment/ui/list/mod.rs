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
use contracts::domain::a006_supplier_payment::aggregate::{
    SupplierPayment, SupplierPaymentStats,
};
use contracts::domain::common::{
    AggregateId, DocumentStatus, StatusPatch, ALL_STATUSES,
};
use leptos::prelude::*;

const SERVICE: ResourceService = ResourceService::new("supplier-payment");

#[derive(Clone, PartialEq)]
struct SupplierPaymentRow {
    id: String,
    code: String,
    supplier_name: String,
    invoice_number: String,
    amount: f64,
    payment_date: String,
    status: DocumentStatus,
}

impl From<SupplierPayment> for SupplierPaymentRow {
    fn from(payment: SupplierPayment) -> Self {
        Self {
            id: payment.base.id.as_string(),
            code: payment.base.code,
            supplier_name: payment.supplier_name,
            invoice_number: payment.invoice_number,
            amount: payment.amount,
            payment_date: payment.payment_date,
            status: payment.status,
        }
    }
}

fn columns() -> Vec<Column<SupplierPaymentRow>> {
    vec![
        Column::text("code", "Código", |r: &SupplierPaymentRow| r.code.clone()),
        Column::text("supplier", "Proveedor", |r: &SupplierPaymentRow| {
            r.supplier_name.clone()
        }),
        Column::text("invoice", "Factura", |r: &SupplierPaymentRow| {
            r.invoice_number.clone()
        }),
        Column::money("amount", "Monto", |r: &SupplierPaymentRow| r.amount),
        Column::date("payment_date", "Fecha de pago", |r: &SupplierPaymentRow| {
            r.payment_date.clone()
        }),
        Column::status("status", "Estado", |r: &SupplierPaymentRow| {
            r.status.clone()
        }),
        Column::actions("actions", "Acciones"),
    ]
}

#[component]
pub fn SupplierPaymentListPage() -> impl IntoView {
    let client = use_context::<QueryClient>().expect("QueryClient not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");

    let controller = ListController::new(SERVICE, client.clone());
    let executor = MutationExecutor::new(client.clone(), toasts, "supplier-payment");
    let stats = RwSignal::new(SupplierPaymentStats::default());

    controller.load();
    load_stats(client.clone(), SERVICE, stats);

    let rows = {
        let controller = controller.clone();
        Signal::derive(move || {
            controller
                .typed_rows::<SupplierPayment>()
                .into_iter()
                .map(SupplierPaymentRow::from)
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
                    w.confirm_with_message("¿Eliminar este pago?")
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
                <h2 class="page__title">{"Pagos a proveedores"}</h2>
                <div class="page__header-actions">
                    <button class="button button--secondary" on:click=on_refresh title="Recargar">
                        {"Actualizar"}
                    </button>
                </div>
            </div>

            <div class="stats-strip">
                <StatCard
                    label="Pagos"
                    value=Signal::derive(move || stats.get().total_count.to_string())
                />
                <StatCard
                    label="Pendientes"
                    value=Signal::derive(move || stats.get().pending_count.to_string())
                />
                <StatCard
                    label="Monto pendiente"
                    value=Signal::derive(move || format_cop(stats.get().pending_total))
                />
            </div>

            <div class="page__filters">
                <SearchInput on_change=on_search placeholder="Buscar por código, proveedor o factura..." />
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
                row_id=|r: &SupplierPaymentRow| r.id.clone()
                status_of=|r: &SupplierPaymentRow| r.status.clone()
                on_delete=on_delete
                on_transition=on_transition
                pending_rows=Signal::from(pending_rows)
                empty_message="No hay pagos registrados"
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
