use crate::shared::columns::{body_mode, column_ids_unique, BodyMode, Column, ColumnKind};
use crate::shared::components::badge::StatusBadge;
use contracts::domain::common::DocumentStatus;
use leptos::prelude::*;
use std::collections::HashSet;

/// Schema-driven table renderer.
///
/// - While `loading` is true the previous rows stay visible (plus a hint),
///   never an empty flash.
/// - An empty dataset renders an explicit empty-state row.
/// - The `Actions` column gets edit/delete/transition buttons scoped to the
///   row id; they are disabled while that row has a mutation in flight.
#[component]
pub fn DataTable<R>(
    /// Column schema; ids must be unique within the table
    columns: Vec<Column<R>>,
    #[prop(into)] rows: Signal<Vec<R>>,
    #[prop(into)] loading: Signal<bool>,
    /// Typed id accessor; every action callback receives this id
    row_id: fn(&R) -> String,
    /// Status accessor for resources with a lifecycle; drives which
    /// transition buttons each row offers
    #[prop(optional)]
    status_of: Option<fn(&R) -> DocumentStatus>,
    #[prop(optional, into)] on_edit: Option<Callback<String>>,
    #[prop(optional, into)] on_delete: Option<Callback<String>>,
    #[prop(optional, into)] on_transition: Option<Callback<(String, DocumentStatus)>>,
    /// Rows whose action controls are currently disabled
    #[prop(optional, into)]
    pending_rows: Option<Signal<HashSet<String>>>,
    #[prop(optional, into)] empty_message: Option<&'static str>,
) -> impl IntoView
where
    R: Clone + Send + Sync + 'static,
{
    debug_assert!(column_ids_unique(&columns), "duplicate column id");

    let empty_message = empty_message.unwrap_or("No hay registros para mostrar");
    let col_count = columns.len();
    let columns = StoredValue::new(columns);

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {columns.with_value(|cols| cols.iter().map(|col| view! {
                            <th class="table__header-cell">{col.header}</th>
                        }).collect_view())}
                    </tr>
                </thead>
                <tbody>
                    {move || match body_mode(rows.get().len(), loading.get()) {
                        BodyMode::Skeleton => view! {
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan=col_count.to_string()>
                                    {"Cargando..."}
                                </td>
                            </tr>
                        }.into_any(),
                        BodyMode::Empty => view! {
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan=col_count.to_string()>
                                    {empty_message}
                                </td>
                            </tr>
                        }.into_any(),
                        BodyMode::Rows => rows.get().into_iter().map(|row| {
                            let id = row_id(&row);
                            let cells = columns.with_value(|cols| cols.iter().map(|col| {
                                render_cell(
                                    col,
                                    &row,
                                    &id,
                                    status_of,
                                    on_edit,
                                    on_delete,
                                    on_transition,
                                    pending_rows,
                                )
                            }).collect_view());
                            view! {
                                <tr class="table__row">
                                    {cells}
                                </tr>
                            }
                        }).collect_view().into_any(),
                    }}
                </tbody>
            </table>
            {move || (loading.get() && !rows.get().is_empty()).then(|| view! {
                <div class="table__loading-hint">{"Actualizando..."}</div>
            })}
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_cell<R: Clone + Send + Sync + 'static>(
    col: &Column<R>,
    row: &R,
    id: &str,
    status_of: Option<fn(&R) -> DocumentStatus>,
    on_edit: Option<Callback<String>>,
    on_delete: Option<Callback<String>>,
    on_transition: Option<Callback<(String, DocumentStatus)>>,
    pending_rows: Option<Signal<HashSet<String>>>,
) -> AnyView {
    match &col.kind {
        ColumnKind::Status(accessor) => {
            let status = accessor(row);
            view! {
                <td class="table__cell">
                    <StatusBadge status=Signal::derive(move || status.clone()) />
                </td>
            }
            .into_any()
        }
        ColumnKind::Actions => {
            render_actions_cell(id, status_of.map(|f| f(row)), on_edit, on_delete, on_transition, pending_rows)
        }
        _ => {
            let text = col.display(row).unwrap_or_default();
            view! {
                <td class=col.cell_class()>{text}</td>
            }
            .into_any()
        }
    }
}

fn render_actions_cell(
    id: &str,
    status: Option<DocumentStatus>,
    on_edit: Option<Callback<String>>,
    on_delete: Option<Callback<String>>,
    on_transition: Option<Callback<(String, DocumentStatus)>>,
    pending_rows: Option<Signal<HashSet<String>>>,
) -> AnyView {
    let id = id.to_string();
    let row_disabled = {
        let id = id.clone();
        move || {
            pending_rows
                .map(|pending| pending.with(|rows| rows.contains(&id)))
                .unwrap_or(false)
        }
    };
    let transitions = status
        .as_ref()
        .map(|s| s.available_transitions())
        .unwrap_or_default();

    view! {
        <td class="table__cell table__cell--actions">
            {transitions.into_iter().map(|target| {
                let label = target.action_label().to_string();
                let id = id.clone();
                let disabled = row_disabled.clone();
                view! {
                    <button
                        class="button button--small"
                        disabled=move || disabled()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            if let Some(cb) = on_transition {
                                cb.run((id.clone(), target.clone()));
                            }
                        }
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
            {on_edit.map(|cb| {
                let id = id.clone();
                let disabled = row_disabled.clone();
                view! {
                    <button
                        class="button button--small button--secondary"
                        disabled=move || disabled()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cb.run(id.clone());
                        }
                    >
                        {"Editar"}
                    </button>
                }
            })}
            {on_delete.map(|cb| {
                let id = id.clone();
                let disabled = row_disabled.clone();
                view! {
                    <button
                        class="button button--small button--danger"
                        disabled=move || disabled()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cb.run(id.clone());
                        }
                    >
                        {"Eliminar"}
                    </button>
                }
            })}
        </td>
    }
    .into_any()
}
