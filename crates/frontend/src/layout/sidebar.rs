use leptos::prelude::*;
use leptos_router::components::A;

/// One entry per resource, in the order the back office uses them.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("/products", "Productos"),
    ("/service-orders", "Órdenes de servicio"),
    ("/lab-orders", "Órdenes de laboratorio"),
    ("/expenses", "Gastos"),
    ("/purchases", "Compras"),
    ("/supplier-payments", "Pagos a proveedores"),
    ("/cash-transfers", "Traslados de caja"),
    ("/payrolls", "Nómina"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__title">{"Administración"}</div>
            <ul class="sidebar__nav">
                {NAV_ITEMS.iter().map(|&(href, label)| view! {
                    <li class="sidebar__item">
                        <A href=href attr:class="sidebar__link">{label}</A>
                    </li>
                }).collect_view()}
            </ul>
        </nav>
    }
}
