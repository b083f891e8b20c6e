use crate::domain::a001_product::ui::list::ProductListPage;
use crate::domain::a002_expense::ui::list::ExpenseListPage;
use crate::domain::a003_cash_transfer::ui::list::CashTransferListPage;
use crate::domain::a004_payroll::ui::list::PayrollListPage;
use crate::domain::a005_service_order::ui::list::ServiceOrderListPage;
use crate::domain::a006_supplier_payment::ui::list::SupplierPaymentListPage;
use crate::domain::a007_lab_order::ui::list::LabOrderListPage;
use crate::domain::a008_purchase::ui::list::PurchaseListPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>{"Página no encontrada"}</h2>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductListPage />
                    <Route path=path!("/products") view=ProductListPage />
                    <Route path=path!("/expenses") view=ExpenseListPage />
                    <Route path=path!("/cash-transfers") view=CashTransferListPage />
                    <Route path=path!("/payrolls") view=PayrollListPage />
                    <Route path=path!("/service-orders") view=ServiceOrderListPage />
                    <Route path=path!("/supplier-payments") view=SupplierPaymentListPage />
                    <Route path=path!("/lab-orders") view=LabOrderListPage />
                    <Route path=path!("/purchases") view=PurchaseListPage />
                </Routes>
            </Shell>
        </Router>
    }
}
