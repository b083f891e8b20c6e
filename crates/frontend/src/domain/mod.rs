pub mod a001_product;
pub mod a002_expense;
pub mod a003_cash_transfer;
pub mod a004_payroll;
pub mod a005_service_order;
pub mod a006_supplier_payment;
pub mod a007_lab_order;
pub mod a008_purchase;
