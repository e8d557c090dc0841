pub mod delete_confirm;
pub mod supplier_form;
pub mod unit_detail;
