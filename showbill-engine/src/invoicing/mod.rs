//! VAT invoice compilation and lifecycle

pub mod compiler;
pub mod lifecycle;
pub mod numbering;

pub use compiler::{compile_invoice_items, compile_totals, generate_invoice};
pub use lifecycle::{
    InvoiceItemChanges, add_item, issue, mark_overdue, mark_paid, remove_item, update_item,
};
pub use numbering::next_invoice_number;
