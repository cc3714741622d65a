//! Domain model: the records read from the expense side, the bank order being
//! assembled, and the ports through which collaborators are reached.

pub mod bank_order;
pub mod expense;
pub mod money;
pub mod ports;
