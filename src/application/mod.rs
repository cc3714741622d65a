//! Application layer.
//!
//! `ExpenseBankOrderBuilder` turns an approved expense into a persisted bank
//! order by orchestrating the collaborators declared in `domain::ports`.

pub mod builder;
