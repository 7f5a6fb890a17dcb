//! Domain-level command types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The embedding front end maps the public DTOs
//! defined in the `shared` crate to these internal types.

pub mod expenses {
    /// Input for recording a new expense. `amount` carries the raw text the
    /// user typed; the expense service parses and validates it.
    #[derive(Debug, Clone)]
    pub struct AddExpenseCommand {
        pub amount: String,
        pub category: String,
        pub date: String,
    }

    /// Command for deleting the expense at a zero-based position.
    #[derive(Debug, Clone)]
    pub struct DeleteExpenseCommand {
        pub index: usize,
    }
}
