//! Command implementations.
//!
//! One module per command, each exposing a struct implementing the
//! [`Command`](crate::cli::registry::Command) trait.

pub mod checkout;
pub mod help;
pub mod list;

pub use checkout::CheckoutCommand;
pub use help::HelpCommand;
pub use list::ListCommand;
