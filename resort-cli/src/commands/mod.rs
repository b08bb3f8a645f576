//! Command implementations for the resort CLI.
//!
//! Each subcommand lives in its own module with an `execute` method taking
//! the global options.

pub mod completions;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod invoice;
pub mod list;
pub mod login;
pub mod report;
pub mod show;
pub mod status;

pub use completions::CompletionsCommand;
pub use create::CreateCommand;
pub use dashboard::DashboardCommand;
pub use delete::DeleteCommand;
pub use invoice::InvoiceCommand;
pub use list::ListCommand;
pub use login::LoginCommand;
pub use report::ReportCommand;
pub use show::ShowCommand;
pub use status::{CancelCommand, CheckOutCommand};
