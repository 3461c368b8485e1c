pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod generate;
pub mod report;
pub mod selector;
pub mod session;
pub mod shell;
pub mod snapshot;
pub mod store;
pub mod task;
pub mod util;
