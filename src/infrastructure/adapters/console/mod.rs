//! Console Adapter

mod reporter;

pub use reporter::ConsoleReporter;
