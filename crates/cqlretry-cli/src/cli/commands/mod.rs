//! CLI command handlers.

mod decide;
mod simulate;

pub use decide::run_decide;
pub use simulate::run_simulate;
