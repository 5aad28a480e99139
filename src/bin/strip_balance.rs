//! Writes a `_no_balance` copy of every rental-contract export under the current directory,
//! without the `Saldo` column.

use std::sync::Arc;

use contract_csv_tools::run::ConsoleObserver;
use contract_csv_tools::stripper::{run_column_stripper, StripOptions};
use contract_csv_tools::ToolResult;

fn main() -> ToolResult<()> {
    let opts = StripOptions {
        observer: Some(Arc::new(ConsoleObserver)),
        ..Default::default()
    };
    run_column_stripper(&opts)?;
    Ok(())
}
