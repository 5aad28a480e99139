//! Adds an `id` column of random identifiers to every `_no_balance` CSV under the current
//! directory, overwriting the files in place.

use std::sync::Arc;

use contract_csv_tools::injector::{run_id_injector, InjectOptions};
use contract_csv_tools::run::ConsoleObserver;
use contract_csv_tools::ToolResult;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> ToolResult<()> {
    let opts = InjectOptions {
        observer: Some(Arc::new(ConsoleObserver)),
        ..Default::default()
    };
    let mut rng = StdRng::from_os_rng();
    run_id_injector(&opts, &mut rng)?;
    Ok(())
}
