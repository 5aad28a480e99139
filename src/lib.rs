//! `contract-csv-tools` prepares rental-contract CSV exports for import.
//!
//! Two jobs run in sequence, with the filesystem as the only link between them:
//!
//! 1. [`stripper`]: for every `Contratos de Locação - CC - *.csv` / `... - CI - *.csv` file, write
//!    a sibling `*_no_balance.csv` copy without the `Saldo` column.
//! 2. [`injector`]: for every `*_no_balance.csv` file, prepend an `id` column holding a random
//!    21-symbol identifier per data row, overwriting the file.
//!
//! Both are also shipped as zero-argument binaries (`strip-balance`, `add-row-ids`) working on the
//! current directory.
//!
//! ## Running both jobs from code
//!
//! ```no_run
//! use contract_csv_tools::injector::{inject_ids_into_paths, InjectOptions};
//! use contract_csv_tools::stripper::{run_column_stripper, StripOptions};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), contract_csv_tools::ToolError> {
//! let stripped = run_column_stripper(&StripOptions::default())?;
//! println!(
//!     "written={} skipped={} failed={}",
//!     stripped.written_count(),
//!     stripped.skipped_count(),
//!     stripped.failed_count()
//! );
//!
//! // Feed the derived files straight to the injector instead of globbing again.
//! let mut rng = StdRng::seed_from_u64(2024);
//! let injected = inject_ids_into_paths(&stripped.written_paths(), &InjectOptions::default(), &mut rng);
//! assert_eq!(injected.files.len(), stripped.written_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`stripper`], [`injector`]: the two jobs
//! - [`run`]: per-file outcomes, run summaries and observers (console / JSON lines)
//! - [`transform`]: pure table transformations
//! - [`io`]: CSV reading and writing
//! - [`discovery`], [`naming`], [`nanoid`]: file lookup, derived names, identifiers
//! - [`types`], [`error`]: data model and error type

pub mod discovery;
pub mod error;
pub mod injector;
pub mod io;
pub mod naming;
pub mod nanoid;
pub mod run;
pub mod stripper;
pub mod transform;
pub mod types;

pub use error::{ToolError, ToolResult};
