//! In-memory table transformations.
//!
//! Transformations take a [`crate::types::Table`] by reference and return a new one; the input is
//! never modified. They are pure apart from the random source handed to [`prepend_id_column`].
//!
//! Currently implemented:
//!
//! - [`strip_column()`]: drop one named column from every row
//! - [`prepend_column()`] / [`prepend_id_column()`]: add a new first column
//!
//! ## Example: strip the balance, then add identifiers
//!
//! ```rust
//! use contract_csv_tools::nanoid::{is_valid_id, DEFAULT_SIZE};
//! use contract_csv_tools::transform::{prepend_id_column, strip_column};
//! use contract_csv_tools::types::Table;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let row = |f: &[&str]| f.iter().map(|s| s.to_string()).collect::<Vec<_>>();
//! let table = Table::new(vec![row(&["Nome", "Saldo", "Data"]), row(&["Ana", "100", "2024-01-01"])]);
//!
//! let stripped = strip_column(&table, "Saldo").unwrap();
//! assert_eq!(stripped.rows[0], row(&["Nome", "Data"]));
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let with_ids = prepend_id_column(&stripped, "id", DEFAULT_SIZE, &mut rng);
//! assert_eq!(with_ids.rows[0], row(&["id", "Nome", "Data"]));
//! assert!(is_valid_id(&with_ids.rows[1][0], DEFAULT_SIZE));
//! ```

pub mod prepend;
pub mod strip;

pub use prepend::{prepend_column, prepend_id_column};
pub use strip::{strip_column, strip_index};
