//! Derived file naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix inserted before the extension of a balance-free copy.
pub const NO_BALANCE_SUFFIX: &str = "_no_balance";

/// Build the sibling path for a derived file: `dir/name.csv` becomes `dir/name<suffix>.csv`.
///
/// Only the final extension is replaced; the derived file is always written as `.csv`. A path
/// without an extension gets `<suffix>.csv` appended.
pub fn derived_path(path: impl AsRef<Path>, suffix: &str) -> PathBuf {
    let path = path.as_ref();
    let mut name: OsString = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    name.push(".csv");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::{derived_path, NO_BALANCE_SUFFIX};
    use std::path::{Path, PathBuf};

    #[test]
    fn inserts_suffix_before_extension() {
        assert_eq!(
            derived_path("dados/Contratos de Locação - CC - Jan.csv", NO_BALANCE_SUFFIX),
            PathBuf::from("dados/Contratos de Locação - CC - Jan_no_balance.csv")
        );
    }

    #[test]
    fn only_final_extension_is_replaced() {
        assert_eq!(
            derived_path(Path::new("a/b.v2.csv"), NO_BALANCE_SUFFIX),
            PathBuf::from("a/b.v2_no_balance.csv")
        );
    }

    #[test]
    fn missing_extension_gets_csv() {
        assert_eq!(derived_path("a/b", NO_BALANCE_SUFFIX), PathBuf::from("a/b_no_balance.csv"));
    }
}
