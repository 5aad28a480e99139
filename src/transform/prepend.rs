//! New leading column.

use rand::Rng;

use crate::nanoid::generate_id;
use crate::types::Table;

/// Returns a new [`Table`] with `label` as the first header field and `value()` as the first field
/// of every data row.
///
/// `value` is called once per data row, in row order. An empty table stays empty.
pub fn prepend_column<F>(table: &Table, label: &str, mut value: F) -> Table
where
    F: FnMut() -> String,
{
    let Some(header) = table.header() else {
        return Table::default();
    };

    let mut new_header = Vec::with_capacity(header.len() + 1);
    new_header.push(label.to_owned());
    new_header.extend_from_slice(header);

    let data = table
        .data_rows()
        .iter()
        .map(|row| {
            let mut out = Vec::with_capacity(row.len() + 1);
            out.push(value());
            out.extend_from_slice(row);
            out
        })
        .collect();

    Table::with_header(new_header, data)
}

/// Prepend a column of freshly generated identifiers (one per data row) titled `label`.
pub fn prepend_id_column<R: Rng + ?Sized>(table: &Table, label: &str, id_size: usize, rng: &mut R) -> Table {
    prepend_column(table, label, || generate_id(&mut *rng, id_size))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{prepend_column, prepend_id_column};
    use crate::nanoid::{is_valid_id, DEFAULT_SIZE};
    use crate::types::Table;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prepends_label_and_values_in_row_order() {
        let input = Table::new(vec![row(&["Nome"]), row(&["Ana"]), row(&["Bia"])]);
        let mut n = 0;
        let out = prepend_column(&input, "seq", || {
            n += 1;
            n.to_string()
        });
        assert_eq!(out.rows, vec![row(&["seq", "Nome"]), row(&["1", "Ana"]), row(&["2", "Bia"])]);
    }

    #[test]
    fn id_column_has_one_valid_id_per_data_row() {
        let input = Table::new(vec![
            row(&["Nome", "Data"]),
            row(&["Ana", "2024-01-01"]),
            row(&["Bia", "2024-01-02"]),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        let out = prepend_id_column(&input, "id", DEFAULT_SIZE, &mut rng);

        assert_eq!(out.column_count(), input.column_count() + 1);
        assert_eq!(out.header().unwrap()[0], "id");
        assert_eq!(out.data_row_count(), input.data_row_count());
        for (before, after) in input.data_rows().iter().zip(out.data_rows()) {
            assert!(is_valid_id(&after[0], DEFAULT_SIZE));
            assert_eq!(&after[1..], before.as_slice());
        }
    }

    #[test]
    fn header_only_table_generates_no_ids() {
        let input = Table::new(vec![row(&["Nome"])]);
        let mut calls = 0;
        let out = prepend_column(&input, "id", || {
            calls += 1;
            String::new()
        });
        assert_eq!(out.rows, vec![row(&["id", "Nome"])]);
        assert_eq!(calls, 0);
    }

    #[test]
    fn empty_table_stays_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(prepend_id_column(&Table::default(), "id", DEFAULT_SIZE, &mut rng).is_empty());
    }
}
