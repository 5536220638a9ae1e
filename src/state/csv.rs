use crate::state::data_model::{Header, Row};

pub const FIELD_SEPARATOR: char = ';';
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Serializes `rows` under `headers` as `;`-separated, double-quoted CSV.
/// Every record, the last included, ends with `\n`.
///
/// Header titles have every `"` doubled. Data cells only have their first
/// `"` doubled, matching the exports earlier versions of the table produced.
pub fn rows_to_csv<'a>(headers: &[&Header], rows: impl IntoIterator<Item = &'a Row>) -> String {
    let mut out = String::new();

    let titles: Vec<String> = headers
        .iter()
        .map(|h| quote(&h.title.replace('"', "\"\"")))
        .collect();
    push_record(&mut out, &titles);

    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| quote(&row.display(&h.key).replacen('"', "\"\"", 1)))
            .collect();
        push_record(&mut out, &cells);
    }

    out
}

/// Prefixes the byte-order mark spreadsheet applications need to detect
/// UTF-8 text.
pub fn with_byte_order_mark(csv: &str) -> String {
    let mut out = String::with_capacity(csv.len() + BYTE_ORDER_MARK.len_utf8());
    out.push(BYTE_ORDER_MARK);
    out.push_str(csv);
    out
}

fn quote(field: &str) -> String {
    format!("\"{field}\"")
}

fn push_record(out: &mut String, fields: &[String]) {
    let separator = FIELD_SEPARATOR.to_string();
    out.push_str(&fields.join(&separator));
    out.push('\n');
}
