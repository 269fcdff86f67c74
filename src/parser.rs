/// Splits pasted text into an address list.
///
/// Commas take precedence: when the input contains one, newlines are left
/// inside the parts. Nothing is trimmed, deduplicated or filtered.
pub fn parse_addresses(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return vec![];
    }

    let delimiter = if raw.contains(',') {
        ','
    } else if raw.contains('\n') {
        '\n'
    } else {
        return vec![raw.to_string()];
    };

    raw.split(delimiter).map(str::to_string).collect()
}
