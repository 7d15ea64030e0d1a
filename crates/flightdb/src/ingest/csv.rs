//! Line splitting for the OpenFlights `.dat` format.

/// Split one data line into fields.
///
/// Commas separate fields; double quotes toggle a quoted region in which
/// commas are literal. The format has no escaped quotes, so none are
/// handled. Quote characters themselves are dropped.
pub(crate) fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
