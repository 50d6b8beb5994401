//! Lightweight fuzzy completion for make and model input.

/// Default cap on the number of suggestions returned for a non-empty query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 8;

/// Rank `options` against `input`.
///
/// An empty (or whitespace) query returns every option so the whole list can
/// be browsed. Otherwise case-insensitive prefix matches come first, then
/// substring matches, each group in catalog order, capped at `limit`.
///
/// # Example
///
/// ```rust
/// use cardle::catalog::suggest;
///
/// let makes = ["Ford", "Toyota", "Alfa Romeo", "Volkswagen"];
/// assert_eq!(suggest("o", &makes, 8), vec!["Ford", "Toyota", "Alfa Romeo", "Volkswagen"]);
/// assert_eq!(suggest("FO", &makes, 8), vec!["Ford"]);
/// ```
pub fn suggest<'a, S: AsRef<str>>(input: &str, options: &'a [S], limit: usize) -> Vec<&'a str> {
    let query = input.trim().to_lowercase();
    if query.is_empty() {
        return options.iter().map(AsRef::as_ref).collect();
    }

    let (starts, rest): (Vec<&str>, Vec<&str>) = options
        .iter()
        .map(AsRef::as_ref)
        .partition(|opt| opt.to_lowercase().starts_with(&query));

    starts
        .into_iter()
        .chain(
            rest.into_iter()
                .filter(|opt| opt.to_lowercase().contains(&query)),
        )
        .take(limit)
        .collect()
}
