use std::collections::BTreeMap;

/// Occurrence count per symbol, ordered by symbol.
pub type FrequencyTable<S> = BTreeMap<S, usize>;

/// Build a frequency table mapping each byte in `input` to its frequency.
pub fn build_frequency_table(input: &[u8]) -> FrequencyTable<u8> {
    count_symbols(input.iter().copied())
}

/// Count the occurrences of every symbol yielded by `symbols`.
pub fn count_symbols<S, I>(symbols: I) -> FrequencyTable<S>
where
    S: Ord,
    I: IntoIterator<Item = S>,
{
    symbols.into_iter().fold(BTreeMap::new(), |mut acc, symbol| {
        *acc.entry(symbol).or_insert(0) += 1;
        acc
    })
}
