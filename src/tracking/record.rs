//! Raw rows of the tracking file.

/// One data row of the tracking CSV.
///
/// Fields keep the header's column order. Values are looked up by column
/// name; a column the row did not supply reads as an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number of the row in the source file.
    pub line: usize,
    fields: Vec<(String, String)>,
}

impl Record {
    /// Builds a record by pairing `headers` with `values` positionally.
    ///
    /// Missing trailing values become empty strings and surplus values are
    /// dropped.
    pub fn from_row<'h, 'v, H, V>(line: usize, headers: H, values: V) -> Self
    where
        H: IntoIterator<Item = &'h str>,
        V: IntoIterator<Item = &'v str>,
    {
        let mut values = values.into_iter();
        let fields = headers
            .into_iter()
            .map(|header| {
                let value = values.next().unwrap_or("").trim();
                (header.to_string(), value.to_string())
            })
            .collect();

        Self { line, fields }
    }

    /// Value of `column`, or `None` when the header has no such column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

}
