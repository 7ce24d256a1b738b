use pipetable_config::TablesConfig;

/// Immutable table parsing options, built once per document parse.
///
/// Derived from the document configuration store before parsing begins and
/// never mutated afterwards; every table parser instance of the parse shares
/// the same snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Collapse adjacent empty cells (`||`) into a column-spanning cell.
    pub column_spans: bool,
    /// Drop row cells beyond the separator's declared column count.
    pub discard_extra_columns: bool,
    /// Pad short body rows with empty cells up to the declared column count.
    pub append_missing_columns: bool,
    /// Fewest paragraph lines that may precede the separator line.
    pub min_header_rows: usize,
    /// Most paragraph lines that may precede the separator line.
    pub max_header_rows: usize,
    /// Reject tables whose header rows declare more columns than the separator.
    pub header_separator_columns: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions::from(&TablesConfig::default())
    }
}

impl From<&TablesConfig> for TableOptions {
    fn from(config: &TablesConfig) -> Self {
        TableOptions {
            column_spans: config.column_spans,
            discard_extra_columns: config.discard_extra_columns,
            append_missing_columns: config.append_missing_columns,
            min_header_rows: config.min_header_rows,
            max_header_rows: config.max_header_rows,
            header_separator_columns: config.header_separator_columns,
        }
    }
}
