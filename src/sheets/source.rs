use crate::sheets::SheetsError;

/// Raw cell values, row 0 being the header.
pub type Grid = Vec<Vec<String>>;

/// A range-addressed tabular read service.
///
/// `range` is in A1 notation including the tab, e.g. `Listings!A1:K100000`.
/// Implementations are shared across the scoped threads a summary fans
/// out to, hence `Send + Sync`.
pub trait TableSource: Send + Sync {
    fn read_range(&self, range: &str) -> Result<Grid, SheetsError>;
}
