// The spreadsheet tabs this service reads, and where each one lives.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Listings,
    MetricsDaily,
    ShowingsDaily,
    AdsDaily,
    Feedback,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Listings,
        Table::MetricsDaily,
        Table::ShowingsDaily,
        Table::AdsDaily,
        Table::Feedback,
    ];

    pub fn tab(self) -> &'static str {
        match self {
            Table::Listings => "Listings",
            Table::MetricsDaily => "Metrics_Daily",
            Table::ShowingsDaily => "Showings_Daily",
            Table::AdsDaily => "Ads_Daily",
            Table::Feedback => "Feedback",
        }
    }

    /// Full data range, header row included.
    pub fn range(self) -> &'static str {
        match self {
            Table::Listings => "Listings!A1:K100000",
            Table::MetricsDaily => "Metrics_Daily!A1:D100000",
            Table::ShowingsDaily => "Showings_Daily!A1:D100000",
            Table::AdsDaily => "Ads_Daily!A1:F100000",
            Table::Feedback => "Feedback!A1:F100000",
        }
    }

    pub fn header_range(self) -> &'static str {
        match self {
            Table::Listings => "Listings!A1:K1",
            Table::MetricsDaily => "Metrics_Daily!A1:D1",
            Table::ShowingsDaily => "Showings_Daily!A1:D1",
            Table::AdsDaily => "Ads_Daily!A1:F1",
            Table::Feedback => "Feedback!A1:F1",
        }
    }

    /// Path segment used by the debug endpoints.
    pub fn slug(self) -> &'static str {
        match self {
            Table::Listings => "listings",
            Table::MetricsDaily => "metrics",
            Table::ShowingsDaily => "showings",
            Table::AdsDaily => "ads",
            Table::Feedback => "feedback",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Table> {
        Table::ALL.into_iter().find(|t| t.slug() == slug)
    }

    /// Column holding the calendar day, for tables that roll up by day.
    pub fn date_field(self) -> Option<&'static str> {
        match self {
            Table::MetricsDaily | Table::ShowingsDaily | Table::AdsDaily => Some("date"),
            Table::Listings | Table::Feedback => None,
        }
    }
}
