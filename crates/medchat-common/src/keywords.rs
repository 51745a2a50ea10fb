//! Default provider-query routing values, shared by the router and config.

/// Case-insensitive substrings that mark a care-provider query.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "doctor",
    "specialist",
    "hospital",
    "clinic",
    "treatment",
    "cardiologist",
    "dermatologist",
    "neurologist",
    "oncologist",
    "gynecologist",
    "urologist",
    "pediatrician",
    "psychiatrist",
    "surgeon",
    "physician",
    "dentist",
];

/// Search engine endpoint for provider queries.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://www.google.com/search";
