pub const PROGRAMS_FILE: &str = "programs.csv";
pub const MODALITIES_FILE: &str = "modalities.csv";
pub const COUNTRIES_FILE: &str = "countries.csv";

pub(crate) const PROGRAM_COLUMNS: &[&str] = &["program_name", "country", "modality", "accredited"];

pub(crate) const MODALITY_COLUMNS: &[&str] = &[
    "modality_id",
    "name",
    "duration_months",
    "field_based_percent",
];

pub(crate) const COUNTRY_COLUMNS: &[&str] = &["country", "who_region"];

/// Required columns absent from `headers`, in declaration order.
pub(crate) fn missing_columns(required: &[&str], headers: &csv::StringRecord) -> Vec<String> {
    required
        .iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect()
}
