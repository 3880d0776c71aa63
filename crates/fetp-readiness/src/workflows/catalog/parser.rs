use super::normalizer::{non_empty, normalize_header, parse_year};
use super::schema::{missing_columns, MODALITIES_FILE};
use super::CatalogImportError;
use crate::workflows::credentialing::domain::{
    CountryRecord, Modality, ModalityId, Program, YesNoFlag,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Reads one table, normalizing headers and rejecting files that lack a required column.
pub(crate) fn read_table<R, T>(
    reader: R,
    file: &str,
    required: &[&str],
) -> Result<Vec<T>, CatalogImportError>
where
    R: Read,
    T: DeserializeOwned,
{
    let csv_error = |source| CatalogImportError::Csv {
        file: file.to_string(),
        source,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: csv::StringRecord = csv_reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();

    let missing = missing_columns(required, &headers);
    if !missing.is_empty() {
        return Err(CatalogImportError::MissingColumns {
            file: file.to_string(),
            columns: missing,
        });
    }

    csv_reader.set_headers(headers);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<T>() {
        rows.push(record.map_err(csv_error)?);
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramRow {
    program_name: String,
    country: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    modality: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    accredited: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    host_institution: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    established: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    network: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tephinet_member: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    who_region: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    discipline: Option<String>,
}

impl ProgramRow {
    /// `None` when the row has no country to attach the program to.
    pub(crate) fn into_program(self) -> Option<Program> {
        let country = self.country.trim().to_string();
        if country.is_empty() {
            tracing::warn!(program = %self.program_name, "skipping program row without a country");
            return None;
        }

        let established = self.established.as_deref().and_then(|raw| {
            let parsed = parse_year(raw);
            if parsed.is_none() {
                tracing::warn!(
                    program = %self.program_name,
                    value = raw,
                    "ignoring unparseable establishment year"
                );
            }
            parsed
        });

        Some(Program {
            program_name: self.program_name.trim().to_string(),
            country,
            modality: self.modality.map(ModalityId),
            accredited: YesNoFlag::from_optional(self.accredited.as_deref()),
            host_institution: self.host_institution,
            established,
            network: self.network,
            tephinet_member: YesNoFlag::from_optional(self.tephinet_member.as_deref()),
            who_region: self.who_region,
            discipline: self.discipline,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ModalityRow {
    modality_id: String,
    name: String,
    duration_months: f64,
    field_based_percent: f64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
}

impl ModalityRow {
    /// Rejects durations that are negative or not finite and field shares outside 0-100.
    pub(crate) fn into_modality(self) -> Result<Modality, CatalogImportError> {
        let duration_months = checked_number(
            "duration_months",
            self.duration_months,
            0.0,
            f64::MAX,
        )?;
        let field_based_percent = checked_number(
            "field_based_percent",
            self.field_based_percent,
            0.0,
            100.0,
        )?;

        Ok(Modality {
            modality_id: ModalityId(self.modality_id),
            name: self.name,
            duration_months,
            field_based_percent,
            description: self.description,
        })
    }
}

fn checked_number(
    column: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, CatalogImportError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(CatalogImportError::InvalidValue {
            file: MODALITIES_FILE.to_string(),
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CountryRow {
    country: String,
    who_region: String,
}

impl From<CountryRow> for CountryRecord {
    fn from(row: CountryRow) -> Self {
        CountryRecord {
            country: row.country,
            who_region: row.who_region,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(non_empty(opt))
}
