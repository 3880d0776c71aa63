//! Loading of the static program, modality and country tables.

mod normalizer;
mod parser;
mod schema;

use crate::workflows::credentialing::domain::{CountryRecord, Modality, Program};
use crate::workflows::credentialing::reference::ModalityReference;
use parser::{CountryRow, ModalityRow, ProgramRow};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

pub use schema::{COUNTRIES_FILE, MODALITIES_FILE, PROGRAMS_FILE};

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV data in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
    #[error("{file} schema mismatch, missing columns: {}", .columns.join(", "))]
    MissingColumns { file: String, columns: Vec<String> },
    #[error("{file} has an invalid {column} value: {value}")]
    InvalidValue {
        file: String,
        column: String,
        value: String,
    },
}

pub const DEFAULT_COUNTRY: &str = "Nigeria";

/// Immutable batch of input tables shared by every evaluation.
#[derive(Debug, Clone, Default)]
pub struct ProgramCatalog {
    programs: Vec<Program>,
    reference: ModalityReference,
    countries: Vec<CountryRecord>,
}

impl ProgramCatalog {
    pub fn new(
        programs: Vec<Program>,
        modalities: Vec<Modality>,
        countries: Vec<CountryRecord>,
    ) -> Self {
        Self {
            programs,
            reference: ModalityReference::from_modalities(modalities),
            countries,
        }
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn reference(&self) -> &ModalityReference {
        &self.reference
    }

    pub fn country_records(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn programs_for_country<'a>(
        &'a self,
        country: &'a str,
    ) -> impl Iterator<Item = &'a Program> + 'a {
        self.programs
            .iter()
            .filter(move |program| program.country == country)
    }

    /// Region from the program row, falling back to the country table.
    pub fn region_of<'a>(&'a self, program: &'a Program) -> Option<&'a str> {
        program
            .who_region
            .as_deref()
            .or_else(|| self.region_for_country(&program.country))
    }

    pub fn region_for_country(&self, country: &str) -> Option<&str> {
        self.countries
            .iter()
            .find(|record| record.country == country)
            .map(|record| record.who_region.as_str())
            .or_else(|| {
                self.programs
                    .iter()
                    .filter(|program| program.country == country)
                    .find_map(|program| program.who_region.as_deref())
            })
    }

    pub fn programs_in_region<'a>(
        &'a self,
        region: &'a str,
    ) -> impl Iterator<Item = &'a Program> + 'a {
        self.programs.iter().filter(move |program| {
            self.region_of(program)
                .map(|value| value.eq_ignore_ascii_case(region.trim()))
                .unwrap_or(false)
        })
    }

    pub fn programs_in_network<'a>(
        &'a self,
        network: &'a str,
    ) -> impl Iterator<Item = &'a Program> + 'a {
        self.programs
            .iter()
            .filter(move |program| program.network_name() == Some(network.trim()))
    }

    /// Programs whose modality column names `modality` by identifier or display name.
    pub fn programs_for_modality<'a>(
        &'a self,
        modality: &'a Modality,
    ) -> impl Iterator<Item = &'a Program> + 'a {
        self.programs.iter().filter(move |program| {
            program
                .modality
                .as_ref()
                .map(|id| {
                    let id = id.as_str().trim();
                    id.eq_ignore_ascii_case(modality.modality_id.as_str().trim())
                        || id.eq_ignore_ascii_case(modality.name.trim())
                })
                .unwrap_or(false)
        })
    }

    pub fn knows_country(&self, country: &str) -> bool {
        self.countries.iter().any(|record| record.country == country)
            || self.programs.iter().any(|program| program.country == country)
    }

    /// Sorted, de-duplicated country names from both tables.
    pub fn countries(&self) -> Vec<&str> {
        self.countries
            .iter()
            .map(|record| record.country.as_str())
            .chain(self.programs.iter().map(|program| program.country.as_str()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn regions(&self) -> Vec<&str> {
        self.programs
            .iter()
            .filter_map(|program| self.region_of(program))
            .chain(self.countries.iter().map(|record| record.who_region.as_str()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Selection shown before the viewer picks a country.
    pub fn default_country(&self) -> Option<&str> {
        let countries = self.countries();
        countries
            .iter()
            .copied()
            .find(|country| *country == DEFAULT_COUNTRY)
            .or_else(|| countries.first().copied())
    }
}

pub struct CatalogImporter;

impl CatalogImporter {
    /// Loads `programs.csv`, `modalities.csv` and, when present, `countries.csv` from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<ProgramCatalog, CatalogImportError> {
        let dir = dir.as_ref();
        let programs = open(dir, schema::PROGRAMS_FILE)?;
        let modalities = open(dir, schema::MODALITIES_FILE)?;

        let countries_path = dir.join(schema::COUNTRIES_FILE);
        let countries = if countries_path.exists() {
            Some(open(dir, schema::COUNTRIES_FILE)?)
        } else {
            tracing::warn!(
                path = %countries_path.display(),
                "country table not found, regions come from program rows only"
            );
            None
        };

        let catalog = Self::from_readers(programs, modalities, countries)?;
        tracing::info!(
            data_dir = %dir.display(),
            programs = catalog.programs().len(),
            modalities = catalog.reference().len(),
            countries = catalog.country_records().len(),
            "loaded program catalog"
        );
        Ok(catalog)
    }

    pub fn from_readers<P, M, C>(
        programs: P,
        modalities: M,
        countries: Option<C>,
    ) -> Result<ProgramCatalog, CatalogImportError>
    where
        P: Read,
        M: Read,
        C: Read,
    {
        let programs = parser::read_table::<_, ProgramRow>(
            programs,
            schema::PROGRAMS_FILE,
            schema::PROGRAM_COLUMNS,
        )?
        .into_iter()
        .filter_map(ProgramRow::into_program)
        .collect();

        let modalities = parser::read_table::<_, ModalityRow>(
            modalities,
            schema::MODALITIES_FILE,
            schema::MODALITY_COLUMNS,
        )?
        .into_iter()
        .map(ModalityRow::into_modality)
        .collect::<Result<Vec<_>, _>>()?;

        let countries = match countries {
            Some(reader) => parser::read_table::<_, CountryRow>(
                reader,
                schema::COUNTRIES_FILE,
                schema::COUNTRY_COLUMNS,
            )?
            .into_iter()
            .map(CountryRecord::from)
            .collect(),
            None => Vec::new(),
        };

        Ok(ProgramCatalog::new(programs, modalities, countries))
    }
}

fn open(dir: &Path, file: &str) -> Result<std::fs::File, CatalogImportError> {
    std::fs::File::open(dir.join(file)).map_err(|source| CatalogImportError::Io {
        file: file.to_string(),
        source,
    })
}
