use super::super::domain::{AssessmentYear, Program};
use super::super::reference::ModalityReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Country-level rollup of the program rows the readiness score is computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAggregate {
    pub country: String,
    pub num_programs: usize,
    pub num_accredited: usize,
    pub years_active: u32,
    /// Names of the resolved modalities present; unresolved modalities are left out.
    pub modalities: BTreeSet<String>,
    pub tephinet_member_present: bool,
}

impl CountryAggregate {
    pub fn empty(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            num_programs: 0,
            num_accredited: 0,
            years_active: 0,
            modalities: BTreeSet::new(),
            tephinet_member_present: false,
        }
    }

    /// Rolls up the programs whose `country` equals `country`; other rows are skipped.
    pub fn from_programs<'a, I>(
        country: &str,
        programs: I,
        reference: &ModalityReference,
        year: AssessmentYear,
    ) -> Self
    where
        I: IntoIterator<Item = &'a Program>,
    {
        let mut aggregate = Self::empty(country);
        let mut earliest_established: Option<i32> = None;

        for program in programs
            .into_iter()
            .filter(|program| program.country == country)
        {
            aggregate.num_programs += 1;

            if program.accredited.is_yes() {
                aggregate.num_accredited += 1;
            }

            if program.tephinet_member.is_yes() {
                aggregate.tephinet_member_present = true;
            }

            if let Some(modality) = reference.resolve_optional(program.modality.as_ref()) {
                aggregate.modalities.insert(modality.name.clone());
            }

            if let Some(established) = program.established {
                earliest_established = Some(match earliest_established {
                    Some(current) => current.min(established),
                    None => established,
                });
            }
        }

        aggregate.years_active = earliest_established
            .map(|established| year.years_since(established))
            .unwrap_or(0);

        aggregate
    }

    pub fn is_empty(&self) -> bool {
        self.num_programs == 0
    }

    pub fn modality_count(&self) -> usize {
        self.modalities.len()
    }
}
