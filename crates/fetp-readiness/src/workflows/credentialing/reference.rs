use super::domain::{Modality, ModalityId};
use std::collections::HashMap;

/// Read-only modality lookup shared by every evaluation in a batch.
#[derive(Debug, Clone, Default)]
pub struct ModalityReference {
    modalities: Vec<Modality>,
    index: HashMap<String, usize>,
}

impl ModalityReference {
    /// Builds the lookup. A repeated identifier replaces the earlier row in place.
    pub fn from_modalities<I>(modalities: I) -> Self
    where
        I: IntoIterator<Item = Modality>,
    {
        let mut reference = Self::default();
        for modality in modalities {
            let key = modality.modality_id.lookup_key();
            match reference.index.get(&key) {
                Some(&position) => reference.modalities[position] = modality,
                None => {
                    reference.index.insert(key, reference.modalities.len());
                    reference.modalities.push(modality);
                }
            }
        }
        reference
    }

    pub fn resolve(&self, id: &ModalityId) -> Option<&Modality> {
        self.index
            .get(&id.lookup_key())
            .map(|&position| &self.modalities[position])
    }

    /// Convenience for optional program columns.
    pub fn resolve_optional(&self, id: Option<&ModalityId>) -> Option<&Modality> {
        id.and_then(|id| self.resolve(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Modality> {
        self.modalities.iter()
    }

    pub fn len(&self) -> usize {
        self.modalities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modalities.is_empty()
    }

    pub fn max_duration_months(&self) -> f64 {
        self.modalities
            .iter()
            .map(|modality| modality.duration_months)
            .fold(0.0, f64::max)
    }
}

impl FromIterator<Modality> for ModalityReference {
    fn from_iter<T: IntoIterator<Item = Modality>>(iter: T) -> Self {
        Self::from_modalities(iter)
    }
}
