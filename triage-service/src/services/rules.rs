//! Rule-based department lookup.

use crate::models::Department;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Built-in symptom keywords (Indonesian) and their departments.
const DEFAULT_RULES: &[(&str, Department)] = &[
    ("pusing", Department::Neurology),
    ("sakit kepala", Department::Neurology),
    ("sulit berjalan", Department::Neurology),
    ("kehilangan keseimbangan", Department::Neurology),
    ("mual", Department::Gastroenterology),
    ("sakit perut", Department::Gastroenterology),
    ("batuk", Department::Pulmonology),
    ("sesak napas", Department::Pulmonology),
    ("susah tidur", Department::Psychiatry),
    ("menggigil", Department::InternalMedicine),
    ("memar di tangan", Department::Dermatology),
    ("gusi berdarah", Department::Dentistry),
];

/// Immutable mapping from lowercase symptom keyword to department.
#[derive(Debug, Clone)]
pub struct SymptomTable {
    rules: HashMap<String, Department>,
}

impl Default for SymptomTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(symptom, department)| (symptom.to_string(), *department)),
        )
    }
}

impl SymptomTable {
    /// Build a table from `(symptom, department)` pairs. Keys are lowercased.
    pub fn new(rules: impl IntoIterator<Item = (String, Department)>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|(symptom, department)| (symptom.to_lowercase(), department))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Department for one symptom; unknown symptoms map to General Medicine.
    pub fn lookup(&self, symptom: &str) -> Department {
        self.rules
            .get(&symptom.to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Majority vote over the per-symptom lookups.
    ///
    /// Ties go to the department that first appears earliest in `symptoms`.
    /// An empty list yields General Medicine.
    pub fn classify<S: AsRef<str>>(&self, symptoms: &[S]) -> Department {
        // (department, votes) in order of first appearance
        let mut tally: Vec<(Department, usize)> = Vec::new();
        for symptom in symptoms {
            let department = self.lookup(symptom.as_ref());
            match tally.iter_mut().find(|(d, _)| *d == department) {
                Some((_, votes)) => *votes += 1,
                None => tally.push((department, 1)),
            }
        }

        // min_by_key keeps the first of equal elements
        tally
            .into_iter()
            .min_by_key(|(_, votes)| Reverse(*votes))
            .map(|(department, _)| department)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_symptom_maps_to_its_department() {
        let table = SymptomTable::default();
        assert_eq!(table.len(), DEFAULT_RULES.len());
        for (symptom, department) in DEFAULT_RULES {
            assert_eq!(table.classify(&[*symptom]), *department, "{}", symptom);
        }
    }

    #[test]
    fn unknown_symptom_is_general_medicine() {
        let table = SymptomTable::default();
        assert_eq!(table.classify(&["demam"]), Department::GeneralMedicine);
        assert_eq!(table.lookup("no such thing"), Department::GeneralMedicine);
    }

    #[test]
    fn lookup_ignores_case() {
        let table = SymptomTable::default();
        assert_eq!(table.lookup("BATUK"), Department::Pulmonology);
        assert_eq!(table.lookup("Sakit Kepala"), Department::Neurology);
    }

    #[test]
    fn majority_wins() {
        let table = SymptomTable::default();
        assert_eq!(
            table.classify(&["pusing", "mual", "pusing"]),
            Department::Neurology
        );
    }

    #[test]
    fn unknown_symptoms_vote_for_general_medicine() {
        let table = SymptomTable::default();
        assert_eq!(
            table.classify(&["demam", "flu", "batuk"]),
            Department::GeneralMedicine
        );
    }

    #[test]
    fn ties_go_to_first_occurrence() {
        let table = SymptomTable::default();
        assert_eq!(table.classify(&["batuk", "pusing"]), Department::Pulmonology);
        assert_eq!(table.classify(&["pusing", "batuk"]), Department::Neurology);
        assert_eq!(
            table.classify(&["mual", "batuk", "batuk", "mual"]),
            Department::Gastroenterology
        );
    }

    #[test]
    fn empty_list_is_general_medicine() {
        let table = SymptomTable::default();
        let none: [&str; 0] = [];
        assert_eq!(table.classify(&none), Department::GeneralMedicine);
    }

    #[test]
    fn custom_tables_lowercase_their_keys() {
        let table = SymptomTable::new([("Nyeri Dada".to_string(), Department::Cardiology)]);
        assert_eq!(table.lookup("nyeri dada"), Department::Cardiology);
        assert!(!table.is_empty());
    }
}
