use serde::{Deserialize, Serialize};

/// Demographics and reported symptoms for a single patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub gender: String,
    pub age: i64,
    pub symptoms: Vec<String>,
}

impl PatientRecord {
    pub fn has_symptoms(&self) -> bool {
        !self.symptoms.is_empty()
    }

    /// Symptoms as a single comma separated line, as shown to the model.
    pub fn symptoms_joined(&self) -> String {
        self.symptoms.join(", ")
    }
}
