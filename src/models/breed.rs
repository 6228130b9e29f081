/*---------- Imports ----------*/
use crate::models::error::ClassifyError;
use serde::{Deserialize, Serialize};

/// Label predicted by the model. Only two classes are ever produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DogBreed {
    Beagle,
    GermanShepard,
}

impl DogBreed {
    pub fn label(&self) -> &'static str {
        match self {
            DogBreed::Beagle => "beagle",
            DogBreed::GermanShepard => "german_shepard",
        }
    }

    pub fn class_id(&self) -> i64 {
        match self {
            DogBreed::Beagle => 0,
            DogBreed::GermanShepard => 1,
        }
    }
}

impl TryFrom<i64> for DogBreed {
    type Error = ClassifyError;

    fn try_from(class_id: i64) -> Result<Self, Self::Error> {
        match class_id {
            0 => Ok(DogBreed::Beagle),
            1 => Ok(DogBreed::GermanShepard),
            other => Err(ClassifyError::UnrecognizedClass(other)),
        }
    }
}

impl std::fmt::Display for DogBreed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
