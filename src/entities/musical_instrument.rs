use serde::{Deserialize, Serialize};

use super::validation::{EntityError, is_valid_name};

/// A musical instrument, identified purely by its name.
///
/// Immutable value type; the full ordering lets instrument sets live in
/// `BTreeSet`s so credits hash and compare deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MusicalInstrument {
    name: String,
}

impl MusicalInstrument {
    pub fn new(name: impl Into<String>) -> Result<Self, EntityError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(EntityError::InvalidInstrumentName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_name() {
        let piano = MusicalInstrument::new("Piano").unwrap();
        let piano_again = MusicalInstrument::new("Piano").unwrap();
        let violin = MusicalInstrument::new("Violin").unwrap();

        assert_eq!(piano, piano_again);
        assert_ne!(piano, violin);
    }

    #[test]
    fn rejects_blank_or_malformed_names() {
        for name in ["", "  ", "Piano!", "88keys"] {
            assert_eq!(
                MusicalInstrument::new(name).unwrap_err(),
                EntityError::InvalidInstrumentName
            );
        }
    }
}
