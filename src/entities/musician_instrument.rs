use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::musical_instrument::MusicalInstrument;
use super::musician::Musician;
use super::validation::EntityError;

/// The set of instruments a musician plays in one context, typically an album
/// credit (e.g. Keith Jarrett playing piano on ECM 1064/65).
///
/// Identity is the (musician, instrument set) pair. A musician may appear in
/// several credits with overlapping sets; aggregations union and deduplicate
/// the instruments per musician rather than summing credit sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MusicianInstrument {
    musician: Musician,
    instruments: BTreeSet<MusicalInstrument>,
}

impl MusicianInstrument {
    pub fn new(
        musician: Musician,
        instruments: BTreeSet<MusicalInstrument>,
    ) -> Result<Self, EntityError> {
        if instruments.is_empty() {
            return Err(EntityError::EmptyInstrumentSet);
        }
        Ok(Self {
            musician,
            instruments,
        })
    }

    pub fn musician(&self) -> &Musician {
        &self.musician
    }

    pub fn set_musician(&mut self, musician: Musician) {
        self.musician = musician;
    }

    pub fn instruments(&self) -> &BTreeSet<MusicalInstrument> {
        &self.instruments
    }

    pub fn set_instruments(
        &mut self,
        instruments: BTreeSet<MusicalInstrument>,
    ) -> Result<(), EntityError> {
        if instruments.is_empty() {
            return Err(EntityError::EmptyInstrumentSet);
        }
        self.instruments = instruments;
        Ok(())
    }
}
