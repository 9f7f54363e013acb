mod album;
mod musical_instrument;
mod musician;
mod musician_instrument;
mod validation;

pub use album::Album;
pub use musical_instrument::MusicalInstrument;
pub use musician::Musician;
pub use musician_instrument::MusicianInstrument;
pub use validation::EntityError;
pub(crate) use validation::current_year;
