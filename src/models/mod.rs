pub mod prediction;
pub mod race;
pub mod venue;

pub use prediction::{EntryMarkup, PredictionDraft, PredictionFinal};
pub use race::RaceQuery;
pub use venue::Venue;
