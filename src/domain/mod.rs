pub mod cleaning;
pub mod models;
pub mod openings;
pub mod timecontrol;

pub use cleaning::{CleaningOutcome, RecordCleaner};
pub use models::{GameOutcome, GameRecord, RawGameRow, StrengthCategory, TimeControlCategory};
pub use openings::opening_family;
