pub mod classify;
pub mod context;
pub mod hamza;
pub mod pipeline;
pub mod qazarab;
pub mod script;
pub mod stage;
pub mod transcribe;

pub use classify::{Harmony, WordClassification, classify};
pub use context::Context;
pub use qazarab::{Convert, Qazarab, QazarabError};
pub use script::data::CYR_TO_ARAB;
pub use stage::convert_words::ConvertWords;
pub use stage::map_punctuation::MapPunctuation;
pub use stage::utf8_validate::Utf8Validate;
