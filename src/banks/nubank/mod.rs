mod dto;
mod normalizer;
mod types;

pub use dto::NubankRecord;
pub use normalizer::NubankNormalizer;
pub use types::NubankDate;

pub mod prelude {
    pub use super::{NubankDate, NubankNormalizer, NubankRecord};
}
