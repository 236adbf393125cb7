pub mod length;
pub mod speed;

pub use length::Kilometers;
pub use speed::KilometersPerHour;
