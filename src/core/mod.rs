pub mod age;
pub mod engine;

pub use crate::domain::model::CalendarDate;
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
