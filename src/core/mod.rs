pub mod scaffold;
pub mod templates;

pub use crate::domain::model::{ScaffoldEvent, ScaffoldReport, Template};
pub use crate::domain::ports::Filesystem;
pub use crate::utils::error::Result;
