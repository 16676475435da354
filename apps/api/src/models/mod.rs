pub mod payload;
pub mod resume;
pub mod states;
