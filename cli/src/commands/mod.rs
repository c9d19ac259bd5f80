//! CLI commands for the molvoc vocabulary generator.

pub mod inspect;
pub mod train;

pub use inspect::InspectCommand;
pub use train::TrainCommand;
