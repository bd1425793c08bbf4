pub mod app;
pub mod console;
pub mod error;
pub mod model;
pub mod roster;
pub mod settings;

pub use console::{Console, MenuChoice};
pub use error::{InvalidChoice, ValidationError};
pub use model::{Person, Student};
pub use roster::Roster;
pub use settings::Settings;
