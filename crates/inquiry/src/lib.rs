mod controller;
mod delivery;
mod draft;
mod error;
mod submitter;
mod types;
mod validation;

pub use controller::*;
pub use delivery::*;
pub use draft::*;
pub use error::*;
pub use submitter::*;
pub use types::*;
pub use validation::*;
