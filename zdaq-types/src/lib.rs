pub mod attrs;
pub mod control;
pub mod error;
pub mod sample;

pub use attrs::*;
pub use control::*;
pub use error::*;
pub use sample::*;
