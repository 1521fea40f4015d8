pub mod extract;
pub mod inspect;

pub use extract::*;
pub use inspect::*;
