pub mod persona;
pub mod summary;
pub mod transcript;

pub use persona::*;
pub use summary::*;
pub use transcript::*;
