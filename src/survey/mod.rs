pub use mailto::*;
pub use question::*;
pub use value::*;

pub mod transcript;

mod mailto;
mod question;
mod value;
