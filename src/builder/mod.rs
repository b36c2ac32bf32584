pub use session::*;

pub mod prompts;

mod session;
