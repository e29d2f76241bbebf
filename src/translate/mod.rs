pub mod interface;
pub mod languages;
pub mod prompts;
pub mod service;

pub use interface::*;
pub use languages::*;
pub use service::*;
