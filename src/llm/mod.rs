pub mod stateless_llm_interface;
pub mod gemini_llm;
pub mod openai_compatible_llm;
pub mod stateless_llm_factory;

#[cfg(test)]
pub mod mock_llm;

pub use stateless_llm_interface::*;
pub use stateless_llm_factory::*;
