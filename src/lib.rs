pub mod api;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod format;
pub mod letters;
pub mod logging;
pub mod permutations;
pub mod subsets;
pub mod validate;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use api::{generate_valid_words, respond, ErrorResponse, WordGenerator, WordsResponse};
pub use config::{GeneratorConfig, MAX_INPUT_LENGTH};
pub use dictionary::Dictionary;
pub use errors::{DictionaryError, GenerateError, ValidationError};
pub use format::format_words;
