use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::config::GeneratorConfig;
use crate::dictionary::Dictionary;
use crate::errors::GenerateError;
use crate::letters::LetterCounts;
use crate::permutations::expand_permutations;
use crate::subsets::enumerate_subsets;
use crate::validate::normalize_input;

/// Every word in the embedded dictionary that can be spelled from `input`, sorted.
pub fn generate_valid_words(input: &str) -> Result<Vec<String>, GenerateError> {
    WordGenerator::new(Dictionary::embedded()).generate(input)
}

/// Binds a read-only dictionary to generation limits. Cheap to copy and safe to
/// use from many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct WordGenerator<'d> {
    dictionary: &'d Dictionary,
    config: GeneratorConfig,
}

impl<'d> WordGenerator<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        WordGenerator {
            dictionary,
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Validate `input`, then generate and filter. All or nothing: on error no words are returned.
    pub fn generate(&self, input: &str) -> Result<Vec<String>, GenerateError> {
        log::info!("Received input {input:?}");

        let letters = normalize_input(input, self.config.effective_max_input_length()).map_err(|e| {
            log::warn!("Validation error: {e}");
            GenerateError::from(e)
        })?;

        let words = panic::catch_unwind(AssertUnwindSafe(|| self.matching_words(&letters)))
            .map_err(|payload| {
                log::error!("Word generation panicked: {}", panic_message(payload.as_ref()));
                GenerateError::Internal
            })??;

        log::info!("Found {} valid words for {letters:?}", words.len());
        Ok(words)
    }

    fn matching_words(&self, letters: &str) -> Result<Vec<String>, GenerateError> {
        let pool = LetterCounts::from_word(letters).ok_or_else(|| {
            log::error!("Normalized input {letters:?} is not lowercase a-z");
            GenerateError::Internal
        })?;
        log::debug!(
            "Letter multiplicities {:?}, expecting {} subsets",
            pool.multiplicities().collect::<Vec<_>>(),
            pool.distinct_subset_count()
        );

        let subsets = enumerate_subsets(letters);
        if subsets.len() as u64 != pool.distinct_subset_count() {
            log::error!(
                "Enumerated {} subsets of {letters:?}, expected {}",
                subsets.len(),
                pool.distinct_subset_count()
            );
            return Err(GenerateError::Internal);
        }

        let candidates = expand_permutations(&subsets);
        let words = self.dictionary.filter_sorted(candidates);
        verify_words(&pool, &words)?;
        Ok(words)
    }
}

/// Every match must be spellable from the input letters; anything else is a generation defect.
fn verify_words(pool: &LetterCounts, words: &[String]) -> Result<(), GenerateError> {
    for word in words {
        let fits = LetterCounts::from_word(word).is_some_and(|counts| counts.fits_within(pool));
        if !fits {
            log::error!("Generated {word:?} which cannot be spelled from the input letters");
            return Err(GenerateError::Internal);
        }
    }
    Ok(())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

/// Success payload of the request/response boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordsResponse {
    pub words: Vec<String>,
}

/// Failure payload of the request/response boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    pub status: u16,
}

impl From<&GenerateError> for ErrorResponse {
    fn from(e: &GenerateError) -> Self {
        ErrorResponse {
            error: e.to_string(),
            code: e.code(),
            status: e.status_code(),
        }
    }
}

/// Map a generation result onto the boundary payloads.
pub fn respond(result: Result<Vec<String>, GenerateError>) -> Result<WordsResponse, ErrorResponse> {
    result
        .map(|words| WordsResponse { words })
        .map_err(|e| ErrorResponse::from(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_INPUT_LENGTH;
    use crate::errors::ValidationError;

    fn small_dictionary() -> Dictionary {
        Dictionary::from_words(["a", "aa", "act", "at", "cat", "tact", "ta", "dog"])
    }

    #[test]
    fn cat_with_custom_dictionary() {
        let dict = small_dictionary();
        let generator = WordGenerator::new(&dict);
        assert_eq!(generator.generate("cat").unwrap(), vec!["a", "act", "at", "cat", "ta"]);
    }

    #[test]
    fn multiplicity_is_respected() {
        let dict = small_dictionary();
        let generator = WordGenerator::new(&dict);
        // only one 'a' and one 't'
        let words = generator.generate("tac").unwrap();
        assert!(!words.contains(&"aa".to_string()));
        assert!(!words.contains(&"tact".to_string()));
        assert_eq!(generator.generate("aa").unwrap(), vec!["a", "aa"]);
    }

    #[test]
    fn lowered_limit_rejects_earlier() {
        let dict = small_dictionary();
        let generator = WordGenerator::new(&dict)
            .with_config(GeneratorConfig::default().with_max_input_length(3));
        assert!(generator.generate("cat").is_ok());
        assert_eq!(
            generator.generate("cats"),
            Err(GenerateError::Validation(ValidationError::TooLong { length: 4, max: 3 }))
        );
    }

    #[test]
    fn oversized_config_still_capped() {
        let dict = small_dictionary();
        let generator = WordGenerator::new(&dict).with_config(GeneratorConfig { max_input_length: 20 });
        assert_eq!(
            generator.generate("abcdefghijk"),
            Err(GenerateError::Validation(ValidationError::TooLong {
                length: 11,
                max: MAX_INPUT_LENGTH
            }))
        );
    }

    #[test]
    fn verify_catches_impossible_words() {
        let pool = LetterCounts::from_word("cat").unwrap();
        assert!(verify_words(&pool, &["act".to_string(), "at".to_string()]).is_ok());
        assert_eq!(
            verify_words(&pool, &["tat".to_string()]),
            Err(GenerateError::Internal)
        );
        assert_eq!(
            verify_words(&pool, &["Cat".to_string()]),
            Err(GenerateError::Internal)
        );
    }

    #[test]
    fn panic_payloads_are_described() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(boxed.as_ref()), "boom");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(boxed.as_ref()), "bang");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(boxed.as_ref()), "unknown panic");
    }

    #[test]
    fn respond_maps_status_categories() {
        let ok = respond(Ok(vec!["at".to_string()]));
        assert_eq!(ok, Ok(WordsResponse { words: vec!["at".to_string()] }));

        let bad = respond(Err(ValidationError::InvalidCharacters.into())).unwrap_err();
        assert_eq!(bad.status, 400);
        assert_eq!(bad.error, "Input is invalid. Only alphabets are allowed.");

        let internal = respond(Err(GenerateError::Internal)).unwrap_err();
        assert_eq!(internal.status, 500);
        assert_eq!(internal.error, "Internal server error while generating words");
    }
}
