/// Hard upper bound on input length. Permutation work grows factorially, so
/// no configuration may raise the limit past this value.
pub const MAX_INPUT_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Longest accepted input, in letters. Never above [`MAX_INPUT_LENGTH`].
    pub max_input_length: usize,
}

impl GeneratorConfig {
    /// Lower the input limit. Values above [`MAX_INPUT_LENGTH`] are clamped to it.
    pub fn with_max_input_length(mut self, max_input_length: usize) -> Self {
        if max_input_length > MAX_INPUT_LENGTH {
            log::warn!(
                "Requested max input length {max_input_length} exceeds hard cap, using {MAX_INPUT_LENGTH}"
            );
        }
        self.max_input_length = max_input_length.min(MAX_INPUT_LENGTH);
        self
    }

    /// The limit actually enforced, even if the field was set directly.
    pub fn effective_max_input_length(&self) -> usize {
        self.max_input_length.min(MAX_INPUT_LENGTH)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_input_length: MAX_INPUT_LENGTH,
        }
    }
}
