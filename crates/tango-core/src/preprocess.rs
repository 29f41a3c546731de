use unicode_normalization::UnicodeNormalization;

/// Turns a text field into the form used for comparisons
pub trait Preprocessor {
    // Default JP preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), so full-width digits match half-width
        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], "").trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Compares text exactly as stored
pub struct VerbatimPreprocessor;
impl Preprocessor for VerbatimPreprocessor {
    fn process(&self, text: &str) -> String {
        text.to_string()
    }
}
