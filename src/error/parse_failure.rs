/// Raised when parsing a program recorded at least one error.
///
/// The parser accumulates human-readable messages instead of stopping at
/// the first problem, so one failure can carry several independent errors.
/// A program that produced any of them must not be evaluated.
#[derive(Debug)]
pub struct ParseFailure {
    errors: Vec<String>,
}

impl ParseFailure {
    /// Wraps the parser's accumulated error messages.
    #[must_use]
    pub const fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// The individual error messages, in the order they were recorded.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "parsing failed with {} error(s):", self.errors.len())?;
        for message in &self.errors {
            writeln!(f, "\t{message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseFailure {}
