//! Vehicle code generation

/// Prefix of generated vehicle codes
pub const CODE_PREFIX: &str = "A";

/// Hands out `A1`, `A2`, ... in order
#[derive(Debug, Clone, Default)]
pub struct CodeSequence {
    last: u64,
}

impl CodeSequence {
    /// Start past the highest generated-style code among `existing`.
    ///
    /// Codes that don't follow the `A<number>` pattern are ignored here.
    pub fn after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(parse_sequence)
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Next code in the sequence.
    ///
    /// Past `u64::MAX` the sequence restarts at 1, so callers must skip codes
    /// that are already taken.
    pub fn next_code(&mut self) -> String {
        self.last = self.last.checked_add(1).unwrap_or(1);
        format!("{}{}", CODE_PREFIX, self.last)
    }
}

fn parse_sequence(code: &str) -> Option<u64> {
    let digits = code.strip_prefix(CODE_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let mut seq = CodeSequence::default();
        assert_eq!(seq.next_code(), "A1");
        assert_eq!(seq.next_code(), "A2");
    }

    #[test]
    fn test_restarts_after_highest_possible_code() {
        let max_code = format!("A{}", u64::MAX);
        let mut seq = CodeSequence::after([max_code.as_str()]);
        assert_eq!(seq.next_code(), "A1");
        assert_eq!(seq.next_code(), "A2");
    }

    #[test]
    fn test_after_existing_codes() {
        let mut seq = CodeSequence::after(["A3", "A12", "B99", "A", "A-4", "Axx"]);
        assert_eq!(seq.next_code(), "A13");
    }
}
