//! Selected Tokens
//!
//! The comma-joined list of checked values posted in the hidden field.

use std::fmt;
use std::str::FromStr;

/// Tokens of the checked items, in DOM order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedTokens(Vec<String>);

impl SelectedTokens {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SelectedTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(","))
    }
}

/// Parses a field value: split on `,`, dropping empty segments.
/// An empty string yields no tokens.
impl FromStr for SelectedTokens {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.split(',')
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }
}

impl FromIterator<String> for SelectedTokens {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_commas() {
        let tokens = SelectedTokens::new(vec!["a".into(), "c".into()]);
        assert_eq!(tokens.to_string(), "a,c");
        assert_eq!(SelectedTokens::default().to_string(), "");
    }

    #[test]
    fn test_parse_field_value() {
        let tokens: SelectedTokens = "welcome,beta-2024".parse().unwrap();
        assert_eq!(tokens.as_slice(), &["welcome".to_string(), "beta-2024".to_string()]);

        let empty: SelectedTokens = "".parse().unwrap();
        assert!(empty.is_empty());

        let sparse: SelectedTokens = "a,,b,".parse().unwrap();
        assert_eq!(sparse.len(), 2);
    }
}
