use serde::Serialize;

/// A token that could not be read as an `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseError {
    /// `position` is 1-based among the tokens actually parsed (comments excluded).
    #[error("invalid integer at position {position}: '{token}' ({reason})")]
    InvalidInteger {
        position: usize,
        token: String,
        reason: String,
    },
}

impl ParseError {
    pub fn position(&self) -> usize {
        match self {
            ParseError::InvalidInteger { position, .. } => *position,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            ParseError::InvalidInteger { token, .. } => token,
        }
    }
}

/// Failure of the reduction itself. Only the checked policy produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReduceError {
    /// The exact sum of `even_count` even values lies outside the i64 range.
    #[error("integer overflow: sum of {even_count} even values is {total}, outside the 64-bit range")]
    Overflow {
        #[serde(serialize_with = "serialize_display")]
        total: i128,
        even_count: usize,
    },
}

// i128 totals can exceed what a JSON number holds exactly.
fn serialize_display<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: std::fmt::Display,
{
    serializer.collect_str(value)
}

/// Any error from the parse-then-reduce pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvenSumError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Reduce(#[from] ReduceError),
}

impl EvenSumError {
    /// Serialize to a JSON object with an `error` message plus the variant's fields.
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut value = match self {
            EvenSumError::Parse(e) => serde_json::to_value(e),
            EvenSumError::Reduce(e) => serde_json::to_value(e),
        }
        .unwrap_or_else(|_| serde_json::json!({}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("error".to_string(), serde_json::json!(self.to_string()));
        }
        value
    }
}
