//! Validated contact fields.

use crate::error::DataError;
use std::fmt;

/// A person's full name, tokenized into words at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    full_name: String,
    words: Vec<String>,
}

impl Name {
    pub fn new(raw: &str) -> Result<Self, DataError> {
        let trimmed = raw.trim();
        if !is_valid_name(trimmed) {
            return Err(DataError::InvalidName(raw.to_string()));
        }
        Ok(Self {
            full_name: trimmed.to_string(),
            words: trimmed.split_whitespace().map(str::to_string).collect(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Whitespace-delimited words of the name, in the order entered
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

fn is_valid_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_alphanumeric() || c == ' ')
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
    is_private: bool,
}

impl Phone {
    pub fn new(raw: &str, is_private: bool) -> Result<Self, DataError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(DataError::InvalidPhone(raw.to_string()));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email {
    value: String,
    is_private: bool,
}

impl Email {
    pub fn new(raw: &str, is_private: bool) -> Result<Self, DataError> {
        let trimmed = raw.trim();
        if !is_valid_email(trimmed) {
            return Err(DataError::InvalidEmail(raw.to_string()));
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

fn is_valid_email(value: &str) -> bool {
    let is_part = |s: &str| {
        !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    };
    match value.split_once('@') {
        Some((local, domain)) => is_part(local) && is_part(domain),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
    is_private: bool,
}

impl Address {
    pub fn new(raw: &str, is_private: bool) -> Result<Self, DataError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DataError::InvalidAddress);
        }
        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self, DataError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphanumeric) {
            return Err(DataError::InvalidTag(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
