//! Supported languages and their Judge0 identifiers

use std::fmt;

use crate::constants::{language_ids, languages};

/// Language accepted by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Java,
    Cpp,
    CSharp,
    Sql,
}

impl Language {
    /// Resolve a language by name, ignoring case.
    ///
    /// Returns `None` for anything outside the fixed table; callers treat
    /// that as a client error and must not submit anything upstream.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            languages::PYTHON => Some(Self::Python),
            languages::JAVA => Some(Self::Java),
            languages::CPP => Some(Self::Cpp),
            languages::CSHARP => Some(Self::CSharp),
            languages::SQL => Some(Self::Sql),
            _ => None,
        }
    }

    /// Judge0 language identifier
    pub fn judge0_id(&self) -> u32 {
        match self {
            Self::Python => language_ids::PYTHON,
            Self::Java => language_ids::JAVA,
            Self::Cpp => language_ids::CPP,
            Self::CSharp => language_ids::CSHARP,
            Self::Sql => language_ids::SQL,
        }
    }

    /// Canonical wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => languages::PYTHON,
            Self::Java => languages::JAVA,
            Self::Cpp => languages::CPP,
            Self::CSharp => languages::CSHARP,
            Self::Sql => languages::SQL,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_language_id(name: &str) -> Option<u32> {
        Language::from_name(name).map(|language| language.judge0_id())
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(resolve_language_id("python"), Some(92));
        assert_eq!(resolve_language_id("PYTHON"), Some(92));
        assert_eq!(resolve_language_id("Python"), resolve_language_id("python"));
        assert_eq!(resolve_language_id("C++"), Some(54));
        assert_eq!(resolve_language_id("CSharp"), Some(51));
    }

    #[test]
    fn test_resolve_full_table() {
        assert_eq!(resolve_language_id("java"), Some(91));
        assert_eq!(resolve_language_id("c++"), Some(54));
        assert_eq!(resolve_language_id("csharp"), Some(51));
        assert_eq!(resolve_language_id("sql"), Some(82));
    }

    #[test]
    fn test_unknown_languages() {
        assert_eq!(resolve_language_id("ruby"), None);
        assert_eq!(resolve_language_id("cobol"), None);
        assert_eq!(resolve_language_id(""), None);
        assert_eq!(resolve_language_id(" python"), None);
        assert_eq!(resolve_language_id("cpp"), None);
    }

    #[test]
    fn test_every_listed_name_round_trips() {
        for name in languages::ALL {
            let language = Language::from_name(name).unwrap();
            assert_eq!(language.as_str(), *name);
            assert_eq!(language.to_string(), *name);
        }
    }
}
