//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// JUDGE0 DEFAULTS
// =============================================================================

/// Default RapidAPI host serving Judge0 CE
pub const DEFAULT_JUDGE0_API_HOST: &str = "judge0-ce.p.rapidapi.com";

/// Default per-request HTTP timeout in seconds
pub const DEFAULT_JUDGE0_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Header carrying the RapidAPI key
pub const RAPIDAPI_KEY_HEADER: &str = "X-RapidAPI-Key";

/// Header carrying the RapidAPI host
pub const RAPIDAPI_HOST_HEADER: &str = "X-RapidAPI-Host";

// =============================================================================
// POLLING DEFAULTS
// =============================================================================

/// Wait between two status fetches, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Maximum number of status fetches per submission (0 = unbounded)
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 90;

/// Overall deadline for one poll sequence, in seconds (0 = unbounded)
pub const DEFAULT_POLL_DEADLINE_SECS: u64 = 180;

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Language names as accepted on the wire (matched case-insensitively)
pub mod languages {
    pub const PYTHON: &str = "python";
    pub const JAVA: &str = "java";
    pub const CPP: &str = "c++";
    pub const CSHARP: &str = "csharp";
    pub const SQL: &str = "sql";

    pub const ALL: &[&str] = &[PYTHON, JAVA, CPP, CSHARP, SQL];
}

/// Judge0 language identifiers
pub mod language_ids {
    /// Python 3
    pub const PYTHON: u32 = 92;
    /// Java
    pub const JAVA: u32 = 91;
    /// C++ (GCC)
    pub const CPP: u32 = 54;
    /// C# (Mono)
    pub const CSHARP: u32 = 51;
    /// SQL (SQLite)
    pub const SQL: u32 = 82;
}

// =============================================================================
// JUDGE0 STATUS IDS
// =============================================================================

/// Status identifiers reported by Judge0
pub mod status_ids {
    pub const IN_QUEUE: u32 = 1;
    pub const PROCESSING: u32 = 2;
    pub const ACCEPTED: u32 = 3;
    pub const WRONG_ANSWER: u32 = 4;
    pub const TIME_LIMIT_EXCEEDED: u32 = 5;
    pub const COMPILATION_ERROR: u32 = 6;
    pub const RUNTIME_ERROR: u32 = 7;
    pub const MEMORY_LIMIT_EXCEEDED: u32 = 8;
}

// =============================================================================
// TEST HARNESS
// =============================================================================

/// Class the harness instantiates
pub const HARNESS_SOLUTION_CLASS: &str = "Solution";

/// Method the harness calls (camelCase languages)
pub const HARNESS_ENTRY_METHOD: &str = "firstMissingPositive";

/// Method the harness calls (PascalCase languages)
pub const HARNESS_ENTRY_METHOD_PASCAL: &str = "FirstMissingPositive";
