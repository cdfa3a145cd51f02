//! Language catalogs accepted as trending filters.

/// Programming languages accepted by `--language`, as GitHub URL slugs.
pub const PROGRAMMING_LANGUAGES: &[&str] = &[
    "python",
    "ruby",
    "c",
    "c++",
    "java",
    "scala",
    "kotlin",
    "javascript",
    "typescript",
    "go",
    "rust",
    "lua",
    "haskell",
];

/// Spoken languages accepted by `--spoken-language`: (ISO 639-1 code, name).
pub const SPOKEN_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bn", "Bengali"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fa", "Persian"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

#[must_use]
pub fn is_supported_language(slug: &str) -> bool {
    PROGRAMMING_LANGUAGES.contains(&slug)
}

#[must_use]
pub fn is_supported_spoken_language(code: &str) -> bool {
    SPOKEN_LANGUAGES.iter().any(|(c, _)| *c == code)
}
