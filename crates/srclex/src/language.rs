use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::diagnostics::ProfileError;

/// Immutable lexical configuration for one source language.
///
/// The reserved-word set is closed: an identifier is a keyword exactly when
/// it is a member. Everything else the tokenizer needs to know about a
/// language beyond the shared C-family shape lives in the flags below.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ProfileConfig")]
pub struct LanguageProfile {
    name: String,
    keywords: BTreeSet<String>,
    case_insensitive_keywords: bool,
    pub hash_comments: bool,
    pub dollar_identifiers: bool,
    pub single_quote_strings: bool,
    pub multiline_strings: bool,
    pub triple_quote_strings: bool,
    pub verbatim_strings: bool,
    pub extra_symbols: BTreeSet<char>,
}

/// Serialized form of a profile. Keywords are normalised on conversion.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileConfig {
    name: String,
    keywords: Vec<String>,
    case_insensitive_keywords: bool,
    hash_comments: bool,
    dollar_identifiers: bool,
    single_quote_strings: bool,
    multiline_strings: bool,
    triple_quote_strings: bool,
    verbatim_strings: bool,
    extra_symbols: Vec<char>,
}

impl From<ProfileConfig> for LanguageProfile {
    fn from(config: ProfileConfig) -> Self {
        let mut profile = LanguageProfile::new(config.name, config.keywords)
            .with_case_insensitive_keywords(config.case_insensitive_keywords)
            .with_extra_symbols(config.extra_symbols);
        profile.hash_comments = config.hash_comments;
        profile.dollar_identifiers = config.dollar_identifiers;
        profile.single_quote_strings = config.single_quote_strings;
        profile.multiline_strings = config.multiline_strings;
        profile.triple_quote_strings = config.triple_quote_strings;
        profile.verbatim_strings = config.verbatim_strings;
        profile
    }
}

impl LanguageProfile {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            case_insensitive_keywords: false,
            hash_comments: false,
            dollar_identifiers: false,
            single_quote_strings: false,
            multiline_strings: false,
            triple_quote_strings: false,
            verbatim_strings: false,
            extra_symbols: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn case_insensitive_keywords(&self) -> bool {
        self.case_insensitive_keywords
    }

    /// Match keywords ignoring ASCII case, as PHP does.
    pub fn with_case_insensitive_keywords(mut self, enabled: bool) -> Self {
        self.case_insensitive_keywords = enabled;
        if enabled {
            self.keywords = self.keywords.iter().map(|k| k.to_ascii_lowercase()).collect();
        }
        self
    }

    pub fn with_hash_comments(mut self, enabled: bool) -> Self {
        self.hash_comments = enabled;
        self
    }

    pub fn with_dollar_identifiers(mut self, enabled: bool) -> Self {
        self.dollar_identifiers = enabled;
        self
    }

    pub fn with_single_quote_strings(mut self, enabled: bool) -> Self {
        self.single_quote_strings = enabled;
        self
    }

    pub fn with_multiline_strings(mut self, enabled: bool) -> Self {
        self.multiline_strings = enabled;
        self
    }

    /// `"""` opens a string that runs to the next `"""`, across lines.
    pub fn with_triple_quote_strings(mut self, enabled: bool) -> Self {
        self.triple_quote_strings = enabled;
        self
    }

    /// `@"` opens a string without escapes in which `""` stands for `"`.
    pub fn with_verbatim_strings(mut self, enabled: bool) -> Self {
        self.verbatim_strings = enabled;
        self
    }

    /// Characters accepted as single-character punctuation on top of the
    /// fixed operator table.
    pub fn with_extra_symbols(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.extra_symbols.extend(symbols);
        self
    }

    /// The built-in profile for a file extension such as `go` or `.kt`.
    pub fn for_extension(extension: &str) -> Result<Self, ProfileError> {
        Language::from_extension(extension)
            .map(Language::profile)
            .ok_or_else(|| ProfileError::UnknownExtension(extension.to_string()))
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        if self.case_insensitive_keywords && text.bytes().any(|b| b.is_ascii_uppercase()) {
            self.keywords.contains(&text.to_ascii_lowercase())
        } else {
            self.keywords.contains(text)
        }
    }
}

impl Default for LanguageProfile {
    /// A profile with no reserved words and no language quirks.
    fn default() -> Self {
        Self::new("generic", Vec::<String>::new())
    }
}

/// Languages with a built-in profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Go,
    Java,
    C,
    Cpp,
    CSharp,
    Kotlin,
    Php,
    JavaScript,
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 9] = [
        Language::Go,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Kotlin,
        Language::Php,
        Language::JavaScript,
        Language::TypeScript,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Language::Go => "go",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
            Language::Kotlin => "kt",
            Language::Php => "php",
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
        }
    }

    pub fn from_abbreviation(abbreviation: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.abbreviation().eq_ignore_ascii_case(abbreviation))
    }

    /// Map a file extension, with or without its leading dot, to a language.
    pub fn from_extension(extension: &str) -> Option<Language> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        match extension.to_ascii_lowercase().as_str() {
            "go" => Some(Language::Go),
            "java" => Some(Language::Java),
            "c" | "h" => Some(Language::C),
            "cpp" | "cc" | "cxx" | "c++" | "hpp" | "hh" | "hxx" => Some(Language::Cpp),
            "cs" => Some(Language::CSharp),
            "kt" | "kts" => Some(Language::Kotlin),
            "php" => Some(Language::Php),
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "ts" | "tsx" | "mts" | "cts" => Some(Language::TypeScript),
            _ => None,
        }
    }

    pub fn profile(self) -> LanguageProfile {
        let name = self.abbreviation();
        match self {
            Language::Go => LanguageProfile::new(name, GO_KEYWORDS.iter().copied()),
            Language::Java => LanguageProfile::new(name, JAVA_KEYWORDS.iter().copied())
                .with_triple_quote_strings(true)
                .with_extra_symbols(['@']),
            Language::C => {
                LanguageProfile::new(name, C_KEYWORDS.iter().copied()).with_extra_symbols(['#'])
            }
            Language::Cpp => LanguageProfile::new(
                name,
                C_KEYWORDS
                    .iter()
                    .filter(|k| !k.starts_with('_'))
                    .chain(CPP_KEYWORDS)
                    .copied(),
            )
            .with_extra_symbols(['#']),
            Language::CSharp => LanguageProfile::new(name, CSHARP_KEYWORDS.iter().copied())
                .with_verbatim_strings(true)
                .with_extra_symbols(['@', '#', '$']),
            Language::Kotlin => LanguageProfile::new(name, KOTLIN_KEYWORDS.iter().copied())
                .with_triple_quote_strings(true)
                .with_extra_symbols(['@']),
            Language::Php => LanguageProfile::new(name, PHP_KEYWORDS.iter().copied())
                .with_case_insensitive_keywords(true)
                .with_hash_comments(true)
                .with_dollar_identifiers(true)
                .with_single_quote_strings(true)
                .with_multiline_strings(true)
                .with_extra_symbols(['@', '\\', '#']),
            Language::JavaScript => LanguageProfile::new(name, JS_KEYWORDS.iter().copied())
                .with_dollar_identifiers(true)
                .with_single_quote_strings(true)
                .with_extra_symbols(['#']),
            Language::TypeScript => LanguageProfile::new(
                name,
                JS_KEYWORDS.iter().chain(TS_EXTRA_KEYWORDS).copied(),
            )
            .with_dollar_identifiers(true)
            .with_single_quote_strings(true)
            .with_extra_symbols(['#', '@']),
        }
    }
}

impl FromStr for Language {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_abbreviation(s).ok_or_else(|| ProfileError::UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
    "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
    "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
    "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized",
    "this", "throw", "throws", "transient", "true", "try", "void", "volatile", "while",
];

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
    "typedef", "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof",
    "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "bitand", "bitor", "bool", "catch",
    "char8_t", "char16_t", "char32_t", "class", "co_await", "co_return", "co_yield", "compl",
    "concept", "const_cast", "consteval", "constexpr", "constinit", "decltype", "delete",
    "dynamic_cast", "explicit", "export", "false", "friend", "mutable", "namespace", "new",
    "noexcept", "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private", "protected",
    "public", "reinterpret_cast", "requires", "static_assert", "static_cast", "template",
    "this", "thread_local", "throw", "true", "try", "typeid", "typename", "using", "virtual",
    "wchar_t", "xor", "xor_eq",
];

const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

const KOTLIN_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw",
    "true", "try", "typealias", "typeof", "val", "var", "when", "while",
];

const PHP_KEYWORDS: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "die", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "eval",
    "exit", "extends", "false", "final", "finally", "fn", "for", "foreach", "function",
    "global", "goto", "if", "implements", "include", "include_once", "instanceof",
    "insteadof", "interface", "isset", "list", "match", "namespace", "new", "null", "or",
    "print", "private", "protected", "public", "readonly", "require", "require_once",
    "return", "static", "switch", "throw", "trait", "true", "try", "unset", "use", "var",
    "while", "xor", "yield",
];

const JS_KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "let", "new", "null", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

const TS_EXTRA_KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "asserts", "bigint", "boolean", "declare", "enum", "implements",
    "infer", "interface", "is", "keyof", "module", "namespace", "never", "number", "private",
    "protected", "public", "readonly", "satisfies", "string", "symbol", "type", "undefined",
    "unique", "unknown",
];
