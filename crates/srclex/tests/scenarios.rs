mod common;

use common::{collect, options_with_comments, render};
use pretty_assertions::assert_eq;
use srclex::{Language, LanguageProfile, LexErrorKind, Span, TokenKind, TokenizerOptions};

fn go() -> LanguageProfile {
    Language::Go.profile()
}

#[test]
fn test_line_comments_only_yield_eof() {
    let items = collect("// a\n// b\n", &go(), TokenizerOptions::default());
    insta::assert_snapshot!(render("// a\n// b\n", &items), @r#"Eof "" 3:1"#);
}

#[test]
fn test_line_comments_emitted_in_order() {
    let source = "// a\n// b\n";
    let items = collect(source, &go(), options_with_comments());
    insta::assert_snapshot!(render(source, &items), @r#"
    Comment "// a" 1:1
    Comment "// b" 2:1
    Eof "" 3:1
    "#);
}

#[test]
fn test_unterminated_comment_is_terminal() {
    let source = "/* unterminated";
    let items = collect(source, &go(), TokenizerOptions::default());
    assert_eq!(items.len(), 1);
    let err = items[0].as_ref().unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!(err.offset(), 0);
    assert_eq!(err.span, Span::new(0, 15));
    assert!(err.is_fatal());
}

#[test]
fn test_define_and_receive() {
    let source = "a := 1 <- b";
    let items = collect(source, &go(), TokenizerOptions::default());
    insta::assert_snapshot!(render(source, &items), @r#"
    Identifier "a" 1:1
    Operator ":=" 1:3
    Number "1" 1:6
    Operator "<-" 1:8
    Identifier "b" 1:11
    Eof "" 1:12
    "#);
}

#[test]
fn test_unrecognized_character_mid_stream() {
    let source = "x @ y";
    let items = collect(source, &go(), TokenizerOptions::default());
    insta::assert_snapshot!(render(source, &items), @r#"
    Identifier "x" 1:1
    error UnrecognizedCharacter('@') "@" 1:3
    Identifier "y" 1:5
    Eof "" 1:6
    "#);
}

#[test]
fn test_every_bad_character_is_reported() {
    let items = collect("a @ b ? c @@", &LanguageProfile::default(), TokenizerOptions::default());
    let errors: Vec<_> = items.iter().filter_map(|item| item.as_ref().err()).collect();
    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors.iter().map(|e| e.offset()).collect::<Vec<_>>(),
        vec![2, 10, 11]
    );
    assert!(matches!(items.last(), Some(Ok(t)) if t.kind == TokenKind::Eof));
}

#[test]
fn test_empty_input() {
    let items = collect("", &go(), TokenizerOptions::default());
    insta::assert_snapshot!(render("", &items), @r#"Eof "" 1:1"#);
}

#[test]
fn test_select_statement() {
    let source = "select {\ncase v, ok := <-ch:\n\tprint(v)\ndefault:\n}";
    let items = collect(source, &go(), TokenizerOptions::default());
    insta::assert_snapshot!(render(source, &items), @r#"
    Keyword "select" 1:1
    Punctuation "{" 1:8
    Keyword "case" 2:1
    Identifier "v" 2:6
    Punctuation "," 2:7
    Identifier "ok" 2:9
    Operator ":=" 2:12
    Operator "<-" 2:15
    Identifier "ch" 2:17
    Operator ":" 2:19
    Identifier "print" 3:9
    Punctuation "(" 3:14
    Identifier "v" 3:15
    Punctuation ")" 3:16
    Keyword "default" 4:1
    Operator ":" 4:8
    Punctuation "}" 5:1
    Eof "" 5:2
    "#);
}

#[test]
fn test_composite_literal_and_struct() {
    let source = "var p = struct{ Name string }{Name: \"John\"}";
    let items = collect(source, &go(), TokenizerOptions::default());
    insta::assert_snapshot!(render(source, &items), @r#"
    Keyword "var" 1:1
    Identifier "p" 1:5
    Operator "=" 1:7
    Keyword "struct" 1:9
    Punctuation "{" 1:15
    Identifier "Name" 1:17
    Identifier "string" 1:22
    Punctuation "}" 1:29
    Punctuation "{" 1:30
    Identifier "Name" 1:31
    Operator ":" 1:35
    String "\"John\"" 1:37
    Punctuation "}" 1:43
    Eof "" 1:44
    "#);
}

#[test]
fn test_unterminated_literals_recover() {
    let source = "fmt.Println(\"oops\nx := 'y";
    let items = collect(source, &go(), TokenizerOptions::default());
    insta::assert_snapshot!(render(source, &items), @r#"
    Identifier "fmt" 1:1
    Operator "." 1:4
    Identifier "Println" 1:5
    Punctuation "(" 1:12
    error UnterminatedLiteral "\"oops" 1:13
    Identifier "x" 2:1
    Operator ":=" 2:3
    error UnterminatedLiteral "'y" 2:6
    Eof "" 2:8
    "#);
}

#[test]
fn test_tokens_after_halt_are_never_produced() {
    let source = "a /* b\nc";
    let result = srclex::tokenize(source, &go(), TokenizerOptions::default()).into_result();
    assert_eq!(result.tokens.len(), 1);
    assert_eq!(result.tokens[0].text, "a");
    assert_eq!(result.errors.len(), 1);
    assert!(!result.reached_eof());
}

#[test]
fn test_custom_reserved_words() {
    let profile = LanguageProfile::new("toy", ["let", "in"]);
    let kinds: Vec<_> = srclex::tokenize("let x in y", &profile, TokenizerOptions::default())
        .flatten()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_same_engine_different_languages() {
    let source = "fun when";
    let go_kinds: Vec<_> = srclex::tokenize(source, &go(), TokenizerOptions::default())
        .flatten()
        .map(|t| t.kind)
        .collect();
    let kotlin = Language::Kotlin.profile();
    let kt_kinds: Vec<_> = srclex::tokenize(source, &kotlin, TokenizerOptions::default())
        .flatten()
        .map(|t| t.kind)
        .collect();
    assert_eq!(go_kinds[..2], [TokenKind::Identifier, TokenKind::Identifier]);
    assert_eq!(kt_kinds[..2], [TokenKind::Keyword, TokenKind::Keyword]);
}

#[test]
fn test_kotlin_raw_string_spans_lines() {
    let source = "val s = \"\"\"a\n// b\"\"\"";
    let items = collect(source, &Language::Kotlin.profile(), options_with_comments());
    insta::assert_snapshot!(render(source, &items), @r#"
    Keyword "val" 1:1
    Identifier "s" 1:5
    Operator "=" 1:7
    String "\"\"\"a\n// b\"\"\"" 1:9
    Eof "" 2:8
    "#);
}

#[test]
fn test_csharp_verbatim_string_keeps_backslashes() {
    let source = "@\"C:\\path\\\";";
    let items = collect(source, &Language::CSharp.profile(), TokenizerOptions::default());
    insta::assert_snapshot!(render(source, &items), @r#"
    String "@\"C:\\path\\\"" 1:1
    Punctuation ";" 1:12
    Eof "" 1:13
    "#);
}

#[test]
fn test_early_drop_is_fine() {
    let source = "a b c d e f";
    let profile = go();
    let mut tokenizer = srclex::tokenize(source, &profile, TokenizerOptions::default());
    let first = tokenizer.next().and_then(Result::ok).map(|t| t.text);
    assert_eq!(first, Some("a"));
    drop(tokenizer);
}

#[test]
fn test_options_and_profile_from_json() {
    let options: TokenizerOptions = serde_json::from_str(r#"{"emit_comments": true}"#).unwrap();
    assert!(options.emit_comments);
    assert_eq!(options.tab_width, 8);

    let profile: LanguageProfile = serde_json::from_str(
        r#"{"name": "toy", "keywords": ["BEGIN", "end"], "case_insensitive_keywords": true, "extra_symbols": ["@"]}"#,
    )
    .unwrap();
    assert_eq!(profile.name(), "toy");
    assert!(!profile.triple_quote_strings);
    assert!(profile.is_keyword("begin"));
    assert!(profile.is_keyword("End"));

    let kinds: Vec<_> = srclex::tokenize("begin @x end", &profile, options)
        .flatten()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Keyword,
            TokenKind::Punctuation,
            TokenKind::Identifier,
            TokenKind::Keyword,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_block_string_flags_from_json() {
    let profile: LanguageProfile =
        serde_json::from_str(r#"{"name": "mix", "triple_quote_strings": true, "verbatim_strings": true}"#)
            .unwrap();
    let source = "\"\"\"a\nb\"\"\" @\"c\"\"d\"";
    let result = srclex::tokenize(source, &profile, TokenizerOptions::default()).into_result();
    assert!(result.errors.is_empty());
    let kinds: Vec<_> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::String, TokenKind::String, TokenKind::Eof]);
}
