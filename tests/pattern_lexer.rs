use wayline_router_rs::pattern::{PathKey, PathToken, parse_path};

fn expect_key(token: &PathToken) -> &PathKey {
    match token {
        PathToken::Key(key) => key,
        other => panic!("expected parameter token, got {other:?}"),
    }
}

fn expect_literal(token: &PathToken) -> &str {
    match token {
        PathToken::Literal(text) => text,
        other => panic!("expected literal token, got {other:?}"),
    }
}

#[test]
fn parses_literal_and_named_parameter() {
    let tokens = parse_path("/user/:id");
    assert_eq!(tokens.len(), 2);
    assert_eq!(expect_literal(&tokens[0]), "/user");

    let key = expect_key(&tokens[1]);
    assert_eq!(key.name, "id");
    assert_eq!(key.prefix, "/");
    assert_eq!(key.delimiter, "/");
    assert!(!key.optional);
    assert!(!key.repeat);
    assert_eq!(key.pattern, "[^\\/]+?");
}

#[test]
fn parses_named_parameter_with_custom_pattern() {
    let tokens = parse_path("/:test(\\d+)?");
    assert_eq!(tokens.len(), 1);

    let key = expect_key(&tokens[0]);
    assert_eq!(key.name, "test");
    assert_eq!(key.prefix, "/");
    assert!(key.optional);
    assert!(!key.repeat);
    assert_eq!(key.pattern, "\\d+");
}

#[test]
fn parses_anonymous_group() {
    let tokens = parse_path("/route(\\d+)");
    assert_eq!(tokens.len(), 2);
    assert_eq!(expect_literal(&tokens[0]), "/route");

    let key = expect_key(&tokens[1]);
    assert_eq!(key.name, "0");
    assert_eq!(key.prefix, "");
    assert_eq!(key.delimiter, "/");
    assert_eq!(key.pattern, "\\d+");
}

#[test]
fn parses_wildcard_with_prefix() {
    let tokens = parse_path("/*");
    assert_eq!(tokens.len(), 1);

    let key = expect_key(&tokens[0]);
    assert_eq!(key.name, "0");
    assert_eq!(key.prefix, "/");
    assert_eq!(key.pattern, ".*");
}

#[test]
fn lone_wildcard_becomes_anonymous_parameter() {
    let tokens = parse_path("*");
    assert_eq!(tokens.len(), 1);

    let key = expect_key(&tokens[0]);
    assert_eq!(key.name, "0");
    assert_eq!(key.prefix, "");
    assert_eq!(key.delimiter, "/");
    assert_eq!(key.pattern, ".*");
    assert!(!key.optional);
    assert!(!key.repeat);
}

#[test]
fn anonymous_index_skips_named_parameters() {
    let tokens = parse_path("/(\\d+)/:name/(\\w+)");
    assert_eq!(tokens.len(), 3);

    assert_eq!(expect_key(&tokens[0]).name, "0");
    assert_eq!(expect_key(&tokens[1]).name, "name");
    assert_eq!(expect_key(&tokens[2]).name, "1");
}

#[test]
fn suffix_drives_optional_and_repeat() {
    let plus = expect_key(&parse_path("/:segment+")[0]).clone();
    assert!(plus.repeat);
    assert!(!plus.optional);

    let star = expect_key(&parse_path("/:segment*")[0]).clone();
    assert!(star.repeat);
    assert!(star.optional);

    let question = expect_key(&parse_path("/:segment?")[0]).clone();
    assert!(!question.repeat);
    assert!(question.optional);
}

#[test]
fn dot_prefix_becomes_delimiter() {
    let tokens = parse_path("/file.:ext");
    assert_eq!(tokens.len(), 2);
    assert_eq!(expect_literal(&tokens[0]), "/file");

    let key = expect_key(&tokens[1]);
    assert_eq!(key.prefix, ".");
    assert_eq!(key.delimiter, ".");
    assert_eq!(key.pattern, "[^.]+?");
}

#[test]
fn escaped_character_stays_literal() {
    let tokens = parse_path("/a\\:b");
    assert_eq!(tokens.len(), 1);
    assert_eq!(expect_literal(&tokens[0]), "/a:b");

    let tokens = parse_path("/route\\(1\\)");
    assert_eq!(tokens.len(), 1);
    assert_eq!(expect_literal(&tokens[0]), "/route(1)");
}

#[test]
fn group_pattern_is_group_escaped() {
    let tokens = parse_path("/:id(a:b)");
    let key = expect_key(&tokens[0]);
    assert_eq!(key.pattern, "a\\:b");
}

#[test]
fn empty_input_yields_no_tokens() {
    assert!(parse_path("").is_empty());
}

#[test]
fn tokenizer_is_total_on_pathological_input() {
    // None of these should panic; unclaimed characters fall into literals.
    for input in [
        "(((",
        ")))",
        ":",
        "::",
        "/:",
        "\\",
        "/{weird}",
        "?+*",
        "a|b",
        "/日本語/:名前",
        "/user/:id(",
    ] {
        let _ = parse_path(input);
    }
}

#[test]
fn trailing_quantifier_without_parameter_is_literal() {
    // "?" can only modify a parameter construct; alone it is plain text.
    let tokens = parse_path("/search?");
    assert_eq!(tokens.len(), 1);
    assert_eq!(expect_literal(&tokens[0]), "/search?");
}
