//! Tests for template matching and dispatch.

use super::*;

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

#[test]
fn test_parse_markers() {
    let template = Template::parse("what is the hex triplet of _");
    assert_eq!(template.tokens().len(), 7);
    assert_eq!(template.tokens()[6], Token::Single);
    assert_eq!(template.capture_slots(), 1);

    let template = Template::parse("when was % born");
    assert_eq!(template.tokens()[2], Token::Span);
    assert_eq!(template.tokens()[0], Token::Literal("when".to_string()));
}

#[test]
fn test_display_round_trip() {
    let pattern = "what is the polar radius of %";
    let template = Template::parse(pattern);
    assert_eq!(template.to_string(), pattern);

    let reparsed: Template = pattern.parse().unwrap();
    assert_eq!(reparsed, template);
}

#[test]
fn test_literal_only_exact_match() {
    let template = Template::parse("bye");
    assert_eq!(template.captures(&["bye"]), Some(vec![]));
}

#[test]
fn test_span_single_word() {
    let template = Template::parse("when was % born");
    let captured = template.captures(&words("when was ada born"));
    assert_eq!(captured, Some(vec!["ada".to_string()]));
}

#[test]
fn test_span_multiple_words() {
    let template = Template::parse("when was % born");
    let captured = template.captures(&words("when was marie curie born"));
    // Absorbed words join with single spaces, no leading space.
    assert_eq!(captured, Some(vec!["marie curie".to_string()]));
}

#[test]
fn test_single_wildcard() {
    let template = Template::parse("what is the hex triplet of _");
    let captured = template.captures(&words("what is the hex triplet of red"));
    assert_eq!(captured, Some(vec!["red".to_string()]));
}

#[test]
fn test_mismatch_fails() {
    let template = Template::parse("when was % born");
    assert_eq!(template.captures(&words("what is up")), None);
}

#[test]
fn test_trailing_span_absorbs_remainder() {
    let template = Template::parse("%");
    let captured = template.captures(&words("a b c"));
    assert_eq!(captured, Some(vec!["a b c".to_string()]));
}

#[test]
fn test_span_may_be_empty() {
    let template = Template::parse("tell me % now");
    let captured = template.captures(&words("tell me now"));
    assert_eq!(captured, Some(vec![String::new()]));
}

#[test]
fn test_single_wildcard_needs_a_word() {
    let template = Template::parse("lookup _");
    assert_eq!(template.captures(&["lookup"]), None);
    assert_eq!(template.captures(&words("lookup a b")), None);
}

#[test]
fn test_multiple_captures_in_template_order() {
    let template = Template::parse("is _ taller than %");
    let captured = template.captures(&words("is ada taller than marie curie"));
    assert_eq!(
        captured,
        Some(vec!["ada".to_string(), "marie curie".to_string()])
    );
}

#[test]
fn test_greedy_span_never_backtracks() {
    // The span commits to the first occurrence of the next literal, so
    // a repeated literal inside the span area fails the match.
    let template = Template::parse("find % in the list");
    assert_eq!(
        template.captures(&words("find in in the list")),
        None
    );
}

#[test]
fn test_captures_is_pure() {
    let template = Template::parse("when was % born");
    let query = words("when was marie curie born");
    let first = template.captures(&query);
    let second = template.captures(&query);
    assert_eq!(first, second);
}

#[test]
fn test_dispatch_no_entry_matched() {
    let table = PatternTable::builder()
        .entry("when was % born", |_| Ok(vec!["1815-12-10".to_string()]))
        .build();

    let answers = table.dispatch(&["foo"]).unwrap();
    assert_eq!(answers, vec![DONT_UNDERSTAND.to_string()]);
}

#[test]
fn test_dispatch_matched_but_empty() {
    let table = PatternTable::builder()
        .entry("ping", |_| Ok(vec![]))
        .build();

    let answers = table.dispatch(&["ping"]).unwrap();
    assert_eq!(answers, vec![NO_ANSWERS.to_string()]);
}

#[test]
fn test_dispatch_returns_action_answers() {
    let table = PatternTable::builder()
        .entry("when was % born", |args| Ok(vec![format!("{}: 1815", args[0])]))
        .build();

    let answers = table.dispatch(&words("when was ada born")).unwrap();
    assert_eq!(answers, vec!["ada: 1815".to_string()]);
}

#[test]
fn test_dispatch_concatenates_in_table_order() {
    let table = PatternTable::builder()
        .entry("hello %", |_| Ok(vec!["first".to_string()]))
        .entry("% world", |_| Ok(vec!["second-a".to_string(), "second-b".to_string()]))
        .build();

    // Both templates match; answers keep table order, then action order.
    let answers = table.dispatch(&words("hello world")).unwrap();
    assert_eq!(
        answers,
        vec![
            "first".to_string(),
            "second-a".to_string(),
            "second-b".to_string()
        ]
    );
}

#[test]
fn test_dispatch_is_pure_given_pure_actions() {
    let table = PatternTable::builder()
        .entry("hello %", |args| Ok(vec![args[0].clone()]))
        .build();

    let query = words("hello there");
    let first = table.dispatch(&query).unwrap();
    let second = table.dispatch(&query).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_terminate_propagates() {
    let table = PatternTable::builder()
        .entry("bye", |_| Err(ActionError::Terminate))
        .build();

    let result = table.dispatch(&["bye"]);
    assert!(matches!(result, Err(ActionError::Terminate)));
}

#[test]
fn test_lookup_failure_drops_accumulated_answers() {
    // The first entry already produced an answer, but a failing lookup
    // in the second aborts the scan and drops it.
    let table = PatternTable::builder()
        .entry("hello %", |_| Ok(vec!["kept?".to_string()]))
        .entry("% world", |_| {
            Err(ActionError::Lookup("Page has no infobox".to_string()))
        })
        .build();

    let result = table.dispatch(&words("hello world"));
    match result {
        Err(ActionError::Lookup(message)) => {
            assert_eq!(message, "Page has no infobox");
        }
        other => panic!("expected lookup failure, got {:?}", other.map(|v| v.join("|"))),
    }
}

#[test]
fn test_terminate_pre_empts_later_entries() {
    let table = PatternTable::builder()
        .entry("bye", |_| Err(ActionError::Terminate))
        .entry("%", |_| Ok(vec!["never reached".to_string()]))
        .build();

    assert!(matches!(table.dispatch(&["bye"]), Err(ActionError::Terminate)));
}

#[test]
fn test_empty_table() {
    let table = PatternTable::builder().build();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);

    let answers = table.dispatch(&["anything"]).unwrap();
    assert_eq!(answers, vec![DONT_UNDERSTAND.to_string()]);
}
