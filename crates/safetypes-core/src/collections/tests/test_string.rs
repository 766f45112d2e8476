//! Tests for NonEmptyString.

use super::*;
use crate::error::DomainError;

#[test]
fn test_new() {
    assert!(NonEmptyString::new("").is_none());
    let text = NonEmptyString::new("héllo").unwrap();
    assert_eq!(text.len(), 5);
    assert_eq!(text.to_string(), "héllo");
    assert_eq!(text, "héllo");
    assert_eq!("héllo", text);
}

#[test]
fn test_parse() {
    let text: NonEmptyString = "abc".parse().unwrap();
    assert_eq!(text.as_string(), "abc");
    assert_eq!("".parse::<NonEmptyString>(), Err(DomainError::EmptyString));
    assert_eq!(NonEmptyString::try_from(String::new()), Err(DomainError::EmptyString));
    assert!(NonEmptyString::try_from("x").is_ok());
}

#[test]
fn test_collection_operations() {
    let mut text = NonEmptyString::new("ab").unwrap();
    text.push(Grapheme::from('c'));
    assert_eq!(text.remove(0), Some(Grapheme::from('a')));
    assert_eq!(text.pop(), Some(Grapheme::from('c')));
    assert_eq!(text.pop(), None);
    assert_eq!(text.to_string(), "b");
    assert_eq!(text.remove_last_n(3), 0);
}

#[test]
fn test_reorder() {
    let mut text = NonEmptyString::new("dcba").unwrap();
    text.sort();
    assert_eq!(text, "abcd");
    assert_eq!(text.reversed().to_string(), "dcba");
}

#[test]
fn test_concatenation() {
    let hello = NonEmptyString::new("hello").unwrap();
    let world = NonEmptyString::new("world").unwrap();

    let joined = hello.clone() + ", " + &world;
    assert_eq!(joined.to_string(), "hello, world");

    let mut greeting = hello;
    greeting += "!";
    greeting += &world;
    assert_eq!(greeting.into_string(), "hello!world");
}

#[test]
fn test_ordering_follows_text() {
    let apple = NonEmptyString::new("apple").unwrap();
    let banana = NonEmptyString::new("banana").unwrap();
    let app = NonEmptyString::new("app").unwrap();
    assert!(apple < banana);
    assert!(app < apple);
    assert_eq!(apple.cmp(&banana), "apple".cmp("banana"));
}

#[test]
fn test_from_graphemes() {
    let graphemes = NonEmptyArray::new(Grapheme::from('o'), vec![Grapheme::from('k')]);
    let text = NonEmptyString::from_graphemes(graphemes.clone());
    assert_eq!(text.as_graphemes(), &graphemes);
    assert_eq!(String::from(text.clone()), "ok");
    assert_eq!(text.into_graphemes(), graphemes);
}

#[test]
fn test_combining_mark_is_one_element() {
    let mut text = NonEmptyString::new("e\u{301}").unwrap();
    assert_eq!(text.len(), 1);
    assert_eq!(text.first(), "e\u{301}");
    assert_eq!(text.remove_first(), None);
    assert_eq!(text.pop(), None);
    assert_eq!(text.to_string(), "e\u{301}");
    assert_eq!(text, "e\u{301}");
}

#[test]
fn test_zwj_sequence_is_one_element() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let text = NonEmptyString::new(family).unwrap();
    assert_eq!(text.len(), 1);
    assert_eq!(text.clone().reversed(), text);
    assert_eq!(text.reversed().to_string(), family);

    let mixed = NonEmptyString::new("a\u{1F468}\u{200D}\u{1F469}").unwrap();
    assert_eq!(mixed.len(), 2);
    assert_eq!(mixed.reversed().to_string(), "\u{1F468}\u{200D}\u{1F469}a");
}

#[test]
fn test_append_joins_combining_mark() {
    let mut text = NonEmptyString::new("ae").unwrap();
    text += "\u{301}x";
    assert_eq!(text.len(), 3);
    assert_eq!(text.get(1).map(Grapheme::as_str), Some("e\u{301}"));
    assert_eq!(text, "ae\u{301}x");

    let mark = NonEmptyString::new("\u{301}").unwrap();
    let joined = NonEmptyString::new("o").unwrap() + &mark;
    assert_eq!(joined.len(), 1);
}

#[test]
fn test_equality_ignores_segmentation() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let built = NonEmptyString::from_graphemes(NonEmptyArray::new(
        Grapheme::from('e'),
        vec![Grapheme::from('\u{301}')],
    ));
    let parsed = NonEmptyString::new("e\u{301}").unwrap();
    assert_eq!(built.len(), 2);
    assert_eq!(built, parsed);

    let hash = |text: &NonEmptyString| {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    };
    assert_eq!(hash(&built), hash(&parsed));
}

#[test]
fn test_debug() {
    let text = NonEmptyString::new("hi").unwrap();
    assert_eq!(format!("{text:?}"), "NonEmptyString(\"hi\")");
}
