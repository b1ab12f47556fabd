use super::*;

fn rules() -> StandardIdentifierRules {
    StandardIdentifierRules
}

// === Plain identifiers ===

#[test]
fn ascii_identifiers_are_valid() {
    let r = rules();
    assert!(r.is_valid_identifier("Sphere"));
    assert!(r.is_valid_identifier("_private"));
    assert!(r.is_valid_identifier("x2"));
    assert!(r.is_valid_identifier("camelCase"));
}

#[test]
fn unicode_identifiers_follow_xid() {
    let r = rules();
    assert!(r.is_valid_identifier("caf\u{e9}"));
    assert!(r.is_valid_identifier("\u{3b1}\u{3b2}")); // αβ
    assert!(r.is_valid_identifier("\u{4e16}\u{754c}")); // 世界
}

#[test]
fn invalid_plain_identifiers() {
    let r = rules();
    assert!(!r.is_valid_identifier(""));
    assert!(!r.is_valid_identifier("2x"));
    assert!(!r.is_valid_identifier("a-b"));
    assert!(!r.is_valid_identifier("a|b"));
    assert!(!r.is_valid_identifier("a b"));
    // Punctuation-class codepoints overmatched by the byte classifier.
    assert!(!r.is_valid_identifier("\u{a7}")); // §
    assert!(!r.is_valid_identifier("abc\u{2603}")); // snowman
}

// === Namespaced identifiers ===

#[test]
fn namespaced_identifiers_are_colon_joined() {
    let r = rules();
    assert!(r.is_valid_namespaced_identifier("primvars:st"));
    assert!(r.is_valid_namespaced_identifier("a:b:c"));
}

#[test]
fn plain_identifier_is_the_degenerate_namespaced_case() {
    assert!(rules().is_valid_namespaced_identifier("Sphere"));
}

#[test]
fn later_segments_admit_dash_and_bar() {
    let r = rules();
    assert!(r.is_valid_namespaced_identifier("shading:red-blue"));
    assert!(r.is_valid_namespaced_identifier("sets:a|b"));
    // But not the first segment...
    assert!(!r.is_valid_namespaced_identifier("red-blue:x"));
    // ...and not in segment-initial position either.
    assert!(!r.is_valid_namespaced_identifier("a:-b"));
}

#[test]
fn empty_segments_are_invalid() {
    let r = rules();
    assert!(!r.is_valid_namespaced_identifier(""));
    assert!(!r.is_valid_namespaced_identifier(":a"));
    assert!(!r.is_valid_namespaced_identifier("a:"));
    assert!(!r.is_valid_namespaced_identifier("a::b"));
}

// === Injection seam ===

/// A host oracle that only accepts lowercase ASCII — exercises the trait
/// object seam the driver consumes.
struct LowercaseOnly;

impl IdentifierRules for LowercaseOnly {
    fn is_valid_identifier(&self, text: &str) -> bool {
        !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase())
    }

    fn is_valid_namespaced_identifier(&self, text: &str) -> bool {
        text.split(':').all(|s| self.is_valid_identifier(s))
    }
}

#[test]
fn alternate_rules_plug_in_through_the_trait() {
    let r: &dyn IdentifierRules = &LowercaseOnly;
    assert!(r.is_valid_identifier("sphere"));
    assert!(!r.is_valid_identifier("Sphere"));
    assert!(r.is_valid_namespaced_identifier("a:b"));
}
