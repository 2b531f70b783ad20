//! Assertion helpers for generated C source.

use pretty_assertions::assert_eq;

/// Assert the source contains `needle`, showing the source on failure
pub fn assert_contains(source: &str, needle: &str) {
    assert!(
        source.contains(needle),
        "Expected to find {needle:?} in:\n{source}"
    );
}

/// Assert the source does not contain `needle`
pub fn assert_lacks(source: &str, needle: &str) {
    assert!(
        !source.contains(needle),
        "Did not expect {needle:?} in:\n{source}"
    );
}

/// Parse the hex bytes of the array whose declaration starts with `decl`,
/// e.g. `"const uchar ptiles[]"`.
pub fn array_bytes(source: &str, decl: &str) -> Vec<u8> {
    let start = source
        .find(decl)
        .unwrap_or_else(|| panic!("Missing {decl:?} in:\n{source}"));
    let body = &source[start..];
    let open = body.find('{').expect("array without opening brace") + 1;
    let close = body.find("};").expect("array without closing brace");

    body[open..close]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let hex = s.strip_prefix("0x").unwrap_or_else(|| panic!("not a hex byte: {s}"));
            u8::from_str_radix(hex, 16).unwrap_or_else(|_| panic!("not a byte: {s}"))
        })
        .collect()
}

/// Assert an array's bytes match exactly
pub fn assert_array(source: &str, decl: &str, expected: &[u8]) {
    assert_eq!(array_bytes(source, decl), expected, "array {decl}");
}
