// "1e" and "1e+" must leave the marker unconsumed so that a following scan
// resumes at the 'e', exactly like strtod's endptr.

#[test]
fn test() {
    for input in ["1e", "1e+", "1e-", "1E "] {
        let parsed = floatscan::from_str_prefix(input).unwrap();
        assert_eq!(parsed.value, 1.0, "value of {input:?}");
        assert_eq!(parsed.len, 1, "cursor of {input:?}");
    }
}
