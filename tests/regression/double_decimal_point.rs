// A second decimal point cannot extend a literal; the scan must stop right
// before it. Pins the stopping behavior of the grammar on the adversarial
// demo input rather than assuming any particular library's edge behavior.

#[test]
fn test() {
    let parsed = floatscan::from_str_prefix("365.24.1.1 29.53").unwrap();
    assert_eq!(parsed.value, 365.24);
    assert_eq!(parsed.len, "365.24".len());

    assert_eq!(floatscan::extract_pair("365.24.1.1 29.53"), (365.24, 0.1));
}
