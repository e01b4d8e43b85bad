// The infamous strtod input sitting on the normal/subnormal boundary. Must
// convert correctly (and terminate) through the fallback path.

#[test]
fn test() {
    let parsed = floatscan::from_str_prefix("2.2250738585072011e-308").unwrap();
    assert_eq!(parsed.value, 2.2250738585072011e-308);
    assert_eq!(parsed.len, "2.2250738585072011e-308".len());

    // And one ulp into the subnormal range still round-trips.
    let parsed = floatscan::from_str_prefix("2.2250738585072009e-308").unwrap();
    assert_eq!(parsed.value, 2.2250738585072009e-308);
}
