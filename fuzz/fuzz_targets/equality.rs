#![no_main]
use jsonwrap::Value;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&[u8], &[u8])| {
    let (lhs, rhs) = data;
    let (Ok(lhs), Ok(rhs)) = (
        serde_json::from_slice::<serde_json::Value>(lhs),
        serde_json::from_slice::<serde_json::Value>(rhs),
    ) else {
        return;
    };
    let (Ok(left), Ok(right)) = (Value::try_from(&lhs), Value::try_from(&rhs)) else {
        return;
    };
    assert_eq!(left == right, right == left);
    assert_eq!(left == rhs, left == right);
    assert_eq!(Value::try_from(lhs), Ok(left));
});
