#![no_main]
use jsonwrap::Value;
use libfuzzer_sys::fuzz_target;

fn walk(value: &Value) -> usize {
    let _ = (value.first(), value.last(), value.kind());
    let _ = (value[0].count(), value["key"].count(), value.get(usize::MAX));
    value.values().map(walk).sum::<usize>() + 1
}

fuzz_target!(|data: &[u8]| {
    if let Some(value) = Value::from_json_slice(data) {
        walk(&value);
        let decoded: serde_json::Value =
            serde_json::from_slice(data).expect("`from_json_slice` accepted the input");
        assert_eq!(value, decoded);
    }
});
