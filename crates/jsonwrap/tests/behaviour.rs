use std::{any::Any, collections::HashMap};

use jsonwrap::{wrap, Value};
use serde_json::json;

mod collections {
    use super::*;

    #[test]
    fn nested_map_literal() {
        let dict = wrap!({"nested-dict": {"response": [1, 2, 3, 4]}});
        assert_eq!(
            dict.get("nested-dict")
                .and_then(|v| v.get("response"))
                .and_then(|v| v.get(2))
                .and_then(Value::as_i64),
            Some(3)
        );
    }

    #[test]
    fn heterogeneous_array_literal() {
        let array = wrap!([1, 2.0, "3", [4], {"D": 5.0}]);

        assert_eq!(array.get(0).and_then(Value::as_i64), Some(1));
        assert_eq!(array.get(1).and_then(Value::as_f64), Some(2.0));
        assert_eq!(array.get(2).and_then(Value::as_str), Some("3"));
        assert_eq!(array.get(3).and_then(|v| v.get(0)), Some(&Value::Int(4)));
        assert_eq!(array[4]["D"], 5.0);
        assert_eq!(array.count(), 5);
    }

    #[test]
    fn deeply_nested_literal() {
        let nested = wrap!({"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": {"a": ["y"]}}}}}}}}}}}}}}}}}}});

        let mut depth = 0;
        let mut current = &nested;
        while let Some(nest) = current.get("a") {
            current = nest;
            depth += 1;
        }

        assert_eq!(current[0], "y");
        assert_eq!(depth, 19);
    }

    #[test]
    fn deeply_nested_json() {
        let text = format!("{}[\"y\"]{}", "{\"a\":".repeat(19), "}".repeat(19));
        let nested = Value::from_json(&text).expect("Valid JSON");

        let mut current = &nested;
        for _ in 0..19 {
            current = current.member("a");
        }
        assert_eq!(current.get(0), Some(&wrap!("y")));
    }

    #[test]
    fn absent_access() {
        let array = wrap!(["x"]);
        assert_eq!(array.get(5), None);
        assert_eq!(array[5], Value::Null);

        for scalar in [wrap!(1), wrap!(1.5), wrap!(true), wrap!("a"), wrap!(null)] {
            assert_eq!(scalar.get("key"), None);
            assert_eq!(scalar["key"], Value::Null);
            assert_eq!(scalar.get_member("key"), None);
            assert_eq!(*scalar.member("key"), Value::Null);
        }
    }
}

mod compare {
    use super::*;
    use test_case::test_case;

    #[test]
    fn native_array() {
        let array = wrap!([4]);
        assert_eq!(array, [4]);
    }

    #[test]
    fn native_map() {
        let dict = wrap!({"D": 5.0, "array": [4]});
        assert_eq!(dict, json!({"D": 5.0, "array": [4]}));
        assert_eq!(json!({"array": [4], "D": 5.0}), dict);
    }

    #[test_case(Value::Float(3.0), Value::Float(3.0); "float")]
    #[test_case(Value::Int(3), Value::Int(3); "int")]
    #[test_case(Value::Bool(true), Value::Bool(true); "bool")]
    #[test_case(Value::Array(Box::default()), Value::Array(Box::default()); "empty array")]
    #[test_case(Value::Map(jsonwrap::Map::default()), Value::Map(jsonwrap::Map::default()); "empty map")]
    fn basic_values_equal(lhs: Value, rhs: Value) {
        assert_eq!(lhs, rhs);
    }

    #[test_case(Value::Float(3.0), Value::Int(3))]
    #[test_case(Value::Float(1.0), Value::Bool(true))]
    #[test_case(Value::Float(0.0), Value::Bool(true))]
    #[test_case(Value::Float(1.0), Value::Bool(false))]
    #[test_case(Value::Float(0.0), Value::Bool(false))]
    #[test_case(Value::Int(0), Value::Bool(true))]
    #[test_case(Value::Int(1), Value::Bool(true))]
    #[test_case(Value::Int(0), Value::Bool(false))]
    #[test_case(Value::Int(1), Value::Bool(false))]
    fn basic_values_differ(lhs: Value, rhs: Value) {
        assert_ne!(lhs, rhs);
    }

    #[test]
    fn strings() {
        assert_eq!(Value::String("3.0".into()), "3.0");
        assert_eq!(Value::String("😊".into()), "😊");
    }
}

mod deserialization {
    use super::*;

    #[test]
    fn json_string() {
        let source = wrap!({
            "name": "Sam Soffes",
            "age": 24,
            "salary": 150.000,
            "retired": false
        });

        let parsed = Value::from_json(
            "{ \"name\": \"Sam Soffes\",  \"age\": 24,  \"salary\": 150.000, \"retired\": false } ",
        );

        assert_eq!(parsed, Some(source));
    }

    #[test]
    fn malformed_json() {
        assert_eq!(Value::from_json("{\"name\": "), None);
        assert_eq!(Value::from_json_slice(&[b'"', 0xC3, b'"']), None);
    }
}

mod native {
    use super::*;

    fn boxed<T: Any>(value: T) -> Box<dyn Any> {
        Box::new(value)
    }

    #[test]
    fn array_elements_parse_individually() {
        let native = vec![boxed(1), boxed(2.0), boxed("3"), boxed(vec![boxed(4)])];
        let value = Value::parse(&native).expect("Supported input");

        assert_eq!(value.count(), native.len());
        for (position, item) in native.iter().enumerate() {
            assert_eq!(Some(&value[position]), Value::parse(&**item).as_ref());
        }
    }

    #[test]
    fn map_entries_parse_individually() {
        let mut native: HashMap<String, Box<dyn Any>> = HashMap::new();
        native.insert("D".into(), boxed(5.0));
        native.insert("array".into(), boxed(vec![boxed(4)]));
        native.insert("flag".into(), boxed(true));
        let value = Value::parse(&native).expect("Supported input");

        assert_eq!(value.count(), native.len());
        for (key, item) in &native {
            assert_eq!(Some(&value[key]), Value::parse(&**item).as_ref());
        }
        assert_eq!(value, json!({"D": 5.0, "array": [4], "flag": true}));
    }

    #[test]
    fn unsupported_input() {
        assert_eq!(Value::parse(&()), None);
        assert_eq!(Value::parse(&json!(null)), None);
        assert_eq!(Value::parse(&vec![(); 3]), None);
        assert_eq!(Value::parse(&HashMap::<String, ()>::new()), None);
    }

    #[test]
    fn typed_collections() {
        let ints = vec![1i64, 2, 3];
        let value = Value::parse(&ints).expect("Vectors are supported");
        assert_eq!(value, [1, 2, 3]);
        for (position, item) in ints.iter().enumerate() {
            assert_eq!(Some(&value[position]), Value::parse(item).as_ref());
        }

        let names = vec![String::from("a"), String::from("b")];
        assert_eq!(Value::parse(&names), Some(wrap!(["a", "b"])));

        let mut floats: HashMap<String, f64> = HashMap::new();
        floats.insert("D".into(), 5.0);
        let value = Value::parse(&floats).expect("Maps are supported");
        assert_eq!(value, floats);
        assert_eq!(value["D"], 5.0);

        let nested = vec![wrap!({"D": 5.0}), wrap!([4])];
        assert_eq!(Value::parse(&nested), Some(wrap!([{"D": 5.0}, [4]])));

        let map: jsonwrap::Map = [(jsonwrap::CompactString::from("a"), wrap!(1))]
            .into_iter()
            .collect();
        assert_eq!(Value::parse(&map), Some(Value::Map(map.clone())));
    }
}
