//! Synthetic workload generator.
//!
//! Produces a size-parameterized data tree with a stable shape: repeated calls
//! with the same size yield the same field set and container lengths, while
//! random scalar leaves differ call to call. Verification therefore always
//! compares the exact instance it encoded, never a regenerated one.

use rand::Rng;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::value::Value;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad \
minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea \
commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit \
esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat \
non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

/// Generate a workload tree for the given size tier.
///
/// The shape is deterministic per size: fixed scalar fields, a sequence of
/// `size` records, and a map of `size` entries of the same record shape.
/// `size = 0` yields empty containers with all scalar fields present.
#[must_use]
pub fn generate(size: usize) -> Value {
    let mut rng = rand::thread_rng();
    let mut root = BTreeMap::new();

    root.insert("string".to_string(), Value::Str(format!("{LOREM} {LOREM}")));
    root.insert(
        "number".to_string(),
        Value::Float(std::f64::consts::PI * 1000.0 * rng.gen::<f64>()),
    );
    root.insert("integer".to_string(), Value::Int(-rng.gen_range(0..1_000_000)));
    root.insert("boolean".to_string(), Value::Bool(true));
    root.insert("date".to_string(), Value::Timestamp(now_millis()));

    let mut seq = Vec::with_capacity(size);
    let mut map = BTreeMap::new();
    for i in 0..size {
        seq.push(record(i, &mut rng));
        map.insert(format!("key-{i}"), record(i, &mut rng));
    }
    root.insert("array".to_string(), Value::Seq(seq));
    root.insert("object".to_string(), Value::Map(map));

    Value::Map(root)
}

fn record(i: usize, rng: &mut impl Rng) -> Value {
    let mut nested = BTreeMap::new();
    nested.insert("a".to_string(), Value::Int(i as i64 * 2));
    nested.insert("b".to_string(), Value::Str(format!("nested-{i}")));

    let mut fields = BTreeMap::new();
    fields.insert("id".to_string(), Value::Int(i as i64));
    fields.insert("name".to_string(), Value::Str(format!("item-{i}")));
    fields.insert("value".to_string(), Value::Float(rng.gen::<f64>()));
    fields.insert("nested".to_string(), Value::Map(nested));
    Value::Map(fields)
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_len(workload: &Value, field: &str) -> usize {
        let Value::Map(root) = workload else {
            panic!("workload root must be a map")
        };
        match &root[field] {
            Value::Seq(items) => items.len(),
            Value::Map(entries) => entries.len(),
            other => panic!("{field} is not a container: {other:?}"),
        }
    }

    #[test]
    fn test_container_sizes_match_tier() {
        for size in [0, 1, 10, 100] {
            let workload = generate(size);
            assert_eq!(container_len(&workload, "array"), size);
            assert_eq!(container_len(&workload, "object"), size);
        }
    }

    #[test]
    fn test_zero_size_keeps_scalar_fields() {
        let Value::Map(root) = generate(0) else {
            panic!("workload root must be a map")
        };
        for field in ["string", "number", "integer", "boolean", "date"] {
            assert!(root.contains_key(field), "missing scalar field {field}");
        }
    }

    #[test]
    fn test_shape_is_stable_across_calls() {
        let Value::Map(a) = generate(5) else { panic!() };
        let Value::Map(b) = generate(5) else { panic!() };
        let keys_a: Vec<_> = a.keys().collect();
        let keys_b: Vec<_> = b.keys().collect();
        assert_eq!(keys_a, keys_b);

        let (Value::Map(obj_a), Value::Map(obj_b)) = (&a["object"], &b["object"]) else {
            panic!()
        };
        assert_eq!(
            obj_a.keys().collect::<Vec<_>>(),
            obj_b.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_record_shape() {
        let Value::Map(root) = generate(1) else { panic!() };
        let Value::Seq(items) = &root["array"] else { panic!() };
        let Value::Map(item) = &items[0] else { panic!() };

        assert_eq!(item["id"], Value::Int(0));
        assert_eq!(item["name"], Value::Str("item-0".to_string()));
        assert!(matches!(item["value"], Value::Float(_)));

        let Value::Map(nested) = &item["nested"] else { panic!() };
        assert_eq!(nested["a"], Value::Int(0));
        assert_eq!(nested["b"], Value::Str("nested-0".to_string()));
    }

    #[test]
    fn test_integer_field_is_negative_range() {
        for _ in 0..16 {
            let Value::Map(root) = generate(0) else { panic!() };
            let Value::Int(i) = &root["integer"] else { panic!() };
            assert!(*i <= 0, "integer field must be in the negative range");
        }
    }
}
