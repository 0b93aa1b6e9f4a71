//! Canned captures shared by the command tests.

use dbgkit_snapshot::{ProcessSnapshot, StructValue, Value};

/// Snapshot with one of everything the commands care about:
/// a scalar, a string, aggregates, an unreadable member, and nesting.
pub fn basic_capture() -> ProcessSnapshot {
    let mut snapshot = ProcessSnapshot::new();
    snapshot.push("x", Value::Int(5));
    snapshot.push("word", Value::Str("hi".to_string()));
    snapshot.push(
        "obj",
        Value::Struct(
            StructValue::new("Obj")
                .with_field("foo", Value::Int(1))
                .with_field("foobar", Value::Int(10))
                .with_field("baz", Value::Int(2)),
        ),
    );
    snapshot.push(
        "point",
        Value::Struct(
            StructValue::new("Point")
                .with_field("x", Value::Int(1))
                .with_field("y", Value::Int(2)),
        ),
    );
    snapshot.push(
        "conn",
        Value::Struct(
            StructValue::new("Conn")
                .with_field("fd", Value::Int(7))
                .with_field(
                    "buf",
                    Value::Unavailable {
                        reason: "optimized out".to_string(),
                    },
                ),
        ),
    );
    snapshot.push(
        "nested",
        Value::Struct(StructValue::new("Outer").with_field(
            "inner",
            Value::Struct(
                StructValue::new("Point")
                    .with_field("x", Value::Int(1))
                    .with_field("y", Value::Int(2)),
            ),
        )),
    );
    snapshot
}
