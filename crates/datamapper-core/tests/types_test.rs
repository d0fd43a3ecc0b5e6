//! Value types: Scalar, BindValue, Binds, Row.

use datamapper_core::errors::error_code;
use datamapper_core::{binds, BindValue, Binds, DataMapperErrorCode, QueryError, Row, Scalar};

// ---- Scalar ----

#[test]
fn unset_values() {
    for unset in [
        Scalar::Null,
        Scalar::Bool(false),
        Scalar::Int(0),
        Scalar::Float(0.0),
        Scalar::Text(String::new()),
        Scalar::Text("0".into()),
        Scalar::Blob(Vec::new()),
    ] {
        assert!(unset.is_unset(), "{unset:?} should be unset");
    }
    for set in [
        Scalar::Bool(true),
        Scalar::Int(-1),
        Scalar::Text("00".into()),
        Scalar::Text("0.0".into()),
        Scalar::Blob(vec![0]),
    ] {
        assert!(!set.is_unset(), "{set:?} should be set");
    }
    assert!(Scalar::Null.is_null());
    assert!(!Scalar::Int(0).is_null());
}

#[test]
fn integer_coercion() {
    assert_eq!(Scalar::Int(7).as_i64(), Some(7));
    assert_eq!(Scalar::Bool(true).as_i64(), Some(1));
    assert_eq!(Scalar::Text("42".into()).as_i64(), Some(42));
    assert_eq!(Scalar::Text("4x".into()).as_i64(), None);
    assert_eq!(Scalar::Float(1.0).as_i64(), None);
    assert_eq!(Scalar::Text("hi".into()).as_str(), Some("hi"));
    assert_eq!(Scalar::Int(1).as_str(), None);
}

#[test]
fn scalar_conversions() {
    assert_eq!(Scalar::from("a"), Scalar::Text("a".into()));
    assert_eq!(Scalar::from(3i32), Scalar::Int(3));
    assert_eq!(Scalar::from(3u32), Scalar::Int(3));
    assert_eq!(Scalar::from(None::<i64>), Scalar::Null);
    assert_eq!(Scalar::from(Some("x")), Scalar::Text("x".into()));
}

#[test]
fn rows_and_binds_serialize_as_maps() {
    let row = Row::new().with("id", 1i64).with("name", "a").with("gone", Scalar::Null);
    assert_eq!(
        serde_json::to_string(&row).unwrap(),
        r#"{"id":1,"name":"a","gone":null}"#
    );

    let binds = binds! { "ids" => vec![1i64, 2], "flag" => true };
    assert_eq!(
        serde_json::to_string(&binds).unwrap(),
        r#"{"ids":[1,2],"flag":true}"#
    );
}

// ---- BindValue ----

#[test]
fn bind_value_conversions() {
    assert_eq!(BindValue::from(5i64), BindValue::Scalar(Scalar::Int(5)));
    assert_eq!(BindValue::from("x"), BindValue::Scalar(Scalar::Text("x".into())));
    assert_eq!(BindValue::from(None::<&str>), BindValue::Scalar(Scalar::Null));
    assert_eq!(
        BindValue::from(vec![1i64, 2]),
        BindValue::List(vec![Scalar::Int(1), Scalar::Int(2)])
    );
    assert_eq!(BindValue::from(Vec::<i64>::new()), BindValue::List(Vec::new()));
}

// ---- Binds ----

#[test]
fn binds_keep_insertion_order_and_replace_in_place() {
    let mut binds = Binds::new().with("b", 1i64).with("a", 2i64).with("c", 3i64);
    binds.insert("a", "replaced");

    let keys: Vec<&str> = binds.keys().collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
    assert_eq!(binds.len(), 3);
    assert_eq!(binds.get("a"), Some(&BindValue::from("replaced")));
    assert!(binds.get("z").is_none());
}

#[test]
fn binds_macro() {
    let empty = binds! {};
    assert!(empty.is_empty());

    let binds = binds! { "email" => "a@b.c", "ids" => vec![1i64, 3] };
    assert_eq!(binds.len(), 2);
    assert_eq!(
        binds.get("ids"),
        Some(&BindValue::List(vec![Scalar::Int(1), Scalar::Int(3)]))
    );
}

#[test]
fn binds_extend_and_collect() {
    let mut left: Binds = [("x", 1i64), ("y", 2i64)].into_iter().collect();
    left.extend(binds! { "y" => 20i64, "z" => 30i64 });

    let keys: Vec<&str> = left.keys().collect();
    assert_eq!(keys, vec!["x", "y", "z"]);
    assert_eq!(left.get("y"), Some(&BindValue::from(20i64)));
}

// ---- Row ----

#[test]
fn row_set_remove() {
    let mut row = Row::new().with("id", 1i64).with("email", "a@b.c");
    row.set("id", 2i64);
    row.set("group_id", 5i64);

    let columns: Vec<&str> = row.columns().collect();
    assert_eq!(columns, vec!["id", "email", "group_id"]);
    assert_eq!(row.get("id"), Some(&Scalar::Int(2)));

    assert_eq!(row.remove("email"), Some(Scalar::Text("a@b.c".into())));
    assert!(!row.contains("email"));
    assert_eq!(row.remove("email"), None);
    assert_eq!(row.len(), 2);

    // Columns after the removed one are still found and updated in place.
    assert_eq!(row.get("group_id"), Some(&Scalar::Int(5)));
    row.set("group_id", 6i64);
    row.set("email", "b@c.d");
    let columns: Vec<&str> = row.columns().collect();
    assert_eq!(columns, vec!["id", "group_id", "email"]);
    assert_eq!(row.get("group_id"), Some(&Scalar::Int(6)));
}

#[test]
fn many_keys_stay_addressable() {
    let mut binds = Binds::new();
    for i in 0..500i64 {
        binds.insert(format!("row{i}_id"), i);
    }
    binds.insert("row250_id", -1i64);

    assert_eq!(binds.len(), 500);
    assert!(binds.contains_key("row499_id"));
    assert_eq!(binds.get("row250_id"), Some(&BindValue::from(-1i64)));
    assert_eq!(binds.keys().nth(250), Some("row250_id"));
}

// ---- Errors ----

#[test]
fn query_error_codes() {
    let driver = QueryError::Driver {
        message: "no such table: t".into(),
        sql: "SELECT * FROM t".into(),
    };
    assert_eq!(driver.error_code(), error_code::QUERY_FAILED);
    assert_eq!(driver.driver_message(), Some("no such table: t"));

    let arity = QueryError::PlaceholderArity {
        fragment: "a = ? OR b = ?".into(),
        placeholders: 2,
        values: 1,
    };
    assert_eq!(arity.error_code(), error_code::PRECONDITION_FAILED);
    assert_eq!(arity.driver_message(), None);

    let empty = QueryError::EmptyBulkInsert { table: "t".into() };
    assert_eq!(empty.error_code(), error_code::PRECONDITION_FAILED);
}
