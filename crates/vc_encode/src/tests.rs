use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::net::Ipv4Addr;
use core::time::Duration;

use serde_json::{Value, json};

use crate::derive::Encode;
use crate::ops::{DynamicMap, DynamicRecord};
use crate::registry::{Encoders, ModelConfig};
use crate::types::{Bytes, Color, IterOnce, SecretBytes, SecretStr};
use crate::{
    EncodeError, EncodeOptions, LocItem, Selection, SerializeDriver, ToJson, custom_encoder,
    default_encoder, to_string, to_string_with, to_value, to_value_with,
};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Encode)]
#[encode(model)]
struct ModelA {
    x: i64,
    y: String,
}

#[derive(Encode)]
struct Dataclass {
    bar: i32,
    spam: &'static str,
}

#[derive(Encode)]
#[encode(model)]
struct Roots(Vec<String>);

#[derive(Encode)]
enum MyEnum {
    #[encode(value = "bar")]
    Foo,
    #[encode(value = "crackle")]
    Snap,
}

#[derive(Encode)]
enum Level {
    #[encode(value = 10)]
    Low,
    High,
}

#[derive(Encode)]
struct Foo;

fn boxed(value: impl crate::Encode) -> Box<dyn crate::Encode> {
    Box::new(value)
}

fn tagged(tag: &'static str) -> ModelConfig {
    ModelConfig::new().json_encoder::<Duration>(move |_| Ok(Value::from(tag)))
}

fn outer_config() -> ModelConfig {
    tagged("outer")
}

fn inner_config() -> ModelConfig {
    tagged("inner")
}

#[derive(Encode)]
#[encode(config = inner_config)]
struct Inner {
    b: Duration,
}

#[derive(Encode)]
#[encode(config = outer_config)]
struct Outer {
    a: Duration,
    inner: Inner,
    plain: Vec<Duration>,
}

// -----------------------------------------------------------------------------
// Built-in table

#[test]
fn builtin_vectors() {
    let cases: Vec<(Box<dyn crate::Encode>, &str)> = vec![
        (boxed(Ipv4Addr::new(192, 168, 0, 1)), r#""192.168.0.1""#),
        (boxed("#000".parse::<Color>().unwrap()), r#""black""#),
        (boxed(Color::from((1, 12, 123))), r##""#010c7b""##),
        (boxed(SecretStr::new("abcd")), r#""**********""#),
        (boxed(SecretStr::new("")), r#""""#),
        (boxed(SecretBytes::new(b"xyz".to_vec())), r#""**********""#),
        (boxed(SecretBytes::new(Vec::new())), r#""""#),
        (boxed([1_u8, 2, 3].into_iter().collect::<BTreeSet<_>>()), "[1, 2, 3]"),
        (boxed(IterOnce::new(0..4)), "[0, 1, 2, 3]"),
        (boxed(Bytes::from("this is bytes")), r#""this is bytes""#),
        (
            boxed(DynamicRecord::new().with_config(ModelConfig::new()).with("a", "b").with("c", "d")),
            r#"{"a": "b", "c": "d"}"#,
        ),
        (boxed(MyEnum::Foo), r#""bar""#),
        (boxed(MyEnum::Snap), r#""crackle""#),
        (boxed(Level::Low), "10"),
        (boxed(Level::High), r#""High""#),
    ];

    for (value, expected) in cases {
        assert_eq!(to_string(&*value).unwrap(), expected, "{}", value.type_path());
    }
}

#[cfg(all(feature = "chrono", feature = "uuid", feature = "decimal", feature = "ipnet"))]
#[test]
fn builtin_vectors_of_optional_types() {
    use chrono::{NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

    let date = NaiveDate::from_ymd_opt(2032, 1, 1).unwrap();
    let cases: Vec<(Box<dyn crate::Encode>, &str)> = vec![
        (
            boxed("ebcdab58-6eb8-46fb-a190-d07a33e9eac8".parse::<uuid::Uuid>().unwrap()),
            r#""ebcdab58-6eb8-46fb-a190-d07a33e9eac8""#,
        ),
        (boxed("::1:0:1".parse::<core::net::Ipv6Addr>().unwrap()), r#""::1:0:1""#),
        (boxed("192.168.0.0/24".parse::<ipnet::Ipv4Net>().unwrap()), r#""192.168.0.0/24""#),
        (boxed("2001:db00::/120".parse::<ipnet::IpNet>().unwrap()), r#""2001:db00::/120""#),
        (boxed(date.and_hms_opt(1, 1, 0).unwrap()), r#""2032-01-01T01:01:00""#),
        (
            boxed(Utc.with_ymd_and_hms(2032, 1, 1, 1, 1, 0).unwrap()),
            r#""2032-01-01T01:01:00+00:00""#,
        ),
        (boxed(date.and_hms_opt(0, 0, 0).unwrap()), r#""2032-01-01T00:00:00""#),
        (boxed(NaiveTime::from_hms_opt(12, 34, 56).unwrap()), r#""12:34:56""#),
        (
            boxed(TimeDelta::days(12) + TimeDelta::seconds(34) + TimeDelta::microseconds(56)),
            "1036834.000056",
        ),
        (boxed("12.34".parse::<rust_decimal::Decimal>().unwrap()), "12.34"),
    ];

    for (value, expected) in cases {
        assert_eq!(to_string(&*value).unwrap(), expected, "{}", value.type_path());
    }
}

// -----------------------------------------------------------------------------
// Models and records

#[cfg(feature = "decimal")]
#[test]
fn model_encoding() {
    #[derive(Encode)]
    #[encode(model)]
    struct Model {
        a: f64,
        b: Bytes,
        c: rust_decimal::Decimal,
        d: ModelA,
    }

    let m = Model {
        a: 10.2,
        b: Bytes::from("foobar"),
        c: "10.2".parse().unwrap(),
        d: ModelA {
            x: 123,
            y: "123".into(),
        },
    };

    assert_eq!(
        m.json().unwrap(),
        r#"{"a": 10.2, "b": "foobar", "c": 10.2, "d": {"x": 123, "y": "123"}}"#
    );
    let options = EncodeOptions::new().exclude(Selection::from(["b"]));
    assert_eq!(
        m.json_with(&options).unwrap(),
        r#"{"a": 10.2, "c": 10.2, "d": {"x": 123, "y": "123"}}"#
    );
}

#[test]
fn dataclass_and_custom_root() {
    let f = Dataclass {
        bar: 123,
        spam: "apple pie",
    };
    assert_eq!(to_string(&f).unwrap(), r#"{"bar": 123, "spam": "apple pie"}"#);

    let root = Roots(vec!["a".into(), "b".into()]);
    assert_eq!(root.json().unwrap(), r#"["a", "b"]"#);
}

#[test]
fn skip_and_rename() {
    #[derive(Encode)]
    struct User {
        #[encode(rename = "userName")]
        name: &'static str,
        #[encode(skip)]
        #[allow(dead_code)]
        password: &'static str,
        r#type: u8,
    }

    let user = User {
        name: "ann",
        password: "hunter2",
        r#type: 1,
    };
    assert_eq!(to_value(&user).unwrap(), json!({"userName": "ann", "type": 1}));
}

#[test]
fn generic_and_tuple_structs() {
    #[derive(Encode)]
    struct Wrapper<T>(T);

    #[derive(Encode)]
    struct Pair(u8, &'static str);

    #[derive(Encode)]
    struct Page<T> {
        items: Vec<T>,
        next: Option<u32>,
    }

    assert_eq!(to_string(&Wrapper(5_u8)).unwrap(), "5");
    assert_eq!(to_string(&Pair(1, "x")).unwrap(), r#"[1, "x"]"#);

    let page = Page {
        items: vec![Wrapper("a"), Wrapper("b")],
        next: None,
    };
    assert_eq!(to_string(&page).unwrap(), r#"{"items": ["a", "b"], "next": null}"#);
}

#[test]
fn serde_backed_values() {
    #[derive(serde::Serialize, Encode)]
    #[encode(serde)]
    struct Point {
        x: i32,
        y: i32,
    }

    let value = DynamicMap::new().with("p", Point { x: 1, y: -2 }).with("c", 'z');
    assert_eq!(to_value(&value).unwrap(), json!({"p": {"x": 1, "y": -2}, "c": "z"}));
}

#[cfg(unix)]
#[test]
fn path_encoding() {
    use std::path::PathBuf;

    use crate::types::{DirectoryPath, FilePath};

    #[derive(Encode)]
    #[encode(model)]
    struct PathModel {
        path: PathBuf,
        file_path: FilePath,
        dir_path: DirectoryPath,
    }

    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("bar");
    std::fs::write(&file, b"").unwrap();
    let dir = tmp.path().join("baz");
    std::fs::create_dir(&dir).unwrap();

    let model = PathModel {
        path: PathBuf::from("/path/test/example/"),
        file_path: FilePath::new(&file).unwrap(),
        dir_path: DirectoryPath::new(&dir).unwrap(),
    };
    let expected = format!(
        r#"{{"path": "/path/test/example", "file_path": "{}", "dir_path": "{}"}}"#,
        file.display(),
        dir.display()
    );
    assert_eq!(model.json().unwrap(), expected);
}

// -----------------------------------------------------------------------------
// Registries

#[cfg(all(feature = "chrono", feature = "decimal"))]
#[test]
fn type_declared_encoders() {
    use chrono::{NaiveDate, TimeDelta};
    use rust_decimal::Decimal;

    use crate::format::{timedelta_isoformat, timedelta_seconds};

    fn config() -> ModelConfig {
        ModelConfig::new()
            .json_encoder::<TimeDelta>(|v| Ok(Value::from(format!("{:.3}s", timedelta_seconds(v)))))
            .json_encoder::<Decimal>(|_| Ok(Value::from("a decimal")))
    }

    #[derive(Encode)]
    #[encode(config = config)]
    struct Model {
        x: TimeDelta,
        y: Decimal,
        z: NaiveDate,
    }

    let m = Model {
        x: TimeDelta::seconds(123),
        y: Decimal::from(5),
        z: NaiveDate::from_ymd_opt(2032, 6, 1).unwrap(),
    };
    assert_eq!(
        m.json().unwrap(),
        r#"{"x": "123.000s", "y": "a decimal", "z": "2032-06-01"}"#
    );

    fn iso_config() -> ModelConfig {
        ModelConfig::new().json_encoder::<TimeDelta>(|v| Ok(Value::from(timedelta_isoformat(v))))
    }

    #[derive(Encode)]
    #[encode(config = iso_config)]
    struct IsoModel {
        x: TimeDelta,
    }

    let m = IsoModel {
        x: TimeDelta::seconds(123),
    };
    assert_eq!(m.json().unwrap(), r#"{"x": "P0DT0H2M3.000000S"}"#);
}

#[test]
fn universal_encoder() {
    #[derive(Encode)]
    #[encode(model)]
    struct Model {
        x: Duration,
    }

    let m = Model {
        x: Duration::from_secs(123),
    };
    assert_eq!(m.json().unwrap(), r#"{"x": 123.0}"#);

    let options = EncodeOptions::new().encoder(|_| Ok(Value::from("__default__")));
    assert_eq!(m.json_with(&options).unwrap(), r#"{"x": "__default__"}"#);

    // Natives and lists never reach it.
    let value = DynamicMap::new().with("n", 1_u8).with("l", vec![Foo]);
    assert_eq!(
        to_value_with(&value, &options).unwrap(),
        json!({"n": 1, "l": ["__default__"]})
    );

    // It replaces the encoders a model declares for itself.
    let value = Outer {
        a: Duration::from_secs(1),
        inner: Inner {
            b: Duration::from_secs(2),
        },
        plain: vec![Duration::from_secs(3)],
    };
    assert_eq!(value.to_json_value().unwrap()["a"], json!("outer"));
    assert_eq!(
        value.json_with(&options).unwrap(),
        r#"{"a": "__default__", "inner": {"b": "__default__"}, "plain": ["__default__"]}"#
    );
}

#[test]
fn precedence() {
    let value = Outer {
        a: Duration::from_secs(1),
        inner: Inner {
            b: Duration::from_secs(2),
        },
        plain: vec![Duration::from_secs(3)],
    };

    assert_eq!(
        to_value(&value).unwrap(),
        json!({"a": "outer", "inner": {"b": "inner"}, "plain": ["outer"]})
    );

    let call = Encoders::new().with::<Duration>(|_| Ok(Value::from("call")));
    let options = EncodeOptions::new()
        .encoders(call.clone())
        .encoder(|_| Ok(Value::from("universal")));
    assert_eq!(
        to_value_with(&value, &options).unwrap(),
        json!({"a": "call", "inner": {"b": "call"}, "plain": ["call"]})
    );

    // Both ignore model configurations, only the second one has a table.
    assert_eq!(
        default_encoder(&value).unwrap(),
        json!({"a": 1.0, "inner": {"b": 2.0}, "plain": [3.0]})
    );
    assert_eq!(
        custom_encoder(&call, &value).unwrap(),
        json!({"a": "call", "inner": {"b": "call"}, "plain": ["call"]})
    );
}

#[test]
fn registries_match_exact_types() {
    let options =
        EncodeOptions::new().encoders(Encoders::new().with::<u8>(|v| Ok(Value::from(*v + 1))));

    // Natives are written before any registry is asked.
    assert_eq!(to_value_with(&vec![1_u8], &options).unwrap(), json!([1]));

    // Wrappers are unwrapped, the inner type is looked up.
    let secret = Encoders::new().with::<SecretStr>(|v| Ok(Value::from(v.expose_secret())));
    let options = EncodeOptions::new().encoders(secret);
    let value: Vec<Option<Box<SecretStr>>> = vec![Some(Box::new("abc".into())), None];
    assert_eq!(to_value_with(&value, &options).unwrap(), json!(["abc", null]));
}

#[test]
fn user_errors_are_returned_unchanged() {
    let options = EncodeOptions::new().encoders(
        Encoders::new().with::<Ipv4Addr>(|_| Err(EncodeError::custom("no addresses here"))),
    );
    let value = vec![Ipv4Addr::LOCALHOST];

    let err = to_value_with(&value, &options).unwrap_err();
    assert!(matches!(&err, EncodeError::Custom(msg) if msg == "no addresses here"));
    assert!(err.loc().is_none());
}

// -----------------------------------------------------------------------------
// Errors

#[test]
fn type_mismatch() {
    let err = to_string(&Foo).unwrap_err();
    assert_eq!(err.to_string(), "Object of type Foo is not JSON serializable");

    #[derive(Encode)]
    struct Holder {
        items: Vec<Box<dyn crate::Encode>>,
    }

    let holder = Holder {
        items: vec![boxed(1_u8), boxed(Foo)],
    };
    let err = to_value(&holder).unwrap_err();
    assert!(matches!(&err, EncodeError::TypeMismatch { type_name, .. } if type_name == "Foo"));
    assert_eq!(
        err.loc().unwrap().items(),
        [LocItem::Field("items".to_string()), LocItem::Index(1)]
    );
    assert_eq!(err.loc().unwrap().to_string(), "items -> 1");
    assert_eq!(
        err.to_string(),
        "Object of type Foo is not JSON serializable (at items -> 1)"
    );
}

#[test]
fn map_keys() {
    let ints: BTreeMap<i32, &str> = [(1, "a"), (-2, "b")].into_iter().collect();
    assert_eq!(to_string(&ints).unwrap(), r#"{"-2": "b", "1": "a"}"#);

    let flags: BTreeMap<bool, u8> = [(false, 0), (true, 1)].into_iter().collect();
    assert_eq!(to_value(&flags).unwrap(), json!({"false": 0, "true": 1}));

    let optional = DynamicMap::new().with(None::<u8>, 1_u8).with(1.5_f64, 2_u8);
    assert_eq!(to_string(&optional).unwrap(), r#"{"null": 1, "1.5": 2}"#);

    let tuples: BTreeMap<(u8, u8), u8> = [((1, 2), 3)].into_iter().collect();
    let err = to_value(&tuples).unwrap_err();
    assert!(matches!(err, EncodeError::InvalidKey { .. }));
    assert_eq!(
        err.to_string(),
        "keys must be str, int, float, bool or None, not (u8, u8)"
    );
}

#[test]
fn non_finite_floats() {
    let err = to_string(&vec![1.0, f64::NAN]).unwrap_err();
    assert!(matches!(err, EncodeError::NonFiniteFloat { .. }));
    assert_eq!(err.loc().unwrap().to_string(), "1");
}

// -----------------------------------------------------------------------------
// Selections

#[test]
fn nested_selections() {
    #[derive(Encode)]
    #[encode(model)]
    struct Model {
        a: u8,
        d: ModelA,
        list: Vec<ModelA>,
    }

    let m = Model {
        a: 1,
        d: ModelA {
            x: 2,
            y: "y".into(),
        },
        list: vec![
            ModelA {
                x: 3,
                y: "first".into(),
            },
            ModelA {
                x: 4,
                y: "last".into(),
            },
        ],
    };

    let exclude = Selection::new()
        .with_nested("d", Selection::from(["y"]))
        .with_nested("list", Selection::new().with_index(-1));
    assert_eq!(
        m.to_json_value_with(&EncodeOptions::new().exclude(exclude)).unwrap(),
        json!({"a": 1, "d": {"x": 2}, "list": [{"x": 3, "y": "first"}]})
    );

    let include = Selection::new()
        .with("a")
        .with_nested("list", Selection::new().with_index_nested(1, Selection::from(["y"])));
    assert_eq!(
        m.to_json_value_with(&EncodeOptions::new().include(include)).unwrap(),
        json!({"a": 1, "list": [{"y": "last"}]})
    );
}

// -----------------------------------------------------------------------------
// Output

#[test]
fn one_shot_iterables() {
    let numbers = IterOnce::new(vec![1_u8, 2]);
    assert_eq!(to_value(&numbers).unwrap(), json!([1, 2]));
    assert_eq!(to_value(&numbers).unwrap(), json!([]));
}

#[test]
fn driver_matches_to_string() {
    let value = Outer {
        a: Duration::from_secs(1),
        inner: Inner {
            b: Duration::from_secs(2),
        },
        plain: Vec::new(),
    };

    let through_serde = serde_json::to_value(SerializeDriver::new(&value)).unwrap();
    assert_eq!(through_serde, to_value(&value).unwrap());

    let text: Value = serde_json::from_str(&to_string(&value).unwrap()).unwrap();
    assert_eq!(text, through_serde);
}

#[test]
fn driver_keeps_the_error() {
    let driver = SerializeDriver::new(&Foo);
    let err = serde_json::to_string(&driver).unwrap_err();
    assert!(err.to_string().contains("Object of type Foo"));
    assert!(matches!(driver.take_error(), Some(EncodeError::TypeMismatch { .. })));
}

#[test]
fn pretty_output() {
    let m = ModelA {
        x: 1,
        y: "a".to_string(),
    };
    let options = EncodeOptions::new().indent(4);
    assert_eq!(
        to_string_with(&m, &options).unwrap(),
        "{\n    \"x\": 1,\n    \"y\": \"a\"\n}"
    );
}
