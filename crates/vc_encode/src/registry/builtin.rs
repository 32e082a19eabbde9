use alloc::string::ToString;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use core::time::Duration;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde_json::Value;

use crate::EncodeError;
use crate::format::duration_seconds;
use crate::registry::Encoders;
use crate::types::{Bytes, Color, DirectoryPath, FilePath, SecretBytes, SecretStr};

static BUILTIN: LazyLock<Encoders> = LazyLock::new(|| {
    let mut encoders = Encoders::new();
    register_std(&mut encoders);
    register_domain(&mut encoders);
    #[cfg(feature = "chrono")]
    register_chrono(&mut encoders);
    #[cfg(feature = "uuid")]
    encoders.insert::<uuid::Uuid>(|v| Ok(Value::from(v.hyphenated().to_string())));
    #[cfg(feature = "decimal")]
    encoders.insert::<rust_decimal::Decimal>(|v| {
        let number: serde_json::Number = v.to_string().parse()?;
        Ok(Value::Number(number))
    });
    #[cfg(feature = "ipnet")]
    register_ipnet(&mut encoders);
    log::debug!("built-in encoder table ready: {encoders:?}");
    encoders
});

/// Returns the process-wide table of encoders for well-known types.
///
/// | Type                                        | JSON form                     |
/// |---------------------------------------------|-------------------------------|
/// | `Ipv4Addr`, `Ipv6Addr`, `IpAddr`            | address text                  |
/// | `IpNet`, `Ipv4Net`, `Ipv6Net`               | `address/prefix` text         |
/// | `Uuid`                                      | hyphenated text               |
/// | [`Color`]                                   | CSS name, else hex text       |
/// | [`SecretStr`], [`SecretBytes`]              | `"**********"`, or `""`       |
/// | [`Bytes`]                                   | UTF-8 text                    |
/// | `PathBuf`, [`FilePath`], [`DirectoryPath`]  | normalized path text          |
/// | `NaiveDateTime`, `DateTime<Tz>`             | ISO-8601 text                 |
/// | `NaiveDate`, `NaiveTime`                    | ISO-8601 text                 |
/// | `TimeDelta`, `Duration`                     | total seconds as a number     |
/// | `Decimal`                                   | number with the decimal digits|
///
/// The table is built on first use and never changes.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use vc_encode::registry::builtin_encoders;
///
/// let out = builtin_encoders().encode(&Ipv4Addr::new(192, 168, 0, 1));
/// assert_eq!(out.unwrap().unwrap(), "192.168.0.1");
/// ```
#[inline]
pub fn builtin_encoders() -> &'static Encoders {
    &BUILTIN
}

fn display_text(value: &impl ToString) -> Result<Value, EncodeError> {
    Ok(Value::String(value.to_string()))
}

/// Drops trailing separators and `.` components. An empty path is `.`.
fn path_text(path: &Path, type_name: &str) -> Result<Value, EncodeError> {
    let normalized: PathBuf = path.components().collect();
    if normalized.as_os_str().is_empty() {
        return Ok(Value::from("."));
    }
    match normalized.to_str() {
        Some(text) => Ok(Value::from(text)),
        None => Err(EncodeError::invalid_text(type_name)),
    }
}

fn register_std(encoders: &mut Encoders) {
    encoders
        .insert::<Ipv4Addr>(display_text)
        .insert::<Ipv6Addr>(display_text)
        .insert::<IpAddr>(display_text)
        .insert::<PathBuf>(|v| path_text(v, "PathBuf"))
        .insert::<Duration>(|v| Ok(Value::from(duration_seconds(v))));
}

fn register_domain(encoders: &mut Encoders) {
    encoders
        .insert::<Color>(display_text)
        .insert::<SecretStr>(|v| Ok(Value::from(v.masked())))
        .insert::<SecretBytes>(|v| Ok(Value::from(v.masked())))
        .insert::<Bytes>(|v| match core::str::from_utf8(v.as_bytes()) {
            Ok(text) => Ok(Value::from(text)),
            Err(_) => Err(EncodeError::invalid_text("Bytes")),
        })
        .insert::<FilePath>(|v| path_text(v.as_path(), "FilePath"))
        .insert::<DirectoryPath>(|v| path_text(v.as_path(), "DirectoryPath"));
}

#[cfg(feature = "chrono")]
fn register_chrono(encoders: &mut Encoders) {
    use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

    use crate::format::{
        date_isoformat, datetime_isoformat, datetime_tz_isoformat, time_isoformat,
        timedelta_seconds,
    };

    encoders
        .insert::<NaiveDateTime>(|v| Ok(Value::from(datetime_isoformat(v))))
        .insert::<DateTime<Utc>>(|v| Ok(Value::from(datetime_tz_isoformat(v))))
        .insert::<DateTime<FixedOffset>>(|v| Ok(Value::from(datetime_tz_isoformat(v))))
        .insert::<DateTime<Local>>(|v| Ok(Value::from(datetime_tz_isoformat(v))))
        .insert::<NaiveDate>(|v| Ok(Value::from(date_isoformat(v))))
        .insert::<NaiveTime>(|v| Ok(Value::from(time_isoformat(v))))
        .insert::<TimeDelta>(|v| Ok(Value::from(timedelta_seconds(v))));
}

#[cfg(feature = "ipnet")]
fn register_ipnet(encoders: &mut Encoders) {
    encoders
        .insert::<ipnet::IpNet>(display_text)
        .insert::<ipnet::Ipv4Net>(display_text)
        .insert::<ipnet::Ipv6Net>(display_text);
}

#[cfg(test)]
mod tests {
    use core::net::{Ipv4Addr, Ipv6Addr};
    use core::time::Duration;
    use std::path::PathBuf;

    use serde_json::{Value, json};

    use super::builtin_encoders;
    use crate::Encode;
    use crate::types::{Bytes, Color, SecretBytes, SecretStr};

    fn encode(value: &dyn Encode) -> Value {
        builtin_encoders().encode(value).unwrap().unwrap()
    }

    #[test]
    fn std_types() {
        assert_eq!(encode(&Ipv4Addr::new(192, 168, 0, 1)), json!("192.168.0.1"));
        assert_eq!(encode(&"::1:0:1".parse::<Ipv6Addr>().unwrap()), json!("::1:0:1"));
        assert_eq!(encode(&Duration::from_secs(123)), json!(123.0));
        assert_eq!(encode(&PathBuf::from("/path/test/example/")), json!("/path/test/example"));
        assert_eq!(encode(&PathBuf::from("a/./b")), json!("a/b"));
        assert_eq!(encode(&PathBuf::new()), json!("."));
    }

    #[test]
    fn domain_types() {
        assert_eq!(encode(&"#000".parse::<Color>().unwrap()), json!("black"));
        assert_eq!(encode(&Color::from_rgb(1, 12, 123)), json!("#010c7b"));
        assert_eq!(encode(&SecretStr::new("abcd")), json!("**********"));
        assert_eq!(encode(&SecretStr::new("")), json!(""));
        assert_eq!(encode(&SecretBytes::new(b"xyz".to_vec())), json!("**********"));
        assert_eq!(encode(&SecretBytes::new(Vec::new())), json!(""));
        assert_eq!(encode(&Bytes::from("this is bytes")), json!("this is bytes"));
    }

    #[test]
    fn invalid_bytes() {
        let err = builtin_encoders()
            .encode(&Bytes::new(vec![0xff, 0xfe]))
            .unwrap()
            .unwrap_err();
        assert_eq!(err.to_string(), "Bytes is not valid UTF-8 text");
    }

    #[test]
    fn unknown_types_are_absent() {
        assert!(builtin_encoders().encode(&1_u8).is_none());
        assert!(builtin_encoders().encode(&String::from("x")).is_none());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_types() {
        use chrono::{NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

        let naive = NaiveDate::from_ymd_opt(2032, 1, 1)
            .unwrap()
            .and_hms_opt(1, 1, 0)
            .unwrap();
        assert_eq!(encode(&naive), json!("2032-01-01T01:01:00"));
        assert_eq!(
            encode(&Utc.with_ymd_and_hms(2032, 1, 1, 1, 1, 0).unwrap()),
            json!("2032-01-01T01:01:00+00:00")
        );
        assert_eq!(
            encode(&NaiveTime::from_hms_opt(12, 34, 56).unwrap()),
            json!("12:34:56")
        );
        let delta = TimeDelta::days(12) + TimeDelta::seconds(34) + TimeDelta::microseconds(56);
        assert_eq!(encode(&delta), json!(1036834.000056));
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn uuid() {
        let id: uuid::Uuid = "ebcdab58-6eb8-46fb-a190-d07a33e9eac8".parse().unwrap();
        assert_eq!(encode(&id), json!("ebcdab58-6eb8-46fb-a190-d07a33e9eac8"));
    }

    #[cfg(feature = "decimal")]
    #[test]
    fn decimal() {
        let value: rust_decimal::Decimal = "12.34".parse().unwrap();
        assert_eq!(encode(&value).to_string(), "12.34");
    }

    #[cfg(feature = "ipnet")]
    #[test]
    fn ipnet() {
        let net: ipnet::IpNet = "2001:db00::/120".parse().unwrap();
        assert_eq!(encode(&net), json!("2001:db00::/120"));
    }
}
