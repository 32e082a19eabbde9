#[cfg(feature = "chrono")]
crate::impl_encode_opaque!(
    chrono::NaiveDateTime,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::TimeDelta,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
    chrono::DateTime<chrono::Local>,
);

#[cfg(feature = "uuid")]
crate::impl_encode_opaque!(uuid::Uuid);

#[cfg(feature = "decimal")]
crate::impl_encode_opaque!(rust_decimal::Decimal);

#[cfg(feature = "ipnet")]
crate::impl_encode_opaque!(ipnet::IpNet, ipnet::Ipv4Net, ipnet::Ipv6Net);
