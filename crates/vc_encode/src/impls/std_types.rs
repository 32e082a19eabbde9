use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use core::time::Duration;
use std::path::PathBuf;

crate::impl_encode_opaque!(PathBuf, IpAddr, Ipv4Addr, Ipv6Addr, Duration);
