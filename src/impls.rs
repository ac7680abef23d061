/*!
Implementations of the [`value`][crate::value] traits for various primitive
and standard library types
 */

use crate::value::ParsedValue;

macro_rules! from_str {
    ($($type:ident $($(::$path:ident)+)?,)*) => {
        $(
            impl ParsedValue for $type $($(:: $path)+)? {}
        )*
    };
}

from_str! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64,
    bool,
    char,

    std::string::String,
    std::path::PathBuf,
    std::ffi::OsString,

    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::IpAddr,
    std::net::SocketAddrV4,
    std::net::SocketAddrV6,
    std::net::SocketAddr,

    core::num::NonZeroU8,
    core::num::NonZeroU16,
    core::num::NonZeroU32,
    core::num::NonZeroU64,
    core::num::NonZeroUsize,
}
