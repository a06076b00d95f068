#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

//! Decode and build IPv6 routing extension headers, including the segment
//! routing header (SRv6, routing type 4).
//!
//! The codec itself is two stateless operations on
//! [`RoutingHeader`](ipv6::routing::RoutingHeader): `decode_from_bytes` and
//! `serialize_to`/`prepend_to`. The [`decode`] and [`registry`] modules let a
//! packet decoding pipeline pick the routing decoder by its IP protocol
//! number (43) and chain to the next header.

#[macro_use]
mod macros;

mod traits;
pub use traits::{Buf, PktBuf, PktBufMut};

mod cursors;
pub use cursors::CursorMut;

mod error;
pub use error::{Error, ErrorKind, Result};

pub mod decode;
pub mod ip;
pub mod ipv6;
pub mod registry;
pub mod serialize;
