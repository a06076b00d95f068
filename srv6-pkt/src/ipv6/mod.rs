//! IPv6 extension headers.

pub mod ext;
pub use ext::{Ipv6ExtensionBase, IPV6_EXT_BASE_LEN};

pub mod routing;
pub use routing::{
    RoutingData, RoutingDecoder, RoutingHeader, RoutingType, SegmentRouting,
    ROUTING_HEADER_FIXED_LEN, SEGMENT_LEN,
};
