//! The IPv6 routing header (RFC 8200 section 4.4) and its segment routing
//! variant (RFC 8754).

use std::net::Ipv6Addr;

use byteorder::{ByteOrder, NetworkEndian};
use bytes::BytesMut;

use super::ext::Ipv6ExtensionBase;
use crate::decode::{DecodeFeedback, Decoder, Layer, PacketBuilder};
use crate::ip::IpProtocol;
use crate::serialize::SerializeOptions;
use crate::{ErrorKind, PktBufMut, Result};

/// Length of the fixed part of a routing header.
pub const ROUTING_HEADER_FIXED_LEN: usize = 8;

/// Length of one segment list entry.
pub const SEGMENT_LEN: usize = 16;

// The header length field counts 8-octet units, two per segment.
const MAX_FIXED_SEGMENTS: usize = (u8::MAX / 2) as usize;

enum_sim! {
    /// The routing type field of the routing header.
    pub struct RoutingType (u8) {
        /// Type 0 source route (deprecated by RFC 5095).
        TYPE0 = 0,

        /// Segment routing header (RFC 8754).
        SRH = 4,
    }
}

/// The type-specific fields of a segment routing header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SegmentRouting {
    /// Index of the last entry of the segment list.
    pub last_entry: u8,
    /// Flags, copied verbatim.
    pub flags: u8,
    /// Tag, copied verbatim.
    pub tag: u16,
    /// The segment list in wire order.
    pub segments: Vec<Ipv6Addr>,
}

impl SegmentRouting {
    /// A segment routing header carrying `segments`, with `last_entry`
    /// pointing at the final one.
    ///
    /// `last_entry` saturates at 255 for lists longer than 256 entries. An
    /// empty list wraps to 255, the value the serializer writes for it.
    pub fn new(segments: Vec<Ipv6Addr>) -> Self {
        Self {
            last_entry: u8::try_from(segments.len()).map_or(u8::MAX, |n| n.wrapping_sub(1)),
            flags: 0,
            tag: 0,
            segments,
        }
    }
}

/// The part of a routing header selected by its routing type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingData {
    /// Routing type 0. Only the four reserved octets are kept.
    GenericSourceRoute {
        /// Octets 4 to 7, copied verbatim.
        reserved: [u8; 4],
    },
    /// Routing type 4.
    SegmentRouting(SegmentRouting),
    /// Any other routing type.
    ///
    /// Decoding never succeeds with this variant; it records the type of a
    /// rejected header. Serializing it writes the first four octets and fails.
    Unsupported(RoutingType),
}

impl RoutingData {
    /// The routing type this variant is encoded with.
    #[inline]
    pub fn routing_type(&self) -> RoutingType {
        match self {
            RoutingData::GenericSourceRoute { .. } => RoutingType::TYPE0,
            RoutingData::SegmentRouting(_) => RoutingType::SRH,
            RoutingData::Unsupported(t) => *t,
        }
    }
}

/// An owned IPv6 routing header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingHeader {
    /// Protocol of the header that follows.
    pub next_header: IpProtocol,
    /// Header length in 8-octet units, not counting the first 8 octets.
    pub header_len: u8,
    /// Number of route segments still to be visited.
    pub segments_left: u8,
    /// Routing type and the fields that depend on it.
    pub data: RoutingData,
    actual_len: usize,
}

impl Default for RoutingHeader {
    fn default() -> Self {
        Self {
            next_header: IpProtocol::HOPOPT,
            header_len: 0,
            segments_left: 0,
            data: RoutingData::GenericSourceRoute { reserved: [0; 4] },
            actual_len: 0,
        }
    }
}

impl RoutingHeader {
    /// A segment routing header carrying `segments`.
    ///
    /// The header length is left at zero; serialize with
    /// [`SerializeOptions::fix_lengths`] to fill it in.
    pub fn segment_routing(next_header: IpProtocol, segments: Vec<Ipv6Addr>) -> Self {
        Self {
            next_header,
            data: RoutingData::SegmentRouting(SegmentRouting::new(segments)),
            ..Default::default()
        }
    }

    /// Decode a header from the start of `data`.
    pub fn decode<F: DecodeFeedback + ?Sized>(data: &[u8], df: &mut F) -> Result<Self> {
        let mut header = Self::default();
        header.decode_from_bytes(data, df)?;
        Ok(header)
    }

    /// Decode `data` into `self`.
    ///
    /// `data` must hold exactly one routing header. On failure `self` keeps
    /// whatever fields were read before the error.
    pub fn decode_from_bytes<F: DecodeFeedback + ?Sized>(
        &mut self,
        data: &[u8],
        df: &mut F,
    ) -> Result<()> {
        let base = Ipv6ExtensionBase::parse(data, df)?;
        self.next_header = base.next_header();
        self.header_len = base.header_len();
        self.actual_len = base.actual_len();

        if data.len() < ROUTING_HEADER_FIXED_LEN {
            return Err(debug_err!(
                ErrorKind::TruncatedInput,
                "ipv6 routing header: {} octets, need at least {}",
                data.len(),
                ROUTING_HEADER_FIXED_LEN
            ));
        }
        self.next_header = IpProtocol::from(data[0]);
        self.header_len = data[1];
        let routing_type = RoutingType::from(data[2]);
        self.segments_left = data[3];

        let trailing_len = data.len() - ROUTING_HEADER_FIXED_LEN;
        if trailing_len != usize::from(self.header_len) * 8 {
            return Err(debug_err!(
                ErrorKind::LengthMismatch,
                "ipv6 routing header: {} octets after the fixed part, header length announces {}",
                trailing_len,
                usize::from(self.header_len) * 8
            ));
        }

        match routing_type {
            RoutingType::TYPE0 => {
                let mut reserved = [0; 4];
                reserved.copy_from_slice(&data[4..8]);
                self.data = RoutingData::GenericSourceRoute { reserved };
            }
            RoutingType::SRH => {
                let mut sr = SegmentRouting {
                    last_entry: data[4],
                    flags: data[5],
                    tag: NetworkEndian::read_u16(&data[6..8]),
                    segments: Vec::new(),
                };

                // The segment list is read with `last_entry` entries.
                let list_len = usize::from(sr.last_entry) * SEGMENT_LEN;
                if trailing_len < list_len {
                    self.data = RoutingData::SegmentRouting(sr);
                    return Err(debug_err!(
                        ErrorKind::TruncatedInput,
                        "ipv6 routing header: segment list needs {} octets, {} available",
                        list_len,
                        trailing_len
                    ));
                }
                sr.segments = data[ROUTING_HEADER_FIXED_LEN..ROUTING_HEADER_FIXED_LEN + list_len]
                    .chunks_exact(SEGMENT_LEN)
                    .map(|chunk| {
                        let mut octets = [0; SEGMENT_LEN];
                        octets.copy_from_slice(chunk);
                        Ipv6Addr::from(octets)
                    })
                    .collect();
                self.data = RoutingData::SegmentRouting(sr);
            }
            _ => {
                self.data = RoutingData::Unsupported(routing_type);
                return Err(debug_err!(
                    ErrorKind::UnsupportedRoutingType(routing_type.raw()),
                    "ipv6 routing header: routing type {} not supported",
                    routing_type.raw()
                ));
            }
        }

        Ok(())
    }

    /// The routing type of this header.
    #[inline]
    pub fn routing_type(&self) -> RoutingType {
        self.data.routing_type()
    }

    /// The segment list, empty unless this is a segment routing header.
    #[inline]
    pub fn segments(&self) -> &[Ipv6Addr] {
        match &self.data {
            RoutingData::SegmentRouting(sr) => &sr.segments,
            _ => &[],
        }
    }

    /// The total octet length announced by the header length field, as
    /// accepted by the extension base parser during the last decode.
    ///
    /// It is set before the routing header's own checks run, so a header
    /// rejected by those checks keeps it. Zero for a header that was built
    /// rather than decoded, or whose decode failed in the base parser.
    #[inline]
    pub fn actual_len(&self) -> usize {
        self.actual_len
    }

    /// Number of octets the serializers produce for this header.
    #[inline]
    pub fn wire_len(&self) -> usize {
        ROUTING_HEADER_FIXED_LEN + SEGMENT_LEN * self.segments().len()
    }

    /// Write the header into `out`, which must be exactly
    /// [`wire_len`](Self::wire_len) octets long.
    ///
    /// With `fix_lengths` set, `header_len` becomes twice the segment count
    /// for every routing type, and a segment routing header also gets
    /// `last_entry` set to the segment count minus one.
    pub fn write_to(&mut self, out: &mut [u8], opts: SerializeOptions) -> Result<()> {
        let wire_len = self.wire_len();
        if out.len() != wire_len {
            return Err(debug_err!(
                ErrorKind::LengthMismatch,
                "ipv6 routing header: output region is {} octets, header needs {}",
                out.len(),
                wire_len
            ));
        }

        if opts.fix_lengths {
            let count = self.segments().len();
            if count > MAX_FIXED_SEGMENTS {
                return Err(debug_err!(
                    ErrorKind::LengthMismatch,
                    "ipv6 routing header: {} segments do not fit the header length field",
                    count
                ));
            }
            self.header_len = (count * 2) as u8;
            if let RoutingData::SegmentRouting(sr) = &mut self.data {
                sr.last_entry = (count as u8).wrapping_sub(1);
            }
        }

        out[0] = self.next_header.into();
        out[1] = self.header_len;
        out[2] = self.routing_type().into();
        out[3] = self.segments_left;

        match &self.data {
            RoutingData::GenericSourceRoute { reserved } => {
                out[4..8].copy_from_slice(reserved);
            }
            RoutingData::SegmentRouting(sr) => {
                out[4] = sr.last_entry;
                out[5] = sr.flags;
                NetworkEndian::write_u16(&mut out[6..8], sr.tag);
                for (slot, addr) in out[ROUTING_HEADER_FIXED_LEN..]
                    .chunks_exact_mut(SEGMENT_LEN)
                    .zip(sr.segments.iter())
                {
                    slot.copy_from_slice(&addr.octets());
                }
            }
            RoutingData::Unsupported(t) => {
                return Err(debug_err!(
                    ErrorKind::UnsupportedRoutingType(t.raw()),
                    "ipv6 routing header: routing type {} not supported",
                    t.raw()
                ));
            }
        }

        Ok(())
    }

    /// Append the header to the end of `buf`.
    ///
    /// The region is appended before any field is written, so on failure
    /// `buf` still grows by [`wire_len`](Self::wire_len) octets.
    pub fn serialize_to(&mut self, buf: &mut BytesMut, opts: SerializeOptions) -> Result<()> {
        let start = buf.len();
        buf.resize(start + self.wire_len(), 0);
        self.write_to(&mut buf[start..], opts)
    }

    /// Prepend the header in front of the current window of `buf`.
    pub fn prepend_to<B: PktBufMut>(&mut self, buf: &mut B, opts: SerializeOptions) -> Result<()> {
        let wire_len = self.wire_len();
        if buf.chunk_headroom() < wire_len {
            return Err(debug_err!(
                ErrorKind::InsufficientHeadroom,
                "ipv6 routing header: needs {} octets of headroom, {} available",
                wire_len,
                buf.chunk_headroom()
            ));
        }
        buf.move_back(wire_len);
        self.write_to(&mut buf.chunk_mut()[..wire_len], opts)
    }
}

/// The [`Decoder`] registered for [`IpProtocol::IPV6_ROUTE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutingDecoder;

impl Decoder for RoutingDecoder {
    fn decode(&self, data: &[u8], builder: &mut dyn PacketBuilder) -> Result<()> {
        let mut header = RoutingHeader::default();
        let res = header.decode_from_bytes(data, &mut *builder);
        let next_header = header.next_header;
        let payload_start = header.actual_len();

        // The layer is recorded even when decoding failed.
        builder.add_layer(Layer::Ipv6Routing(header));
        res?;

        builder.next_decoder(next_header, &data[payload_start..])
    }
}
