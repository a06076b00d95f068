//! The contract between header decoders and the pipeline that drives them.
//!
//! A pipeline hands each [`Decoder`] the bytes of one header together with a
//! [`PacketBuilder`]. The decoder adds the layer it produced to the builder,
//! then asks the builder to continue with the protocol named by the header's
//! next-header field.

use crate::ip::IpProtocol;
use crate::ipv6::RoutingHeader;
use crate::registry::DecoderRegistry;
use crate::Result;

/// Receives the truncation signal raised while decoding.
pub trait DecodeFeedback {
    /// Mark the input as shorter than the format requires.
    fn set_truncated(&mut self);
}

/// A [`DecodeFeedback`] that discards the signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NilDecodeFeedback;

impl DecodeFeedback for NilDecodeFeedback {
    #[inline]
    fn set_truncated(&mut self) {}
}

/// A decoded protocol layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Layer {
    /// An IPv6 routing header.
    Ipv6Routing(RoutingHeader),
}

/// Collects layers as a packet is decoded.
pub trait PacketBuilder: DecodeFeedback {
    /// Record a decoded (or partially decoded) layer.
    fn add_layer(&mut self, layer: Layer);

    /// Continue decoding `payload` as `next_header`.
    fn next_decoder(&mut self, next_header: IpProtocol, payload: &[u8]) -> Result<()>;
}

/// Decodes one protocol header.
pub trait Decoder: Sync {
    /// Decode the header at the start of `data`, reporting layers and the
    /// next protocol to `builder`.
    fn decode(&self, data: &[u8], builder: &mut dyn PacketBuilder) -> Result<()>;
}

/// A [`PacketBuilder`] that chains decoders through a [`DecoderRegistry`].
///
/// Decoding stops at the first protocol without a registered decoder, or
/// when a header leaves no payload. The protocol and bytes that were left
/// undecoded are kept.
#[derive(Debug)]
pub struct DecodedPacket<'r> {
    registry: &'r DecoderRegistry,
    layers: Vec<Layer>,
    truncated: bool,
    next_header: Option<IpProtocol>,
    payload: Vec<u8>,
}

impl DecodedPacket<'static> {
    /// Decode `data` as `first` using the process-wide registry.
    ///
    /// The packet is returned even on failure, holding every layer that was
    /// added before the error.
    pub fn decode(first: IpProtocol, data: &[u8]) -> (Self, Result<()>) {
        let mut pkt = DecodedPacket::new(crate::registry::global());
        let res = pkt.decode_from(first, data);
        (pkt, res)
    }
}

impl<'r> DecodedPacket<'r> {
    /// An empty packet that resolves decoders through `registry`.
    pub fn new(registry: &'r DecoderRegistry) -> Self {
        Self {
            registry,
            layers: Vec::new(),
            truncated: false,
            next_header: None,
            payload: Vec::new(),
        }
    }

    /// Decode `data` as `first`, appending to the layers already collected.
    pub fn decode_from(&mut self, first: IpProtocol, data: &[u8]) -> Result<()> {
        let registry = self.registry;
        registry.decode(first, data, self)
    }

    /// The layers decoded so far, outermost first.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Whether any decoder reported truncated input.
    #[inline]
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    /// The protocol that was named but not decoded.
    #[inline]
    pub fn next_header(&self) -> Option<IpProtocol> {
        self.next_header
    }

    /// The bytes that were left undecoded.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Iterate over the routing headers among the decoded layers.
    pub fn routing_headers(&self) -> impl Iterator<Item = &RoutingHeader> {
        self.layers.iter().map(|layer| match layer {
            Layer::Ipv6Routing(header) => header,
        })
    }
}

impl<'r> DecodeFeedback for DecodedPacket<'r> {
    #[inline]
    fn set_truncated(&mut self) {
        self.truncated = true;
    }
}

impl<'r> PacketBuilder for DecodedPacket<'r> {
    fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    fn next_decoder(&mut self, next_header: IpProtocol, payload: &[u8]) -> Result<()> {
        self.next_header = Some(next_header);
        self.payload.clear();

        if payload.is_empty() {
            return Ok(());
        }
        match self.registry.lookup(next_header) {
            Some(decoder) => {
                self.next_header = None;
                decoder.decode(payload, self)
            }
            None => {
                log::trace!(
                    "no decoder for protocol {}, keeping {} octets as payload",
                    next_header.raw(),
                    payload.len()
                );
                self.payload.extend_from_slice(payload);
                Ok(())
            }
        }
    }
}
