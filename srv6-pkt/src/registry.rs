//! Lookup of header decoders by IP protocol number.

use std::fmt;

use once_cell::sync::Lazy;

use crate::decode::{Decoder, PacketBuilder};
use crate::ip::IpProtocol;
use crate::ipv6::RoutingDecoder;
use crate::{ErrorKind, Result};

static ROUTING_DECODER: RoutingDecoder = RoutingDecoder;

static GLOBAL: Lazy<DecoderRegistry> = Lazy::new(DecoderRegistry::with_defaults);

/// The process-wide registry.
///
/// It is built on first use and has the routing header decoder registered
/// under [`IpProtocol::IPV6_ROUTE`].
pub fn global() -> &'static DecoderRegistry {
    &GLOBAL
}

/// A table mapping each of the 256 protocol numbers to at most one decoder.
#[derive(Clone)]
pub struct DecoderRegistry {
    decoders: [Option<&'static dyn Decoder>; 256],
}

impl DecoderRegistry {
    /// A registry with no decoders.
    pub fn new() -> Self {
        Self {
            decoders: [None; 256],
        }
    }

    /// A registry holding the decoders provided by this crate.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(IpProtocol::IPV6_ROUTE, &ROUTING_DECODER);
        registry
    }

    /// Register `decoder` for `protocol`, replacing and returning any decoder
    /// registered before.
    pub fn register(
        &mut self,
        protocol: IpProtocol,
        decoder: &'static dyn Decoder,
    ) -> Option<&'static dyn Decoder> {
        self.decoders[usize::from(protocol.raw())].replace(decoder)
    }

    /// Remove the decoder registered for `protocol`.
    pub fn unregister(&mut self, protocol: IpProtocol) -> Option<&'static dyn Decoder> {
        self.decoders[usize::from(protocol.raw())].take()
    }

    /// The decoder registered for `protocol`.
    #[inline]
    pub fn lookup(&self, protocol: IpProtocol) -> Option<&'static dyn Decoder> {
        self.decoders[usize::from(protocol.raw())]
    }

    /// Decode `data` with the decoder registered for `protocol`.
    pub fn decode(
        &self,
        protocol: IpProtocol,
        data: &[u8],
        builder: &mut dyn PacketBuilder,
    ) -> Result<()> {
        match self.lookup(protocol) {
            Some(decoder) => {
                log::trace!(
                    "decoding {} octets as protocol {}",
                    data.len(),
                    protocol.raw()
                );
                decoder.decode(data, builder)
            }
            None => Err(debug_err!(
                ErrorKind::UnknownProtocol(protocol.raw()),
                "no decoder registered for protocol {}",
                protocol.raw()
            )),
        }
    }

    fn registered(&self) -> impl Iterator<Item = u8> + '_ {
        self.decoders
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_some())
            .map(|(proto, _)| proto as u8)
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("protocols", &self.registered().collect::<Vec<_>>())
            .finish()
    }
}
