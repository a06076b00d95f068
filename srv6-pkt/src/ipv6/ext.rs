//! The prefix shared by all IPv6 extension headers.

use crate::decode::DecodeFeedback;
use crate::ip::IpProtocol;
use crate::{ErrorKind, Result};

/// Octets needed to read the next header and header length fields.
pub const IPV6_EXT_BASE_LEN: usize = 2;

/// The two octets shared by every IPv6 extension header, together with the
/// split of the input into header contents and payload.
#[derive(Debug, Clone, Copy)]
pub struct Ipv6ExtensionBase<'a> {
    next_header: IpProtocol,
    header_len: u8,
    actual_len: usize,
    contents: &'a [u8],
    payload: &'a [u8],
}

impl<'a> Ipv6ExtensionBase<'a> {
    /// Parse the common prefix of an extension header.
    ///
    /// A buffer too short to hold the prefix marks `df` as truncated. A
    /// buffer shorter than the length the prefix announces is rejected
    /// without marking it.
    pub fn parse<F: DecodeFeedback + ?Sized>(data: &'a [u8], df: &mut F) -> Result<Self> {
        if data.len() < IPV6_EXT_BASE_LEN {
            df.set_truncated();
            return Err(debug_err!(
                ErrorKind::TruncatedInput,
                "ipv6 extension header: {} octets, need at least {}",
                data.len(),
                IPV6_EXT_BASE_LEN
            ));
        }

        let header_len = data[1];
        let actual_len = usize::from(header_len) * 8 + 8;
        if data.len() < actual_len {
            return Err(debug_err!(
                ErrorKind::LengthMismatch,
                "ipv6 extension header: {} octets, header length announces {}",
                data.len(),
                actual_len
            ));
        }

        Ok(Self {
            next_header: IpProtocol::from(data[0]),
            header_len,
            actual_len,
            contents: &data[..actual_len],
            payload: &data[actual_len..],
        })
    }

    /// Protocol of the header that follows.
    #[inline]
    pub fn next_header(&self) -> IpProtocol {
        self.next_header
    }

    /// The raw header length field, in 8-octet units past the first 8.
    #[inline]
    pub fn header_len(&self) -> u8 {
        self.header_len
    }

    /// Total length of the extension header in octets.
    #[inline]
    pub fn actual_len(&self) -> usize {
        self.actual_len
    }

    /// The octets of the extension header.
    #[inline]
    pub fn contents(&self) -> &'a [u8] {
        self.contents
    }

    /// The octets after the extension header.
    #[inline]
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::NilDecodeFeedback;

    #[derive(Default)]
    struct Feedback {
        truncated: bool,
    }

    impl DecodeFeedback for Feedback {
        fn set_truncated(&mut self) {
            self.truncated = true;
        }
    }

    #[test]
    fn split_contents_and_payload() {
        let data = [17, 1, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 0xaa, 0xbb];
        let base = Ipv6ExtensionBase::parse(&data[..], &mut NilDecodeFeedback).unwrap();

        assert_eq!(base.next_header(), IpProtocol::UDP);
        assert_eq!(base.header_len(), 1);
        assert_eq!(base.actual_len(), 16);
        assert_eq!(base.contents(), &data[..16]);
        assert_eq!(base.payload(), &[0xaa, 0xbb][..]);
    }

    #[test]
    fn short_prefix_marks_truncated() {
        for len in 0..2 {
            let data = [6u8; 2];
            let mut df = Feedback::default();
            let err = Ipv6ExtensionBase::parse(&data[..len], &mut df).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TruncatedInput);
            assert!(df.truncated);
        }
    }

    #[test]
    fn announced_length_exceeds_buffer() {
        let data = [6, 2, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut df = Feedback::default();
        let err = Ipv6ExtensionBase::parse(&data[..], &mut df).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);
        assert!(!df.truncated);
    }
}
