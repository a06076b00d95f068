//! IP protocol numbers carried in the next-header field.

enum_sim! {
    /// An enum-like type for the protocol numbers that may follow an IPv6
    /// header or extension header.
    pub struct IpProtocol (u8) {
        /// IPv6 Hop-by-Hop options.
        HOPOPT = 0,

        /// ICMP.
        ICMP = 1,

        /// IPv4 encapsulation.
        IPV4 = 4,

        /// TCP.
        TCP = 6,

        /// UDP.
        UDP = 17,

        /// IPv6 encapsulation.
        IPV6 = 41,

        /// IPv6 Routing header.
        IPV6_ROUTE = 43,

        /// IPv6 Fragment header.
        IPV6_FRAG = 44,

        /// Encapsulating Security Payload.
        ESP = 50,

        /// Authentication Header.
        AH = 51,

        /// ICMPv6.
        ICMPV6 = 58,

        /// No next header.
        IPV6_NO_NXT = 59,

        /// IPv6 Destination options.
        IPV6_OPTS = 60,

        /// Ethernet, used by SRv6 L2 encapsulation.
        ETHERNET = 143,
    }
}
