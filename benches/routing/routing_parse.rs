use criterion::{black_box, criterion_group, criterion_main, Criterion};
use srv6_pkt::decode::{DecodedPacket, NilDecodeFeedback};
use srv6_pkt::ip::IpProtocol;
use srv6_pkt::ipv6::*;

static SRH_BYTES: [u8; 56] = [
    0x29, 0x06, 0x04, 0x02, 0x03, 0x00, 0x00, 0x00, 0xfc, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xfc, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0xfc, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
];

fn decode_header(buf: &[u8]) {
    let header = RoutingHeader::decode(buf, &mut NilDecodeFeedback).unwrap();
    assert!(header.next_header == IpProtocol::IPV6);
    assert!(header.segments().len() == 3);
}

fn decode_through_registry(buf: &[u8]) {
    let (pkt, res) = DecodedPacket::decode(IpProtocol::IPV6_ROUTE, buf);
    assert!(res.is_ok());
    assert!(pkt.layers().len() == 1);
}

pub fn b(c: &mut Criterion) {
    c.bench_function("routing_decode", |b| {
        b.iter(|| decode_header(black_box(&SRH_BYTES[..])))
    });

    c.bench_function("routing_decode_registry", |b| {
        b.iter(|| decode_through_registry(black_box(&SRH_BYTES[..])))
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
