use std::net::Ipv6Addr;

use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use srv6_pkt::ip::IpProtocol;
use srv6_pkt::ipv6::*;
use srv6_pkt::serialize::SerializeOptions;
use srv6_pkt::{Buf, CursorMut};

fn segments() -> Vec<Ipv6Addr> {
    (1..=3u16)
        .map(|i| Ipv6Addr::new(0xfc00, 0, 0, 0, 0, 0, 0, i))
        .collect()
}

fn append_build(header: &mut RoutingHeader, buf: &mut BytesMut) {
    buf.clear();
    header
        .serialize_to(buf, SerializeOptions::new().with_fix_lengths(true))
        .unwrap();
}

fn prepend_build(header: &mut RoutingHeader, buf: &mut [u8], payload_len: usize) {
    let wire_len = header.wire_len();
    let mut cursor = CursorMut::new(&mut buf[..wire_len + payload_len]);
    cursor.advance(wire_len);
    header
        .prepend_to(&mut cursor, SerializeOptions::new().with_fix_lengths(true))
        .unwrap();
}

pub fn b(c: &mut Criterion) {
    c.bench_function("routing_build_append", |b| {
        let mut header = RoutingHeader::segment_routing(IpProtocol::UDP, segments());
        let mut buf = BytesMut::with_capacity(128);
        b.iter(|| append_build(black_box(&mut header), black_box(&mut buf)))
    });

    c.bench_function("routing_build_prepend", |b| {
        let mut header = RoutingHeader::segment_routing(IpProtocol::UDP, segments());
        let mut buf = [0; 200];
        b.iter(|| prepend_build(black_box(&mut header), black_box(&mut buf[..]), black_box(66)))
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
