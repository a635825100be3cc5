use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use opcua::crypto::SecurityPolicy;
use opcua::protocol::services::{GetEndpointsRequest, RequestHeader, ServiceMessage};
use opcua::protocol::{DateTime, NodeId};
use opcua::{open_chunk, seal_chunk};

fn create_test_body(size: usize) -> Vec<u8> {
    (0..size).map(|i| i as u8).collect()
}

// Benchmark: symmetric chunk protection per policy
fn bench_seal_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("seal_chunk");

    for size in [256usize, 4096, 65536].iter() {
        let body = create_test_body(*size);
        let bundle = SecurityPolicy::Basic256Sha256
            .symmetric(&[0x01; 32], &[0x02; 32])
            .expect("Failed to build bundle");
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let _sealed = seal_chunk(&bundle, black_box(&body)).expect("Failed to seal");
            });
        });
    }

    group.finish();
}

// Benchmark: seal + open exchange between two directions
fn bench_seal_open_exchange(c: &mut Criterion) {
    let body = create_test_body(4096);
    let client = SecurityPolicy::Basic256Sha256
        .symmetric(&[0x01; 32], &[0x02; 32])
        .expect("Failed to build bundle");
    let server = SecurityPolicy::Basic256Sha256
        .symmetric(&[0x02; 32], &[0x01; 32])
        .expect("Failed to build bundle");

    c.bench_function("seal_open_exchange_4k", |b| {
        b.iter(|| {
            let sealed = seal_chunk(&client, black_box(&body)).expect("Failed to seal");
            let opened = open_chunk(&server, &sealed).expect("Failed to open");
            black_box(opened);
        });
    });
}

// Benchmark: service message encoding
fn bench_message_encode(c: &mut Criterion) {
    let message = ServiceMessage::GetEndpointsRequest(GetEndpointsRequest {
        request_header: RequestHeader::new(NodeId::null(), DateTime::from_ticks(1), 1),
        endpoint_url: Some("opc.tcp://plc.example.com:4840".to_string()),
        locale_ids: Some(vec!["en".to_string()]),
        profile_uris: None,
    });

    c.bench_function("encode_get_endpoints_request", |b| {
        b.iter(|| {
            let _bytes = black_box(&message).encode_message().expect("Failed to encode");
        });
    });
}

criterion_group!(
    benches,
    bench_seal_chunk,
    bench_seal_open_exchange,
    bench_message_encode
);
criterion_main!(benches);
