use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use echopair::common::test_utils::{spawn_tcp_test_server, spawn_udp_test_server};
use echopair::common::EchoClient;
use echopair::tcp::TcpEchoClient;
use echopair::udp::UdpEchoClient;
use std::time::Duration;
use tokio::runtime::Runtime;

fn bench_tcp_echo(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("tcp_echo");

    // Message sizes within the single-read buffer
    let sizes = vec![64, 256, 1024];

    for size in sizes {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("round_trip", size), &size, |b, &size| {
            b.to_async(&rt).iter(|| async {
                let (server_handle, addr, shutdown) = spawn_tcp_test_server().await.unwrap();

                // Give server time to start
                tokio::time::sleep(Duration::from_millis(10)).await;

                // The server closes after one exchange, so each iteration reconnects
                let mut client = TcpEchoClient::connect(addr).await.unwrap();
                let data = vec![b'x'; size];

                let response = client.echo(black_box(&data)).await.unwrap();
                assert_eq!(response.len(), data.len());

                let _ = shutdown.send(());
                server_handle.abort();
                response
            });
        });
    }

    group.finish();
}

fn bench_udp_echo(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("udp_echo");

    let sizes = vec![64, 256, 1024];

    for size in sizes {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("round_trip", size), &size, |b, &size| {
            b.to_async(&rt).iter(|| async {
                let (server_handle, addr, shutdown) = spawn_udp_test_server().await.unwrap();

                tokio::time::sleep(Duration::from_millis(10)).await;

                let mut client = UdpEchoClient::connect(addr).await.unwrap();
                let data = vec![b'x'; size];

                let response = client.echo(black_box(&data)).await.unwrap();
                assert_eq!(response.len(), data.len());

                let _ = shutdown.send(());
                server_handle.abort();
                response
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tcp_echo, bench_udp_echo);
criterion_main!(benches);
