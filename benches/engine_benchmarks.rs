//! Benchmarks for evaluation, move ordering and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_analysis::board::{search_position, Board, SearchConfig};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn board(fen: &str) -> Board {
    Board::from_fen(fen).expect("valid benchmark fen")
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, fen) in [("middlegame", MIDDLEGAME), ("kiwipete", KIWIPETE)] {
        let position = board(fen);
        group.bench_function(name, |b| b.iter(|| black_box(position.evaluate())));
    }

    group.finish();
}

fn bench_order_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_moves");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.order_moves()))
    });

    let kiwipete = board(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.order_moves()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            let config = SearchConfig::depth(depth);
            b.iter(|| {
                let mut position = board(MIDDLEGAME);
                search_position(&mut position, &config)
            })
        });
    }

    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            let config = SearchConfig::depth(depth);
            b.iter(|| {
                let mut position = board(KIWIPETE);
                search_position(&mut position, &config)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_order_moves, bench_search);
criterion_main!(benches);
