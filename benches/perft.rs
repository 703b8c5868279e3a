#[macro_use]
extern crate criterion;
extern crate caissa;

use criterion::{black_box, Criterion};
use caissa::Position;
use caissa::utils::perft;


struct BenchCase {
    name: &'static str,
    fen: &'static str,
    depth: usize,
    expected_nodes: u64,
}

const CASES: &'static [BenchCase] =
    &[BenchCase {
          name: "starting_position",
          fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
          depth: 4,
          expected_nodes: 197_281,
      },
      BenchCase {
          name: "kiwipete",
          fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
          depth: 3,
          expected_nodes: 97_862,
      },
      BenchCase {
          name: "rook_endgame",
          fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
          depth: 4,
          expected_nodes: 43_238,
      }];


fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(20);

    for case in CASES {
        let template = Position::from_fen(case.fen).expect("benchmark FEN must parse");

        // Correctness guard before benchmarking.
        let mut warmup = template.clone();
        assert_eq!(perft(&mut warmup, case.depth), case.expected_nodes);

        group.bench_function(format!("{}_d{}", case.name, case.depth), |b| {
            b.iter(|| {
                let mut position = template.clone();
                let nodes = perft(black_box(&mut position), black_box(case.depth));
                assert_eq!(nodes, case.expected_nodes);
                nodes
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
