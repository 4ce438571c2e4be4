use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use duel_chess::game_state::game_state::GameState;
use duel_chess::search::board_scoring::{MaterialScorer, StandardScorer, MATE_SCORE};
use duel_chess::search::negamax::select_move;

const MIDDLEGAME_FEN: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3";
const MATE_IN_ONE_FEN: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";

fn bench_search(c: &mut Criterion) {
    // Correctness guard: the mate must be found before timing anything.
    let mate = GameState::from_fen(MATE_IN_ONE_FEN).expect("benchmark FEN should parse");
    let found = select_move(&mate, mate.side_to_move, 3, &StandardScorer).expect("search runs");
    assert_eq!(found.best_score, MATE_SCORE - 1, "mate in one not found");

    let mut group = c.benchmark_group("negamax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let middlegame = GameState::from_fen(MIDDLEGAME_FEN).expect("benchmark FEN should parse");
    let start = GameState::new_game();

    for depth in 1..=3u8 {
        group.bench_with_input(
            BenchmarkId::new("start_standard", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    select_move(black_box(&start), start.side_to_move, depth, &StandardScorer)
                        .expect("search runs")
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("middlegame_standard", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    select_move(black_box(&middlegame), middlegame.side_to_move, depth, &StandardScorer)
                        .expect("search runs")
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("middlegame_material", depth),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    select_move(black_box(&middlegame), middlegame.side_to_move, depth, &MaterialScorer)
                        .expect("search runs")
                })
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
