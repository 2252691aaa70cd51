use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_chess::game_state::board::Board;
use mailbox_chess::game_state::chess_types::{Color, Piece, PieceKind, Square};
use mailbox_chess::search::minimax::{best_moves, StandardRules};

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    setup: fn() -> Board,
    color: Color,
}

fn rook_endgame() -> Board {
    let mut board = Board::empty();
    let pieces = [
        (6, 5, Color::Light, PieceKind::King),
        (0, 0, Color::Light, PieceKind::Rook),
        (7, 7, Color::Dark, PieceKind::King),
        (3, 4, Color::Dark, PieceKind::Knight),
    ];
    for (column, row, color, kind) in pieces {
        board
            .set_piece(Square::new(column, row), Piece::new(color, kind))
            .expect("benchmark setup should be valid");
    }
    board
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "start",
        setup: Board::standard,
        color: Color::Light,
    },
    SearchCase {
        name: "rook_endgame",
        setup: rook_endgame,
        color: Color::Light,
    },
];

fn bench_best_moves(c: &mut Criterion) {
    let depth = std::env::var("MAILBOX_SEARCH_DEPTH")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(2)
        .max(1);

    let mut group = c.benchmark_group("minimax_best_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let rules: StandardRules = StandardRules::default();

    for case in CASES {
        let board = (case.setup)();
        group.bench_with_input(
            BenchmarkId::new(case.name, format!("d{depth}")),
            &board,
            |b, board| {
                b.iter(|| {
                    let result = best_moves(&rules, black_box(board), case.color, depth)
                        .expect("search should run");
                    black_box(result.best_score)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_best_moves);
criterion_main!(search_benches);
