use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use othello_core::{Board, Color, Player};

const SIZES: [usize; 3] = [8, 16, 26];

fn players() -> (Player, Player) {
    (
        Player::new("Black", 'X', Color::Green).unwrap(),
        Player::new("White", 'O', Color::Yellow).unwrap(),
    )
}

fn legal_moves_benchmark(c: &mut Criterion) {
    let (black, white) = players();
    let mut group = c.benchmark_group("legal_moves");

    for &size in &SIZES {
        let board = Board::new(size, size, &black, &white);
        assert_eq!(board.legal_moves(&black, &white).len(), 4);

        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| black_box(board.legal_moves(black_box(&black), black_box(&white))));
        });
    }

    group.finish();
}

fn has_any_legal_move_benchmark(c: &mut Criterion) {
    let (black, white) = players();
    let mut group = c.benchmark_group("has_any_legal_move");

    for &size in &SIZES {
        // Worst case: a full board, so every cell is visited.
        let layout: String = (0..size * size)
            .map(|i| if (i / size + i % size) % 2 == 0 { 'X' } else { 'O' })
            .collect();
        let board = Board::from_layout(size, size, &layout, &black, &white);
        assert!(!board.has_any_legal_move(&black, &white));

        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| black_box(board.has_any_legal_move(black_box(&black), black_box(&white))));
        });
    }

    group.finish();
}

criterion_group!(benches, legal_moves_benchmark, has_any_legal_move_benchmark);
criterion_main!(benches);
