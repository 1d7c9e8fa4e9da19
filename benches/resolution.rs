use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordfall::core::{match_line, scan_lines, Board, Dictionary, TileSequencer};
use wordfall::engine::Game;
use wordfall::types::{Coord, Letter};

fn bench_scan_and_match(c: &mut Criterion) {
    let dict = Dictionary::embedded();
    let board = Board::from_rows(&["STONEQZ", "HEARTXQ", "QWATERZ", "ZQCARTX"]);

    c.bench_function("scan_match_4_lines", |b| {
        b.iter(|| {
            let lines = scan_lines(black_box(&board), Coord::new(4, 3));
            lines.iter().map(|l| match_line(l, &dict).len()).sum::<usize>()
        })
    });
}

fn bench_cascade(c: &mut Criterion) {
    let dict = Dictionary::from_words(["cat", "dog"]);
    let start = Board::from_rows(&["D......", "O......", "G......", "CA.Q..."]);
    let t = Letter::from_char('T').unwrap();

    c.bench_function("place_with_cascade", |b| {
        b.iter(|| {
            let mut game = Game::new(dict.clone(), 1);
            let _ = game.set_board(start.clone());
            game.place_tile(black_box(2), t).map(|r| r.events.len())
        })
    });
}

fn bench_gravity(c: &mut Criterion) {
    c.bench_function("gravity_sparse_board", |b| {
        b.iter(|| {
            let mut board = Board::from_rows(&["ABCDEFG", ".......", "HIJKLMN", "......."]);
            board.apply_gravity().len()
        })
    });
}

fn bench_sequence(c: &mut Criterion) {
    let mut seq = TileSequencer::new(12345);

    c.bench_function("sequencer_next", |b| b.iter(|| seq.next()));

    c.bench_function("sequencer_regenerate_batch", |b| {
        b.iter(|| TileSequencer::new(black_box(7)))
    });
}

criterion_group!(
    benches,
    bench_scan_and_match,
    bench_cascade,
    bench_gravity,
    bench_sequence
);
criterion_main!(benches);
