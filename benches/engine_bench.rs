use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arbor::board::{Action, Board, MatchState, Tree, TreeMap, TurnState};
use arbor::config::Tuning;
use arbor::engine::Engine;
use arbor::eval::{shade_on, CostProfile};

/// A crowded mid-game position: trees of both players on most rich cells.
fn midgame_turn(board: &Board, day: u32) -> TurnState {
    let mut trees = Vec::new();
    for cell in 0..board.len() {
        if cell % 3 == 2 {
            continue;
        }
        trees.push(Tree {
            cell,
            size: (cell % 4) as u8,
            is_mine: cell % 2 == 0,
            is_dormant: false,
        });
    }
    let trees = TreeMap::from_trees(board, &trees).unwrap();

    let mut actions = vec![Action::Wait];
    for tree in trees.mine() {
        if tree.size < 3 {
            actions.push(Action::Grow { target: tree.cell });
        } else {
            actions.push(Action::Complete { target: tree.cell });
        }
    }
    for target in (0..board.len()).filter(|c| !trees.is_occupied(*c)) {
        actions.push(Action::Seed { source: 0, target });
    }

    TurnState {
        state: MatchState {
            day,
            nutrients: 12,
            ..MatchState::default()
        },
        trees,
        actions,
    }
}

fn bench_shade_all_cells(c: &mut Criterion) {
    let board = Board::standard();
    let turn = midgame_turn(&board, 12);
    c.bench_function("shade_all_37_cells", |b| {
        b.iter(|| {
            let mut total = 0;
            for cell in 0..board.len() {
                total += shade_on(black_box(&board), black_box(&turn.trees), cell);
            }
            total
        })
    });
}

fn bench_cost_profile(c: &mut Criterion) {
    let board = Board::standard();
    let turn = midgame_turn(&board, 12);
    c.bench_function("cost_profile", |b| {
        b.iter(|| CostProfile::from_trees(black_box(&turn.trees)))
    });
}

fn bench_decide_midgame(c: &mut Criterion) {
    let board = Board::standard();
    let turn = midgame_turn(&board, 12);
    let engine = Engine::new(board, Tuning::default());
    c.bench_function("decide_midgame", |b| {
        b.iter(|| engine.decide(black_box(&turn)).unwrap())
    });
}

fn bench_decide_endgame(c: &mut Criterion) {
    let board = Board::standard();
    let turn = midgame_turn(&board, 22);
    let engine = Engine::new(board, Tuning::default());
    c.bench_function("decide_endgame", |b| {
        b.iter(|| engine.decide(black_box(&turn)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_shade_all_cells,
    bench_cost_profile,
    bench_decide_midgame,
    bench_decide_endgame
);
criterion_main!(benches);
