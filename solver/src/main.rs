use std::env;

use pairlink::{Engine, EngineConfig, Event, Pair};

fn main() {
    // solver [seed] [pairs]
    let mut args = env::args().skip(1);
    let seed = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(2024);
    let pairs = args.next().and_then(|arg| arg.parse().ok()).unwrap_or(12);

    let deck = (1..=pairs)
        .map(|n: u32| Pair::new(format!("{} squared", n), (n * n).to_string()))
        .collect::<Vec<_>>();
    let setup = Engine::new(deck, EngineConfig::default().with_seed(seed)).unwrap();
    if let Some(truncation) = setup.truncation {
        println!("deck cut from {} to {} pairs", truncation.requested, truncation.placed);
    }

    let mut engine = setup.engine;
    println!("{}", engine.board());

    while !engine.is_cleared() {
        let Some(hint) = engine.find_connectable_pair() else {
            println!("stuck with {} pairs left", engine.remaining_pairs());
            return;
        };

        engine.pick(hint.first);
        for event in engine.pick(hint.second) {
            if let Event::PathFound(path) = event {
                let text = engine.snapshot();
                println!(
                    "{} <-> {} via {:?}",
                    text.text_at(hint.first).unwrap_or("?"),
                    text.text_at(hint.second).unwrap_or("?"),
                    path.waypoints(),
                );
            }
        }
        for event in engine.finish_resolution() {
            if let Event::Shuffled(notice) = event {
                println!("no moves left, shuffled after {} attempt(s)", notice.report.attempts);
            }
        }
        println!("{}", engine.board());
    }

    println!("cleared {} pairs with {} shuffle(s)", engine.matched_pairs(), engine.shuffle_count());
}
