use serde::Deserialize;

use chess_rules::board::{Difficulty, Status};
use chess_rules::Game;

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    name: String,
    pdn: String,
    solution: String,
}

const PROBLEMS: &str = r#"{
    "problems": [
        {
            "name": "back rank, queen",
            "pdn": "6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1",
            "solution": "e1e8"
        },
        {
            "name": "scholar's mate",
            "pdn": "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4",
            "solution": "h5f7"
        },
        {
            "name": "fool's mate",
            "pdn": "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2",
            "solution": "d8h4"
        },
        {
            "name": "back rank, rook",
            "pdn": "4r1k1/8/8/8/8/8/5PPP/6K1 b - - 0 1",
            "solution": "e8e1"
        },
        {
            "name": "smothered",
            "pdn": "6rk/6pp/7N/8/8/8/8/6K1 w - - 0 1",
            "solution": "h6f7"
        }
    ]
}"#;

#[test]
fn mate_in_one_suite() {
    let set: ProblemSet = serde_json::from_str(PROBLEMS).expect("valid problem set");
    assert!(!set.problems.is_empty());

    for problem in &set.problems {
        for difficulty in [Difficulty::Greedy, Difficulty::Minimax, Difficulty::BestFirst] {
            let game = Game::from_pdn(&problem.pdn).expect("valid pdn");
            let mv = game
                .best_move(difficulty, None)
                .unwrap_or_else(|| panic!("{}: no move", problem.name));
            assert_eq!(
                mv.to_string(),
                problem.solution,
                "{} at difficulty {}",
                problem.name,
                difficulty
            );
        }

        let mut game = Game::from_pdn(&problem.pdn).expect("valid pdn");
        game.play_notation(&problem.solution).expect("solution is legal");
        assert_eq!(game.status(), Status::Checkmate, "{}", problem.name);
    }
}
