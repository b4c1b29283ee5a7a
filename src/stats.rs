use crate::game::Winner;
use crate::simulation::TrialBatch;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub policy_name: String,
    pub games: u32,
    pub mean_turns: f64,
    /// Player wins as a percentage of games.
    pub player_win_rate: f64,
    pub player_wins: u32,
    pub raven_wins: u32,
    pub min_turns: u32,
    pub max_turns: u32,
}

pub fn summarize(batch: &TrialBatch) -> BatchSummary {
    let games = batch.results.len() as u32;
    let player_wins = batch
        .results
        .iter()
        .filter(|r| r.winner == Winner::Player)
        .count() as u32;

    let mean_turns = if games > 0 {
        batch.results.iter().map(|r| r.turns_played as f64).sum::<f64>() / games as f64
    } else {
        0.0
    };

    let player_win_rate = if games > 0 {
        player_wins as f64 * 100.0 / games as f64
    } else {
        0.0
    };

    BatchSummary {
        policy_name: batch.policy_name.clone(),
        games,
        mean_turns,
        player_win_rate,
        player_wins,
        raven_wins: games - player_wins,
        min_turns: batch.results.iter().map(|r| r.turns_played).min().unwrap_or(0),
        max_turns: batch.results.iter().map(|r| r.turns_played).max().unwrap_or(0),
    }
}

// TODO: column widths break past 999999999 games
pub fn comparison_table(summaries: &[BatchSummary]) {
    println!("\n╔════════════════════════════════════════════════════════════════════╗");
    println!("║                         POLICY COMPARISON                          ║");
    println!("╠════════════╦═══════════╦════════════╦════════════╦════════════════╣");
    println!("║ Policy     ║ Games     ║ Mean turns ║ Player (%) ║ Turns min/max  ║");
    println!("╠════════════╬═══════════╬════════════╬════════════╬════════════════╣");

    for summary in summaries {
        println!(
            "║ {:<10} ║ {:>9} ║ {:>10.2} ║ {:>9.2}% ║ {:>6} /{:>6} ║",
            summary.policy_name,
            summary.games,
            summary.mean_turns,
            summary.player_win_rate,
            summary.min_turns,
            summary.max_turns,
        );
    }

    println!("╚════════════╩═══════════╩════════════╩════════════╩════════════════╝\n");

    if let Some(best) = summaries.iter().max_by(|a, b| {
        a.player_win_rate.partial_cmp(&b.player_win_rate).unwrap()
    }) {
        println!(
            "Best for the player: {} ({:.2}% wins)",
            best.policy_name, best.player_win_rate
        );
    }

    if let Some(fastest) = summaries.iter().min_by(|a, b| {
        a.mean_turns.partial_cmp(&b.mean_turns).unwrap()
    }) {
        println!(
            "Fastest to decide: {} ({:.2} turns on average)",
            fastest.policy_name, fastest.mean_turns
        );
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameResult;

    fn result(winner: Winner, turns_played: u32) -> GameResult {
        GameResult {
            winner,
            turns_played,
        }
    }

    #[test]
    fn summary_math_checks_out() {
        let batch = TrialBatch {
            policy_name: "greedy".to_string(),
            results: vec![
                result(Winner::Player, 20),
                result(Winner::Raven, 30),
                result(Winner::Player, 25),
                result(Winner::Player, 33),
            ],
        };

        let summary = summarize(&batch);
        assert_eq!(summary.games, 4);
        assert_eq!(summary.player_wins, 3);
        assert_eq!(summary.raven_wins, 1);
        assert_eq!(summary.player_win_rate, 75.0);
        assert_eq!(summary.mean_turns, 27.0);
        assert_eq!(summary.min_turns, 20);
        assert_eq!(summary.max_turns, 33);
    }

    #[test]
    fn empty_batch_does_not_divide_by_zero() {
        let batch = TrialBatch {
            policy_name: "random".to_string(),
            results: vec![],
        };

        let summary = summarize(&batch);
        assert_eq!(summary.games, 0);
        assert_eq!(summary.mean_turns, 0.0);
        assert_eq!(summary.player_win_rate, 0.0);
    }
}
