// Shared fixtures for the integration tests.
//
// The synthetic pool is deep enough at every position that no legal setting
// (up to 14 teams x 18 rounds) can run out of eligible players.

#![allow(dead_code)]

use mockdraft_core::{Player, Position, Projections};

/// (position, count, first ADP, ADP step, top projection, projection step)
const SHAPE: &[(Position, usize, f64, f64, f64, f64)] = &[
    (Position::RB, 115, 1.5, 2.3, 290.0, 1.9),
    (Position::WR, 115, 2.0, 2.2, 300.0, 1.8),
    (Position::QB, 45, 18.0, 6.5, 380.0, 3.1),
    (Position::TE, 45, 24.0, 7.0, 210.0, 2.4),
    (Position::DST, 32, 118.0, 4.0, 140.0, 1.5),
    (Position::K, 32, 135.0, 4.0, 150.0, 1.2),
];

pub fn synthetic_pool() -> Vec<Player> {
    let mut players = Vec::new();
    for &(position, count, first_adp, adp_step, top, step) in SHAPE {
        for i in 0..count {
            let half = top - i as f64 * step;
            players.push(Player {
                name: format!("{} Prospect {:03}", position, i + 1),
                team: TEAMS[i % TEAMS.len()].to_string(),
                position,
                tier: (i / 8 + 1).min(10) as u8,
                adp: first_adp + i as f64 * adp_step,
                projections: Projections {
                    standard: half - 12.0,
                    half_ppr: half,
                    ppr: half + 12.0,
                },
                upside: ((i * 37) % 100) as f64 / 100.0,
            });
        }
    }
    players
}

/// A pool too small to finish any draft.
pub fn tiny_pool() -> Vec<Player> {
    synthetic_pool()
        .into_iter()
        .filter(|p| p.position == Position::WR)
        .take(20)
        .collect()
}

const TEAMS: &[&str] = &[
    "ARI", "ATL", "BAL", "BUF", "CAR", "CHI", "CIN", "CLE", "DAL", "DEN", "DET", "GB", "HOU", "IND",
    "JAX", "KC",
];
