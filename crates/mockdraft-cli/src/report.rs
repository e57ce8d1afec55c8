// Report rendering for the terminal (text) and for machines (JSON).

use std::fmt::Write;

use mockdraft_core::draft::roster::{earliest_round, hard_cap, roster_targets};
use mockdraft_core::{MockDraftResult, Position, Settings, SimPick};

use crate::commands::StrategyRun;

// ---------------------------------------------------------------------------
// Simulation report
// ---------------------------------------------------------------------------

pub fn render_json(result: &MockDraftResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn render_text(result: &MockDraftResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, result);
    out
}

fn write_report(out: &mut String, r: &MockDraftResult) -> std::fmt::Result {
    writeln!(out, "{}", settings_line(&r.settings))?;
    writeln!(out)?;
    writeln!(out, "Grade: {} ({})", r.grade.letter, r.grade.score)?;
    writeln!(out, "{}", r.grade.summary)?;
    writeln!(out)?;

    let roster: Vec<String> = r
        .roster
        .entries()
        .map(|(pos, n)| format!("{pos} {n}/{}", r.targets.get(pos)))
        .collect();
    writeln!(out, "Roster: {}", roster.join("  "))?;
    if r.skipped_picks > 0 {
        writeln!(out, "Skipped picks (pool exhausted): {}", r.skipped_picks)?;
    }
    writeln!(out)?;

    writeln!(out, "Your picks")?;
    write_pick_table(out, &r.user_picks, true)?;

    write_section(out, "Best picks", &r.best_picks)?;
    write_section(out, "Biggest reaches", &r.user_reaches)?;
    write_section(out, "League steals", &r.league_steals)?;
    Ok(())
}

pub fn settings_line(s: &Settings) -> String {
    format!(
        "{} teams, {} rounds, slot {}, {}, {} (seed {})",
        s.teams, s.rounds, s.draft_slot, s.scoring, s.strategy, s.seed
    )
}

fn write_section(out: &mut String, title: &str, picks: &[SimPick]) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    if picks.is_empty() {
        writeln!(out, "  (none)")?;
        return Ok(());
    }
    write_pick_table(out, picks, false)
}

fn write_pick_table(out: &mut String, picks: &[SimPick], with_reason: bool) -> std::fmt::Result {
    writeln!(
        out,
        "  {:>4}  {:>6}  {:<3}  {:<28} {:<4} {:>6} {:>6} {:>6}",
        "#", "Pick", "Pos", "Player", "Team", "ADP", "Diff", "Proj"
    )?;
    for p in picks {
        write!(
            out,
            "  {:>4}  {:>6}  {:<3}  {:<28} {:<4} {:>6.1} {:>+6.1} {:>6.1}",
            p.overall_pick,
            format!("{}.{:02}", p.round, p.pick_in_round),
            p.position.display_str(),
            truncate(&p.player_name, 28),
            p.player_team,
            p.adp,
            p.adp_diff,
            p.projection
        )?;
        if with_reason {
            write!(out, "  {}", p.reason)?;
        } else if !p.is_user {
            write!(out, "  (team {})", p.team_slot)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max - 1).collect();
        t.push('~');
        t
    }
}

// ---------------------------------------------------------------------------
// Strategy comparison
// ---------------------------------------------------------------------------

pub fn render_comparison_text(settings: &Settings, runs: &[StrategyRun]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_comparison(&mut out, settings, runs);
    out
}

fn write_comparison(out: &mut String, settings: &Settings, runs: &[StrategyRun]) -> std::fmt::Result {
    writeln!(out, "{}", settings_line(settings))?;
    writeln!(out)?;
    writeln!(
        out,
        "  {:<14} {:>5} {:>5} {:>9} {:>7}",
        "Strategy", "Grade", "Score", "Starters", "Value"
    )?;
    for run in runs {
        writeln!(
            out,
            "  {:<14} {:>5} {:>5} {:>9.1} {:>+7.2}",
            run.strategy.as_str(),
            run.grade.letter,
            run.grade.score,
            run.starter_projection,
            run.value_index
        )?;
    }
    Ok(())
}

pub fn render_comparison_json(
    settings: &Settings,
    runs: &[StrategyRun],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "settings": settings,
        "runs": runs,
    }))
}

// ---------------------------------------------------------------------------
// Roster targets
// ---------------------------------------------------------------------------

pub fn render_targets(rounds: u32) -> String {
    let mut out = String::new();
    let _ = write_targets(&mut out, rounds);
    out
}

fn write_targets(out: &mut String, rounds: u32) -> std::fmt::Result {
    let targets = roster_targets(rounds);
    writeln!(out, "Roster targets for {rounds} rounds")?;
    writeln!(out, "  {:<3} {:>6} {:>4} {:>9}", "Pos", "Target", "Cap", "From rnd")?;
    for pos in Position::ALL {
        writeln!(
            out,
            "  {:<3} {:>6} {:>4} {:>9}",
            pos.display_str(),
            targets.get(pos),
            hard_cap(pos, &targets),
            earliest_round(pos)
        )?;
    }
    Ok(())
}
