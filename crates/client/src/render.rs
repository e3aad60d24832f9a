//! Plain-text views over a [`GameState`] snapshot.
use std::fmt::Write;

use tactics_core::{GameConfig, GameState, Notification, Position};

/// Grid with `@` for the player, the enemy id digit for enemies, `.` for
/// empty cells. The selected unit is bracketed.
pub fn board(state: &GameState, config: &GameConfig) -> String {
    let size = config.grid_size as i32;
    let mut out = String::new();

    out.push_str("   ");
    for x in 0..size {
        let _ = write!(out, " {} ", x % 10);
    }
    out.push('\n');

    for y in 0..size {
        let _ = write!(out, "{:>2} ", y);
        for x in 0..size {
            let glyph = glyph_at(state, Position::new(x, y));
            let selected = state
                .unit_at(Position::new(x, y))
                .is_some_and(|id| state.selected_unit == Some(id));
            if selected {
                let _ = write!(out, "[{glyph}]");
            } else {
                let _ = write!(out, " {glyph} ");
            }
        }
        out.push('\n');
    }

    out
}

fn glyph_at(state: &GameState, position: Position) -> char {
    match state.unit_at(position) {
        Some(id) if id.is_player() => '@',
        Some(id) => char::from_digit(id.0 % 10, 10).unwrap_or('?'),
        None => '.',
    }
}

/// Loop, turn, countdown and unit roster.
pub fn status(state: &GameState, config: &GameConfig) -> String {
    let countdown = state.countdown(config);
    let mut out = format!(
        "Loop #{} | Turn {} | Time {}{}\n",
        state.current_loop,
        state.turn_number,
        countdown,
        if countdown.critical { " (!)" } else { "" },
    );

    for unit in state.units() {
        let _ = writeln!(
            out,
            "  {:<8} {:<10} {:>3}/{:<3} HP  atk {:<3} def {:<3} at {}{}",
            unit.id.to_string(),
            unit.name,
            unit.hp,
            unit.max_hp,
            unit.attack,
            unit.defense,
            unit.position,
            if unit.moved { "  (moved)" } else { "" },
        );
    }

    for enemy in &state.enemies {
        if enemy.evolution_level > 0 {
            let _ = writeln!(
                out,
                "  {} evolution {}, adapted to [{}]",
                enemy.name(),
                enemy.evolution_level,
                enemy.adapted_to.join(", ")
            );
        }
    }

    out.push_str(&selection(state));
    out
}

/// Selected-unit panel: stats plus whether the player can still move.
pub fn selection(state: &GameState) -> String {
    let Some(unit) = state.selected() else {
        return "Selected: none\n".to_owned();
    };

    let mobility = if !unit.id.is_player() {
        "enemy"
    } else if unit.moved {
        "already moved"
    } else {
        "can move"
    };

    format!(
        "Selected: {} ({}) hp {}/{} range {} at {} [{}]\n",
        unit.name, unit.id, unit.hp, unit.max_hp, unit.range, unit.position, mobility
    )
}

/// Numbered knowledge list, oldest first.
pub fn knowledge(state: &GameState) -> String {
    if state.knowledge.is_empty() {
        return "No knowledge gathered yet.\n".to_owned();
    }

    let mut out = String::new();
    for entry in state.knowledge.iter() {
        let _ = writeln!(
            out,
            "  [loop {}] {} ({})",
            entry.loop_discovered, entry.description, entry.category
        );
    }
    out
}

pub fn notification(notification: &Notification) -> String {
    format!("** {}: {}", notification.title, notification.detail)
}

/// Status followed by the board.
pub fn full(state: &GameState, config: &GameConfig) -> String {
    format!("{}{}", status(state, config), board(state, config))
}
