//! Difficulty routes of the form `#/game/<level>`.

use alloc::format;
use alloc::string::String;

use crate::Difficulty;

const GAME_PREFIX: &str = "/game/";

/// Resolves a route to a difficulty, anything malformed or unknown is `None`.
pub fn parse_route(route: &str) -> Option<Difficulty> {
    let route = route.trim();
    let route = route.strip_prefix('#').unwrap_or(route);
    let level = route.strip_prefix(GAME_PREFIX)?;
    let level = level.strip_suffix('/').unwrap_or(level);
    level.parse().ok()
}

pub fn route_for(difficulty: Difficulty) -> String {
    format!("#{GAME_PREFIX}{difficulty}")
}
