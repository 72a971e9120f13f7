//! amascut-replay - Replays a recorded event log through the issue helper.
//!
//! Runs the helper against an in-memory scene loaded around the Apmeken room,
//! so recorded sessions can be checked without a game client.
//!
//! Usage: amascut-replay <events.jsonl> [config.toml]
//!
//! Each input line is one JSON object:
//!   {"type":"room","room":"apmeken"}
//!   {"type":"chat_message","kind":"game_message","text":"..."}
//!   {"type":"animation_changed","actor":{"kind":"player","animation":3676,"world_location":{"x":12636,"y":2792,"plane":0}}}
//!
//! Output: JSON to stdout with the markers left in the scene.

use std::path::{Path, PathBuf};

use amascut_core::config::{default_config_path, load_config};
use amascut_core::events::{AnimationChanged, ChatMessage, GameEvent};
use amascut_core::markers::{ObjectId, SceneStats};
use amascut_core::{ApmekenIssueHelper, ComponentHost, HeadlessScene, WorldPoint};
use amascut_types::{HelperConfig, RaidRoom, RaidState};
use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::EnvFilter;

/// Tile the headless scene is loaded around.
const ROOM_CENTER: WorldPoint = WorldPoint::new(12640, 2784, 0);

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ReplayLine {
    Room { room: Option<RaidRoom> },
    ChatMessage(ChatMessage),
    AnimationChanged(AnimationChanged),
}

#[derive(Debug, Serialize)]
struct ReplayOutput {
    events_processed: usize,
    skipped_lines: usize,
    helper_running: bool,
    markers: Vec<WorldPoint>,
    scene: SceneStats,
}

/// Initialize logging, writing to AMASCUT_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("AMASCUT_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn replay(input: &str, config: &HelperConfig) -> ReplayOutput {
    let mut host = ComponentHost::new(HeadlessScene::centered_on(ROOM_CENTER));
    host.add_component(Box::new(ApmekenIssueHelper::<ObjectId>::new()));

    let mut raid_state = RaidState::default();
    host.revalidate(config, &raid_state);

    let mut events_processed = 0;
    let mut skipped_lines = 0;

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<ReplayLine>(line) {
            Ok(ReplayLine::Room { room }) => {
                raid_state.current_room = room;
                host.revalidate(config, &raid_state);
            }
            Ok(ReplayLine::ChatMessage(chat)) => {
                host.dispatch(&GameEvent::ChatMessage(chat));
                events_processed += 1;
            }
            Ok(ReplayLine::AnimationChanged(changed)) => {
                host.dispatch(&GameEvent::AnimationChanged(changed));
                events_processed += 1;
            }
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "Skipping malformed replay line");
                skipped_lines += 1;
            }
        }
    }

    let scene = host.scene();
    let mut markers: Vec<WorldPoint> = scene
        .registered_objects()
        .filter_map(|object| object.location)
        .map(|local| scene.world_point(local))
        .collect();
    markers.sort_by_key(|p| (p.x, p.y, p.plane));

    ReplayOutput {
        events_processed,
        skipped_lines,
        helper_running: host.is_running(ApmekenIssueHelper::<ObjectId>::ID),
        markers,
        scene: scene.stats(),
    }
}

fn resolve_config(path: Option<&Path>) -> HelperConfig {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        return HelperConfig::default();
    };
    match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load helper config, using defaults");
            HelperConfig::default()
        }
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        tracing::error!("Usage: amascut-replay <events.jsonl> [config.toml]");
        std::process::exit(1);
    }

    let events_path = PathBuf::from(&args[1]);
    let config = resolve_config(args.get(2).map(Path::new));

    let input = match std::fs::read_to_string(&events_path) {
        Ok(input) => input,
        Err(e) => {
            tracing::error!(path = ?events_path, error = %e, "Failed to read event log");
            std::process::exit(1);
        }
    };

    let output = replay(&input, &config);
    tracing::info!(
        events = output.events_processed,
        markers = output.markers.len(),
        "Replay finished"
    );

    match serde_json::to_string(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize replay output");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION: &str = r#"
{"type":"room","room":"apmeken"}
{"type":"chat_message","kind":"game_message","text":"<col=ef1020>You sense an issue with the roof supports.</col>"}
{"type":"animation_changed","actor":{"kind":"player","animation":3676,"world_location":{"x":12637,"y":2790,"plane":0}}}
not json
{"type":"animation_changed","actor":{"kind":"npc","animation":3676,"world_location":{"x":12644,"y":2776,"plane":0}}}
"#;

    #[test]
    fn test_replay_leaves_markers_on_other_pillars() {
        let output = replay(SESSION, &HelperConfig::default());

        assert!(output.helper_running);
        assert_eq!(output.events_processed, 3);
        assert_eq!(output.skipped_lines, 1);
        assert_eq!(
            output.markers,
            vec![
                WorldPoint::new(12636, 2776, 0),
                WorldPoint::new(12644, 2776, 0),
                WorldPoint::new(12644, 2792, 0),
            ]
        );
    }

    #[test]
    fn test_leaving_room_clears_replay_markers() {
        let input = format!("{SESSION}\n{{\"type\":\"room\",\"room\":null}}\n");
        let output = replay(&input, &HelperConfig::default());

        assert!(!output.helper_running);
        assert!(output.markers.is_empty());
        assert_eq!(output.scene.removed, 3);
    }

    #[test]
    fn test_disabled_helper_creates_nothing() {
        let config = HelperConfig {
            apmeken_issue_helper: false,
        };
        let output = replay(SESSION, &config);

        assert!(!output.helper_running);
        assert_eq!(output.scene.created, 0);
    }
}
