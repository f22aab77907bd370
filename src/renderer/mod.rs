//! Snapshot rendering
//!
//! `build_frame` turns a [`Snapshot`] into a flat list of draw commands. It is
//! pure, so draw order and placeholder fallbacks are testable off the web.
//! The Canvas 2D backend just replays the list.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;

use crate::assets::{AssetKind, Assets};
use crate::consts::*;
use crate::sim::{Rect, Snapshot, car_rect};

/// Placeholder colours (CSS hex)
pub mod colors {
    pub const JUNGLE_GREEN: &str = "#146414";
    pub const TRACK_BROWN: &str = "#64462a";
    pub const PLAYER: &str = "#ffff00";
    pub const AI: &str = "#969696";
    pub const OBSTACLE: &str = "#c83232";
    pub const ROCK: &str = "#646464";
    pub const FINISH: &str = "#ffffff";
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear { w: f32, h: f32 },
    FillRect { rect: Rect, color: &'static str },
    FillCircle { center: Vec2, radius: f32, color: &'static str },
    Image { kind: AssetKind, rect: Rect },
}

/// Image if loaded, otherwise a solid rectangle
fn rect_or_image<T>(
    out: &mut Vec<DrawCmd>,
    assets: &Assets<T>,
    kind: AssetKind,
    rect: Rect,
    color: &'static str,
) {
    if assets.has(kind) {
        out.push(DrawCmd::Image { kind, rect });
    } else {
        out.push(DrawCmd::FillRect { rect, color });
    }
}

/// Image if loaded, otherwise a solid circle filling the box
fn circle_or_image<T>(
    out: &mut Vec<DrawCmd>,
    assets: &Assets<T>,
    kind: AssetKind,
    center: Vec2,
    size: f32,
    color: &'static str,
) {
    if assets.has(kind) {
        out.push(DrawCmd::Image {
            kind,
            rect: Rect::centered(center, size),
        });
    } else {
        out.push(DrawCmd::FillCircle {
            center,
            radius: size / 2.0,
            color,
        });
    }
}

/// Build the draw list for one frame.
///
/// Order: background, track, finish band, obstacles, rocks, AI cars, player.
/// Wrecked cars are skipped.
pub fn build_frame<T>(snapshot: &Snapshot, assets: &Assets<T>) -> Vec<DrawCmd> {
    let (w, h) = (snapshot.width, snapshot.height);
    let mut out = Vec::with_capacity(
        4 + snapshot.obstacles.len() + snapshot.rocks.len() + snapshot.ai_cars.len(),
    );

    out.push(DrawCmd::Clear { w, h });
    rect_or_image(
        &mut out,
        assets,
        AssetKind::Background,
        Rect::new(0.0, 0.0, w, h),
        colors::JUNGLE_GREEN,
    );

    let track_w = snapshot.track_right - snapshot.track_left;
    out.push(DrawCmd::FillRect {
        rect: Rect::new(snapshot.track_left, 0.0, track_w, h),
        color: colors::TRACK_BROWN,
    });

    if snapshot.finish_visible() {
        rect_or_image(
            &mut out,
            assets,
            AssetKind::FinishLine,
            Rect::new(snapshot.track_left, snapshot.finish_y, track_w, FINISH_BAND_HEIGHT),
            colors::FINISH,
        );
    }

    for &pos in &snapshot.obstacles {
        circle_or_image(
            &mut out,
            assets,
            AssetKind::ObstacleAnimal,
            pos,
            OBSTACLE_SIZE,
            colors::OBSTACLE,
        );
    }

    for &pos in &snapshot.rocks {
        circle_or_image(&mut out, assets, AssetKind::ObstacleRock, pos, ROCK_SIZE, colors::ROCK);
    }

    for ai in snapshot.ai_cars.iter().filter(|ai| ai.alive) {
        let rect = car_rect(Vec2::new(ai.x, ai.y));
        rect_or_image(&mut out, assets, AssetKind::CarAi, rect, colors::AI);
    }

    if snapshot.player.alive {
        let rect = car_rect(Vec2::new(snapshot.player.x, snapshot.player.y));
        rect_or_image(&mut out, assets, AssetKind::CarPlayer, rect, colors::PLAYER);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    fn race() -> Snapshot {
        let mut state = GameState::new(77, Tuning::default());
        state.start_game();
        state.snapshot()
    }

    #[test]
    fn test_placeholders_without_assets() {
        let snap = race();
        let cmds = build_frame(&snap, &Assets::<()>::new());

        assert!(matches!(cmds[0], DrawCmd::Clear { .. }));
        assert_eq!(
            cmds[1],
            DrawCmd::FillRect {
                rect: Rect::new(0.0, 0.0, WIDTH, HEIGHT),
                color: colors::JUNGLE_GREEN
            }
        );
        assert!(!cmds.iter().any(|c| matches!(c, DrawCmd::Image { .. })));
        // clear, background, track, 7 AI cars, player
        assert_eq!(cmds.len(), 3 + 7 + 1);
        assert_eq!(
            cmds.last(),
            Some(&DrawCmd::FillRect {
                rect: Rect::new(250.0, 580.0, CAR_WIDTH, CAR_HEIGHT),
                color: colors::PLAYER
            })
        );
    }

    #[test]
    fn test_images_when_loaded() {
        let snap = race();
        let mut assets = Assets::new();
        assets.record(AssetKind::CarPlayer, Ok::<_, String>(()));
        let cmds = build_frame(&snap, &assets);
        assert!(matches!(
            cmds.last(),
            Some(DrawCmd::Image { kind: AssetKind::CarPlayer, .. })
        ));
        // Background still falls back
        assert!(matches!(cmds[1], DrawCmd::FillRect { .. }));
    }

    #[test]
    fn test_dead_cars_are_not_drawn() {
        let mut snap = race();
        snap.player.alive = false;
        snap.ai_cars[0].alive = false;
        let cmds = build_frame(&snap, &Assets::<()>::new());
        assert_eq!(cmds.len(), 3 + 6);
        assert!(!cmds.iter().any(|c| matches!(
            c,
            DrawCmd::FillRect { color, .. } if *color == colors::PLAYER
        )));
    }

    #[test]
    fn test_finish_band_only_when_visible() {
        let mut snap = race();
        let has_finish = |cmds: &[DrawCmd]| {
            cmds.iter().any(|c| matches!(
                c,
                DrawCmd::FillRect { color, .. } if *color == colors::FINISH
            ))
        };
        assert!(!has_finish(&build_frame(&snap, &Assets::<()>::new())));
        snap.finish_y = 300.0;
        assert!(has_finish(&build_frame(&snap, &Assets::<()>::new())));
    }

    #[test]
    fn test_hazards_drawn_as_circles() {
        let mut snap = race();
        snap.obstacles.push(Vec2::new(200.0, 100.0));
        snap.rocks.push(Vec2::new(40.0, 100.0));
        let cmds = build_frame(&snap, &Assets::<()>::new());
        assert!(cmds.contains(&DrawCmd::FillCircle {
            center: Vec2::new(200.0, 100.0),
            radius: 15.0,
            color: colors::OBSTACLE
        }));
        assert!(cmds.contains(&DrawCmd::FillCircle {
            center: Vec2::new(40.0, 100.0),
            radius: 20.0,
            color: colors::ROCK
        }));
    }
}
