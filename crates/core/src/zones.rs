//! Zones module - transient regions that override gravity
//!
//! A zone is a cloud-shaped block mask with a floating-point position, a
//! lifetime and an optional drift velocity. The manager spawns at most
//! [`MAX_ZONES`] of them on a timer, ages and moves them each tick, bounces
//! them off a margin around the board and answers which zone (if any) an
//! active piece is touching.

use arrayvec::ArrayVec;
use serde::Serialize;
use tracing::debug;

use crate::pieces::Tetromino;
use crate::rng::{GameRng, ZONE_STREAM};
use crate::types::{
    ZoneKind, CLOUD_MAX_BLOCKS, CLOUD_MAX_HEIGHT, CLOUD_MAX_WIDTH, CLOUD_MIN_HEIGHT,
    CLOUD_MIN_WIDTH, MAX_ZONES, ZONE_BOUNCE_MARGIN, ZONE_DRIFT_SPAN_X, ZONE_DRIFT_SPAN_Y,
    ZONE_LIFETIME_MS, ZONE_SPAWN_INTERVAL_MS,
};

/// Offset of one mask block from the zone origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ZoneBlock {
    pub x: u8,
    pub y: u8,
}

/// Block mask of a cloud, at most `CLOUD_MAX_BLOCKS` entries.
pub type CloudBlocks = ArrayVec<ZoneBlock, CLOUD_MAX_BLOCKS>;

/// Irregular blob generated for a zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudShape {
    pub width: u8,
    pub height: u8,
    pub blocks: CloudBlocks,
}

/// A live gravity zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    pub kind: ZoneKind,
    pub x: f32,
    pub y: f32,
    pub width: u8,
    pub height: u8,
    pub blocks: CloudBlocks,
    /// Remaining lifetime in milliseconds.
    pub life_ms: i32,
    /// Drift in cells per second.
    pub speed_x: f32,
    pub speed_y: f32,
}

impl Zone {
    /// Static zone at an integer position with the given mask.
    pub fn new(kind: ZoneKind, x: f32, y: f32, cloud: CloudShape) -> Self {
        Self {
            kind,
            x,
            y,
            width: cloud.width,
            height: cloud.height,
            blocks: cloud.blocks,
            life_ms: ZONE_LIFETIME_MS,
            speed_x: 0.0,
            speed_y: 0.0,
        }
    }

    /// Give the zone a drift velocity.
    pub fn with_velocity(mut self, speed_x: f32, speed_y: f32) -> Self {
        self.speed_x = speed_x;
        self.speed_y = speed_y;
        self
    }

    pub fn is_static(&self) -> bool {
        self.speed_x == 0.0 && self.speed_y == 0.0
    }

    /// Grid cells currently covered by the mask (block positions floored).
    pub fn grid_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.blocks.iter().map(move |b| {
            (
                (self.x + b.x as f32).floor() as i32,
                (self.y + b.y as f32).floor() as i32,
            )
        })
    }

    /// Cheap reject: false when the piece's matrix box cannot touch this zone.
    fn bounds_may_overlap(&self, piece: &Tetromino) -> bool {
        let n = piece.shape.size() as f32;
        let (px, py) = (piece.x as f32, piece.y as f32);
        !(px + n < self.x
            || px > self.x + self.width as f32
            || py + n < self.y
            || py > self.y + self.height as f32)
    }

    /// Exact test: any occupied piece cell on any mask cell.
    fn touches(&self, piece: &Tetromino) -> bool {
        piece.cells().any(|(px, py)| {
            self.grid_cells()
                .any(|(zx, zy)| zx == px as i32 && zy == py as i32)
        })
    }

    /// Age, move and bounce for `elapsed_ms`.
    fn advance(&mut self, elapsed_ms: u32, board_width: u8, board_height: u8) {
        self.life_ms = self.life_ms.saturating_sub(elapsed_ms as i32);

        let dt = elapsed_ms as f32 / 1000.0;
        self.y += self.speed_y * dt;
        self.x += self.speed_x * dt;

        if self.y < -ZONE_BOUNCE_MARGIN
            || self.y + self.height as f32 > board_height as f32 + ZONE_BOUNCE_MARGIN
        {
            self.speed_y = -self.speed_y;
        }
        if self.x < -ZONE_BOUNCE_MARGIN
            || self.x + self.width as f32 > board_width as f32 + ZONE_BOUNCE_MARGIN
        {
            self.speed_x = -self.speed_x;
        }
    }
}

/// Spawns, moves and expires gravity zones.
#[derive(Debug, Clone)]
pub struct ZoneManager {
    width: u8,
    height: u8,
    zones: ArrayVec<Zone, MAX_ZONES>,
    timer_ms: u32,
    rng: GameRng,
}

impl ZoneManager {
    pub fn new(width: u8, height: u8, seed: u64) -> Self {
        Self {
            width,
            height,
            zones: ArrayVec::new(),
            timer_ms: 0,
            rng: GameRng::new(seed, ZONE_STREAM),
        }
    }

    /// Live zones in insertion order.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Accumulated spawn timer.
    pub fn timer_ms(&self) -> u32 {
        self.timer_ms
    }

    /// Add a zone directly (scripted setups). Returns false when full.
    pub fn push(&mut self, zone: Zone) -> bool {
        self.zones.try_push(zone).is_ok()
    }

    /// Drop all zones and restart the spawn timer.
    pub fn reset(&mut self) {
        self.zones.clear();
        self.timer_ms = 0;
    }

    /// Advance the zone simulation by `elapsed_ms`.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.timer_ms = self.timer_ms.saturating_add(elapsed_ms);

        if self.timer_ms > ZONE_SPAWN_INTERVAL_MS && !self.zones.is_full() {
            self.spawn_zone();
            self.timer_ms = 0;
        }

        let (width, height) = (self.width, self.height);
        for zone in self.zones.iter_mut() {
            zone.advance(elapsed_ms, width, height);
        }

        self.zones.retain(|zone| {
            let alive = zone.life_ms > 0;
            if !alive {
                debug!(kind = zone.kind.as_str(), "zone expired");
            }
            alive
        });
    }

    /// Spawn one random zone fully inside the board. No-op when full.
    pub fn spawn_zone(&mut self) {
        if self.zones.is_full() {
            return;
        }

        let kind = ZoneKind::SPAWNABLE[self.rng.index(ZoneKind::SPAWNABLE.len())];
        let cloud = self.generate_cloud_shape();

        let x = self.rng.index(self.width.saturating_sub(cloud.width).max(1) as usize) as f32;
        let y = self.rng.index(self.height.saturating_sub(cloud.height).max(1) as usize) as f32;

        let mut zone = Zone::new(kind, x, y, cloud);
        if !self.rng.coin() {
            let speed_y = (self.rng.unit() - 0.5) * ZONE_DRIFT_SPAN_Y;
            let speed_x = (self.rng.unit() - 0.5) * ZONE_DRIFT_SPAN_X;
            zone = zone.with_velocity(speed_x, speed_y);
        }

        debug!(
            kind = zone.kind.as_str(),
            x = zone.x,
            y = zone.y,
            blocks = zone.blocks.len(),
            drifting = !zone.is_static(),
            "zone spawned"
        );
        self.zones.push(zone);
    }

    /// Random blob, denser toward the middle.
    ///
    /// A cell at distance (dx, dy) from the center is kept with probability
    /// `1 - 0.8 * (dx/w + dy/h)`.
    pub fn generate_cloud_shape(&mut self) -> CloudShape {
        let w = self.rng.range_inclusive(CLOUD_MIN_WIDTH, CLOUD_MAX_WIDTH);
        let h = self.rng.range_inclusive(CLOUD_MIN_HEIGHT, CLOUD_MAX_HEIGHT);
        let (wf, hf) = (w as f32, h as f32);

        let mut blocks = CloudBlocks::new();
        for y in 0..h {
            for x in 0..w {
                let dist_x = (x as f32 - wf / 2.0).abs();
                let dist_y = (y as f32 - hf / 2.0).abs();
                let prob = 1.0 - (dist_x / wf + dist_y / hf) * 0.8;

                if self.rng.unit() < prob {
                    blocks.push(ZoneBlock { x, y });
                }
            }
        }

        CloudShape {
            width: w,
            height: h,
            blocks,
        }
    }

    /// Kind of the first zone (insertion order) whose mask shares a cell with
    /// the piece, or `Normal`.
    pub fn gravity_modifier(&self, piece: &Tetromino) -> ZoneKind {
        self.zones
            .iter()
            .filter(|zone| zone.bounds_may_overlap(piece))
            .find(|zone| zone.touches(piece))
            .map(|zone| zone.kind)
            .unwrap_or(ZoneKind::Normal)
    }
}
