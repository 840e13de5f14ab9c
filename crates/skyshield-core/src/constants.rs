//! Simulation constants and tuning parameters.
//!
//! Distances are play-field pixels, times are milliseconds. Rates are
//! expressed per reference frame (see [`REFERENCE_FRAME_MS`]).

/// Frame duration that all per-frame rates are normalized against (60 Hz).
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

/// Default cap on elapsed time fed into a single tick.
pub const DEFAULT_MAX_FRAME_MS: f64 = 250.0;

// --- Play field ---

pub const DEFAULT_FIELD_WIDTH: f64 = 800.0;
pub const DEFAULT_FIELD_HEIGHT: f64 = 600.0;

/// Number of horizontal layout slots; city spacing is `width / LAYOUT_SLOTS`.
pub const LAYOUT_SLOTS: f64 = 8.0;

/// Slot multipliers for the six cities. Slot 4 is left for the center battery.
pub const CITY_SLOTS: [f64; 6] = [1.0, 2.0, 3.0, 5.0, 6.0, 7.0];

/// Distance of the city baseline above the bottom edge.
pub const CITY_GROUND_OFFSET: f64 = 30.0;

/// Distance of the battery baseline above the bottom edge.
pub const BATTERY_GROUND_OFFSET: f64 = 40.0;

/// Horizontal inset of the left and right batteries from the field edges.
pub const BATTERY_EDGE_INSET: f64 = 40.0;

/// Interceptors leave the battery this far above its position.
pub const MUZZLE_HEIGHT: f64 = 12.0;

// --- Batteries ---

/// Maximum ammo per slot: left, center, right.
pub const BATTERY_MAX_AMMO: [u32; 3] = [10, 15, 10];

/// Recoil lost per reference frame.
pub const RECOIL_DECAY_RATE: f64 = 0.1;

/// Interceptors launched per shot once any battery is lost.
pub const DEGRADED_BURST_COUNT: usize = 3;

/// Aim-point offsets for burst members, applied in order.
pub const BURST_OFFSETS: [(f64, f64); 3] = [(0.0, 0.0), (-20.0, 10.0), (20.0, 10.0)];

// --- Projectiles ---

/// Interceptor progress per reference frame.
pub const INTERCEPTOR_SPEED: f64 = 0.05;

/// Enemy progress per reference frame at score 0.
pub const ENEMY_BASE_SPEED: f64 = 0.0015;

/// Additional enemy progress per reference frame per point of score.
pub const ENEMY_SPEED_PER_POINT: f64 = 0.000_003;

// --- Spawning ---

pub const SPAWN_INTERVAL_BASE_MS: f64 = 3500.0;
pub const SPAWN_INTERVAL_MIN_MS: f64 = 1000.0;

/// Interval reduction per full step of score.
pub const SPAWN_INTERVAL_STEP_MS: f64 = 250.0;

/// Points per interval reduction step.
pub const SPAWN_SCORE_STEP: u32 = 100;

// --- Blasts ---

/// Radius gained per reference frame while expanding. Contraction runs at half.
pub const BLAST_GROWTH_RATE: f64 = 2.0;

pub const INTERCEPTOR_BLAST_BASE_RADIUS: f64 = 80.0;
pub const INTERCEPTOR_BLAST_MIN_RADIUS: f64 = 50.0;

/// Radius lost per destroyed battery.
pub const INTERCEPTOR_BLAST_PENALTY: f64 = 15.0;

pub const IMPACT_BLAST_RADIUS: f64 = 40.0;

pub const SECONDARY_BLAST_RADIUS: f64 = 20.0;
pub const SECONDARY_BLAST_GROWTH_RATE: f64 = 1.0;

/// Secondary blasts start contracting from this fraction of their max radius.
pub const SECONDARY_BLAST_START_FRACTION: f64 = 0.9;

// --- Scoring ---

pub const WIN_SCORE: u32 = 650;

pub const KILL_VALUE_BASE: u32 = 30;
pub const KILL_VALUE_MIN: u32 = 10;

/// Points lost per destroyed battery.
pub const KILL_VALUE_PENALTY: u32 = 10;
