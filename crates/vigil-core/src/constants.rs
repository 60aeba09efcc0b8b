//! Simulation constants and tuning parameters.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Tolerance used when comparing scheduled due times against the clock.
pub const TIME_EPSILON: f64 = 1e-9;

// --- Perception ---

/// Sight radius in meters.
pub const DEFAULT_VIEW_RADIUS: f64 = 10.0;

/// Full field-of-view cone angle in degrees (half-cone is half this).
pub const DEFAULT_VIEW_ANGLE_DEG: f64 = 120.0;

/// Omnidirectional close-range detection radius in meters.
pub const DEFAULT_CLOSE_RANGE_RADIUS: f64 = 3.0;

/// View angle while engaged: full circle.
pub const ATTACK_VIEW_ANGLE_DEG: f64 = 360.0;

/// Period of the perception scan in seconds.
pub const DEFAULT_SCAN_INTERVAL_SECS: f64 = 0.5;

/// Shortest accepted scan period in seconds.
pub const MIN_SCAN_INTERVAL_SECS: f64 = 1e-3;

/// Delay before a candidate threat is re-validated and engaged.
pub const DEFAULT_THREAT_IDENTIFY_SECS: f64 = 1.0;

/// Accumulated obstructed/out-of-range time before a target is dropped.
pub const DEFAULT_TARGET_LOSE_SECS: f64 = 2.0;

// --- Motion ---

/// Patrol speed (m/s).
pub const DEFAULT_PATROL_SPEED: f64 = 3.5;

/// Pursuit speed while attacking (m/s).
pub const DEFAULT_ATTACK_SPEED: f64 = 5.0;

/// Remaining distance at which a destination counts as reached (m).
pub const DEFAULT_STOPPING_DISTANCE: f64 = 0.1;

// --- Attack ---

/// Damage applied per attack.
pub const DEFAULT_ATTACK_DAMAGE: f64 = 15.0;

/// Distance at which an attack can be started (m).
pub const DEFAULT_ATTACK_RANGE: f64 = 2.0;

/// Cooldown between attacks (seconds).
pub const DEFAULT_ATTACK_COOLDOWN_SECS: f64 = 1.0;

// --- Separation ---

/// Radius within which same-category neighbours push each other apart (m).
pub const AVOID_RADIUS: f64 = 1.0;

/// Displacement rate applied by separation (m/s).
pub const AVOID_FORCE: f64 = 5.0;

// --- Vitality ---

/// Default maximum health for sentinels and intruders.
pub const DEFAULT_MAX_HEALTH: f64 = 100.0;

/// Default intruder movement speed (m/s).
pub const DEFAULT_INTRUDER_SPEED: f64 = 3.5;
