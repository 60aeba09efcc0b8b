//! Scenario configuration: per-sentinel parameters, spawn lists and
//! blocking geometry, loadable from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::types::Position;

/// Errors raised while loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value} for `{field}`")]
    InvalidParameter { field: &'static str, value: f64 },
    #[error("obstacle {index} has min corner beyond max corner")]
    InvertedObstacle { index: usize },
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Static per-sentinel tuning supplied at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentinelParams {
    pub view_radius: f64,
    /// Full cone angle in degrees.
    pub view_angle_deg: f64,
    pub close_range_radius: f64,
    pub scan_interval_secs: f64,
    pub threat_identify_secs: f64,
    pub target_lose_secs: f64,
    pub patrol_speed: f64,
    pub attack_speed: f64,
    pub stopping_distance: f64,
    pub attack_damage: f64,
    pub attack_range: f64,
    pub attack_cooldown_secs: f64,
    pub avoid_radius: f64,
    pub avoid_force: f64,
    pub max_health: f64,
}

impl Default for SentinelParams {
    fn default() -> Self {
        Self {
            view_radius: DEFAULT_VIEW_RADIUS,
            view_angle_deg: DEFAULT_VIEW_ANGLE_DEG,
            close_range_radius: DEFAULT_CLOSE_RANGE_RADIUS,
            scan_interval_secs: DEFAULT_SCAN_INTERVAL_SECS,
            threat_identify_secs: DEFAULT_THREAT_IDENTIFY_SECS,
            target_lose_secs: DEFAULT_TARGET_LOSE_SECS,
            patrol_speed: DEFAULT_PATROL_SPEED,
            attack_speed: DEFAULT_ATTACK_SPEED,
            stopping_distance: DEFAULT_STOPPING_DISTANCE,
            attack_damage: DEFAULT_ATTACK_DAMAGE,
            attack_range: DEFAULT_ATTACK_RANGE,
            attack_cooldown_secs: DEFAULT_ATTACK_COOLDOWN_SECS,
            avoid_radius: AVOID_RADIUS,
            avoid_force: AVOID_FORCE,
            max_health: DEFAULT_MAX_HEALTH,
        }
    }
}

impl SentinelParams {
    /// Reject non-finite, negative or out-of-range tuning values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("view_radius", self.view_radius, self.view_radius > 0.0)?;
        check(
            "view_angle_deg",
            self.view_angle_deg,
            self.view_angle_deg > 0.0 && self.view_angle_deg <= ATTACK_VIEW_ANGLE_DEG,
        )?;
        check("close_range_radius", self.close_range_radius, self.close_range_radius >= 0.0)?;
        check(
            "scan_interval_secs",
            self.scan_interval_secs,
            self.scan_interval_secs >= MIN_SCAN_INTERVAL_SECS,
        )?;
        check("threat_identify_secs", self.threat_identify_secs, self.threat_identify_secs >= 0.0)?;
        check("target_lose_secs", self.target_lose_secs, self.target_lose_secs >= 0.0)?;
        check("patrol_speed", self.patrol_speed, self.patrol_speed >= 0.0)?;
        check("attack_speed", self.attack_speed, self.attack_speed >= 0.0)?;
        check("stopping_distance", self.stopping_distance, self.stopping_distance >= 0.0)?;
        check("attack_damage", self.attack_damage, self.attack_damage >= 0.0)?;
        check("attack_range", self.attack_range, self.attack_range >= 0.0)?;
        check("attack_cooldown_secs", self.attack_cooldown_secs, self.attack_cooldown_secs >= 0.0)?;
        check("avoid_radius", self.avoid_radius, self.avoid_radius >= 0.0)?;
        check("avoid_force", self.avoid_force, self.avoid_force >= 0.0)?;
        check("max_health", self.max_health, self.max_health > 0.0)?;
        Ok(())
    }
}

fn check(field: &'static str, value: f64, ok: bool) -> Result<(), ConfigError> {
    if value.is_finite() && ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { field, value })
    }
}

/// A sentinel to place in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentinelSpawn {
    pub position: Position,
    /// Initial yaw in radians, 0 = North.
    #[serde(default)]
    pub heading: f64,
    /// Cyclic patrol waypoints. Empty means the sentinel stands idle.
    #[serde(default)]
    pub route: Vec<Position>,
    #[serde(default)]
    pub params: SentinelParams,
}

impl SentinelSpawn {
    pub fn new(position: Position, route: Vec<Position>) -> Self {
        Self {
            position,
            heading: 0.0,
            route,
            params: SentinelParams::default(),
        }
    }
}

/// An intruder to place in the world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntruderSpawn {
    pub position: Position,
    /// Where the intruder walks to. None means it stands still.
    #[serde(default)]
    pub destination: Option<Position>,
    #[serde(default = "default_intruder_speed")]
    pub speed: f64,
    #[serde(default = "default_max_health")]
    pub max_health: f64,
}

impl IntruderSpawn {
    pub fn stationary(position: Position) -> Self {
        Self {
            position,
            destination: None,
            speed: DEFAULT_INTRUDER_SPEED,
            max_health: DEFAULT_MAX_HEALTH,
        }
    }
}

fn default_intruder_speed() -> f64 {
    DEFAULT_INTRUDER_SPEED
}

fn default_max_health() -> f64 {
    DEFAULT_MAX_HEALTH
}

fn default_cell_size() -> f64 {
    0.25
}

/// Axis-aligned rectangle of blocking geometry on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Complete scenario description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub sentinels: Vec<SentinelSpawn>,
    #[serde(default)]
    pub intruders: Vec<IntruderSpawn>,
    /// Blocking geometry for line-of-sight.
    #[serde(default)]
    pub obstacles: Vec<Rect>,
    /// Edge length of an occlusion grid cell (m).
    #[serde(default = "default_cell_size")]
    pub grid_cell_size: f64,
    /// Number of intruders scattered at random inside `random_area`.
    #[serde(default)]
    pub random_intruders: usize,
    #[serde(default)]
    pub random_area: Option<Rect>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            sentinels: Vec::new(),
            intruders: Vec::new(),
            obstacles: Vec::new(),
            grid_cell_size: default_cell_size(),
            random_intruders: 0,
            random_area: None,
        }
    }
}

impl ScenarioConfig {
    /// Parse and validate a scenario from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ScenarioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check("grid_cell_size", self.grid_cell_size, self.grid_cell_size > 0.0)?;
        for spawn in &self.sentinels {
            spawn.params.validate()?;
        }
        for spawn in &self.intruders {
            check("intruder.speed", spawn.speed, spawn.speed >= 0.0)?;
            check("intruder.max_health", spawn.max_health, spawn.max_health > 0.0)?;
        }
        for (index, rect) in self.obstacles.iter().enumerate() {
            if rect.min_x > rect.max_x || rect.min_y > rect.max_y {
                return Err(ConfigError::InvertedObstacle { index });
            }
        }
        Ok(())
    }
}
