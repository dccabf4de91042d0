// Single source of truth for all default values.

// --- Gate ---
pub const DEFAULT_GATE_THRESHOLD: f64 = 1.0;
pub const DEFAULT_SEVERITY_WEIGHT: f64 = 1.5;
pub const DEFAULT_URGENCY_WEIGHT: f64 = 0.5;
pub const DEFAULT_URGENCY_CAP: usize = 3;

// --- Clustering ---
/// Must exceed the category weight: a matching category alone never clusters.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.65;
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 0.55;
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.30;
pub const DEFAULT_PROXIMITY_WEIGHT: f64 = 0.15;
pub const DEFAULT_PROXIMITY_WINDOW_HOURS: f64 = 24.0;
pub const DEFAULT_MAX_KEYWORDS: usize = 5;

// --- Scoring ---
pub const DEFAULT_SEVERITY_SHARE: f64 = 0.35;
pub const DEFAULT_VELOCITY_SHARE: f64 = 0.25;
pub const DEFAULT_REACH_SHARE: f64 = 0.20;
pub const DEFAULT_CREDIBILITY_SHARE: f64 = 0.20;

// --- Simulation ---
pub const DEFAULT_ITERATIONS: usize = 5_000;
pub const DEFAULT_BREACH_THRESHOLD_MM: f64 = 25.0;
pub const DEFAULT_POLICY_CUTOFF: f64 = 0.5;
pub const DEFAULT_NORMAL_SPREAD: f64 = 0.15;
pub const DEFAULT_HEAVY_TAIL_SPREAD: f64 = 0.25;
pub const DEFAULT_TAIL_DEGREES_OF_FREEDOM: u32 = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
