//! Named constants of the empirical life model and the service surface.

// --- Life model (Larson-Miller style scaling, single material class) ---

/// Material constant `C` of the scaling formula.
pub const MATERIAL_CONSTANT: f64 = 20.0;
/// Reference stress-cycle rate the formula is normalized against (cycles/year).
pub const REFERENCE_STRESS_CYCLES: f64 = 100_000.0;
/// Reference usage rate the formula is normalized against (hours/year).
pub const REFERENCE_USAGE_HOURS: f64 = 1_000.0;
/// Reference absolute temperature the formula is normalized against (K).
pub const REFERENCE_TEMPERATURE_KELVIN: f64 = 600.0;
/// Offset used to convert °C to the absolute scale (273, not 273.15).
pub const KELVIN_OFFSET: f64 = 273.0;

/// Months in a year for the duration breakdown.
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Days in a month for the duration breakdown (commercial month).
pub const DAYS_PER_MONTH: f64 = 30.0;

// --- First wear-out classification thresholds ---

/// Above this rate bearings wear out first (exclusive).
pub const BEARING_STRESS_CYCLES: f64 = 700_000.0;
/// Lower bound of the boiler-tube stress band (inclusive).
pub const BOILER_STRESS_CYCLES_MIN: f64 = 400_000.0;
/// Temperature above which boiler tubes dominate in their band (exclusive, °C).
pub const BOILER_TEMPERATURE_CELSIUS: f64 = 500.0;
/// Lower bound of the turbine-blade stress band (inclusive).
pub const TURBINE_STRESS_CYCLES_MIN: f64 = 200_000.0;
/// Temperature above which turbine blades dominate in their band (exclusive, °C).
pub const TURBINE_TEMPERATURE_CELSIUS: f64 = 450.0;
/// Usage above which piping and structure dominate (exclusive, hours/year).
pub const PIPING_USAGE_HOURS: f64 = 6_000.0;

// --- Declared input ranges (UI hints, not physical limits) ---

pub const USAGE_HOURS_RANGE: (f64, f64) = (1_000.0, 8_000.0);
pub const STRESS_CYCLES_RANGE: (f64, f64) = (50_000.0, 1_000_000.0);
pub const TEMPERATURE_CELSIUS_RANGE: (f64, f64) = (100.0, 600.0);

// --- Comparison dataset ---

/// Baseline year of the comparison dataset.
pub const BASELINE_YEAR: u16 = 2013;
/// Current year of the comparison dataset.
pub const CURRENT_YEAR: u16 = 2023;
/// Seed of the simulated month-wise series.
pub const DEFAULT_SERIES_SEED: u64 = 42;
/// Standard deviation of the simulated month-wise series.
pub const SERIES_STD_DEV: f64 = 1.0;
pub const MONTH_LABELS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

// --- OpenAPI tags ---

pub const SYSTEM_TAG: &str = "System";
pub const ESTIMATOR_TAG: &str = "Life Estimation";
pub const COMPARISON_TAG: &str = "Parameter Comparison";
