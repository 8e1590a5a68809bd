pub const PI_F64: f64 = core::f64::consts::PI;
pub const PI_F32: f32 = core::f32::consts::PI;

pub const E_F64: f64 = core::f64::consts::E;
pub const E_F32: f32 = core::f32::consts::E;

pub const TO_RADIAN_F64: f64 = PI_F64 / 180.0;
pub const TO_RADIAN_F32: f32 = PI_F32 / 180.0;

pub const TO_DEGREE_F64: f64 = 180.0 / PI_F64;
pub const TO_DEGREE_F32: f32 = 180.0 / PI_F32;

// Newton square root: stop once |guess^2 - x| drops below the tolerance
pub const SQRT_TOLERANCE: f64 = 0.0001;
pub const SQRT_INITIAL_GUESS: f64 = 1.0;
pub const SQRT_MAX_ITERATIONS: u32 = 1024;
