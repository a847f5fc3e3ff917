mod conversion;
mod equality;
mod math;
mod solver;
mod string;

// conversion
pub(crate) use conversion::{from_8bit, hsv_to_rgb, pack, rgb_to_hsv, to_8bit, unpack};

// equality
pub use equality::{is_close_enough, tolerance};
pub(crate) use equality::to_hash_bits;

// math
pub(crate) use math::{
    bias, clamp_all, clamp_unit, distance_squared, find_closest, lerp, FloatExt,
};

// solver
pub(crate) use solver::solve;

// string
pub(crate) use string::{format_hashed, format_pigment, parse_hashed, parse_pigment};
