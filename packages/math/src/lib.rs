// Narwhal Math Package

#![no_std]

pub mod constants;
pub mod full_math;
pub mod constant_product;
pub mod stable_swap;
pub mod fees;

// Re-export commonly used items from constants
pub use constants::*;

// Re-export wide arithmetic helpers
pub use full_math::{
    mul_div_floor_small,
    i128_to_u128_checked,
    u128_to_i128_checked,
};

// Re-export pricing functions
pub use constant_product::get_amount_out;
pub use stable_swap::{compute_d, compute_y, get_dy, normalize, rate_multiplier};

// Re-export fee and split helpers
pub use fees::{bucket_share, fee_amount, is_valid_partner_fee, split_amount, split_fee};
