mod numerical;
mod validation;

// Integer arithmetic that wraps toward negative infinity
pub use numerical::{floor_div, positive_modulus};

// Validation operations
pub use validation::{integral, valid_frequency, valid_ratio};
