/// Routes a binary operator to its handler.
pub mod core;
/// Floored remainder with a zero-divisor check.
pub mod modulo;
/// Exponentiation restricted to finite real results.
pub mod power;
/// Addition, subtraction, multiplication and division.
pub mod scalar;
