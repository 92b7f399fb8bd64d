/// Dispatch of binary operators and the modulo rule.
pub mod core;
/// `+`, `-`, `*` and `/` on integers and reals.
pub mod scalar;
/// `^` with exact integer powers.
pub mod power;
