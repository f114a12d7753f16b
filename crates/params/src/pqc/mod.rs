//! Post-quantum parameter sets.

pub mod mlkem;
