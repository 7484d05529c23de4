//! Key-agreement protocols built on the curve group.

pub mod diffie_hellman;
