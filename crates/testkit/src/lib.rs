//! Kestrel Test Kit
//!
//! Deterministic, reusable stubs of the core domain objects, so test suites
//! never hand-construct instruments, bar types, or bars inline. Every
//! factory returns a fresh value that is equal across calls, runs, and
//! processes; every factory doubles as an `rstest` fixture.

pub mod stubs;

pub use stubs::*;
