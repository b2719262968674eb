//! Trait definitions for the Scribe service.
//!
//! The router only sees these traits. Production wiring passes the reqwest
//! inference client and the diesel-backed store; tests pass doubles.

mod traits;

pub use traits::{BlogWriter, GenerationStore, MAX_PAGE_SIZE, clamp_limit};
