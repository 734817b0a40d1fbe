//! Hero background: a field of vertical "guitar strings" plucked by the pointer.
//!
//! Nothing here touches browser APIs; drawing goes through [`Surface`] so the
//! simulation runs and is tested off-browser.

pub mod config;
pub mod field;
pub mod point;
pub mod pointer;
pub mod strand;
pub mod surface;

pub use config::*;
pub use field::*;
pub use point::*;
pub use pointer::*;
pub use strand::*;
pub use surface::*;
