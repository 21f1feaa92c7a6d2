//! Thin wrapper crate re-exporting `katottg-core` for the demos hosted in
//! this workspace. Depend on `katottg-core` directly in real projects.

pub use katottg_core::*;

pub mod prelude {
    pub use katottg_core::prelude::*;
}
