// The main crate is wasm-only, so host-side tests include the pure-Rust
// simulation modules directly, mirroring the `core` module tree.
#![allow(dead_code)]

pub mod core {
    pub mod camera {
        include!("../../src/core/camera.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod connections {
        include!("../../src/core/connections.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod controller {
        include!("../../src/core/controller.rs");
    }
    pub mod field {
        include!("../../src/core/field.rs");
    }
    pub mod lifecycle {
        include!("../../src/core/lifecycle.rs");
    }
    pub mod mask {
        include!("../../src/core/mask.rs");
    }
    pub mod nav {
        include!("../../src/core/nav.rs");
    }
    pub mod sim {
        include!("../../src/core/sim.rs");
    }
    pub mod theme {
        include!("../../src/core/theme.rs");
    }
}

use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}
