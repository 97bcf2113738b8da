pub mod error;
pub mod grid;
pub mod random;
pub mod mesh;
pub mod cube;
pub mod city;
pub mod building;

pub use error::*;
pub use grid::*;
pub use random::*;
pub use mesh::*;
pub use cube::*;
pub use city::*;
pub use building::*;
