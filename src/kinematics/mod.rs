pub mod planar;
pub mod spatial;
pub mod trajectory;
pub mod transforms;

pub use planar::*;
pub use spatial::*;
pub use trajectory::*;
pub use transforms::*;
