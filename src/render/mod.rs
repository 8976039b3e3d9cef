pub mod figure;
pub mod projection;
pub mod svg;

pub use figure::*;
pub use projection::*;
pub use svg::*;
