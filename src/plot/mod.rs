//! Drawing: the `Surface` abstraction, the boundary draw operations, and the
//! terminal/SVG renderers built on them.

pub mod ascii;
pub mod draw;
pub mod surface;
pub mod svg;

pub use ascii::*;
pub use draw::*;
pub use surface::*;
pub use svg::*;
