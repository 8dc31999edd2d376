#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use cumulus_depth as depth;

#[doc(inline)]
pub use cumulus_3d as k3d;

#[doc(inline)]
pub use cumulus_surface as surface;

#[doc(inline)]
pub use cumulus_curve as curve;
