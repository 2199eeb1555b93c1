pub(crate) mod action;
pub(crate) mod model;
pub(crate) mod presets;
pub(crate) mod reducer;
pub(crate) mod slice;
