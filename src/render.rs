pub(crate) mod composite;
pub(crate) mod context;
pub(crate) mod layers;
pub(crate) mod surface;
