mod gaussian;
pub mod privacy_compositor;
