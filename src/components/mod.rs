pub mod app;
pub mod variant_track;
