pub mod channels;
pub mod enhance;
pub mod hls;
