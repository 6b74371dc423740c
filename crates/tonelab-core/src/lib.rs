pub mod ace;
pub mod buffer;
pub mod color;
pub mod consts;
pub mod error;
pub mod filters;
pub mod histogram;
pub mod io;
pub mod pipeline;
pub mod resample;
pub mod specification;
