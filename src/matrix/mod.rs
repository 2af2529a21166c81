//! SL(2,ℂ) 행렬 모듈

mod error;
mod sl2c;

pub use error::{InvalidArgument, Sl2cError};
pub use sl2c::SL2C;
