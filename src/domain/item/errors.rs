//! Item Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("商品标识不能为空")]
    Empty,
}
