//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod item_status;

pub use item_status::{ItemStatusPort, LookupError};
