//! Route module
//!
//! Route templates as exported by the framework, and the table that maps
//! route names to them.

pub mod table;
pub mod template;

// Re-export commonly used types
pub use table::{RouteConfig, RouteMap, RouteTable};
pub use template::{ParamInfo, Part, RouteTemplate};
