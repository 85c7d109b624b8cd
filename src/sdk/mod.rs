pub mod config;
pub mod form;
pub mod guide;
pub mod routing;
pub mod util;
