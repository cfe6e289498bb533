pub mod api;
pub mod dom_utils;
pub mod registry;
