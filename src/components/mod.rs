pub mod file_source;
pub mod network_view;
