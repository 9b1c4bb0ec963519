pub mod hash;
pub mod module_graph;
pub mod options;
pub mod request;
pub mod size;
pub mod types;
