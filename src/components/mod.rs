pub mod control_panel;
pub mod data_editor;
pub mod force_graph;
