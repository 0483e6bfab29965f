//! egui rendering of the dashboard: filter controls, two charts and the table.

pub mod panels;
pub mod plot;
pub mod table;
