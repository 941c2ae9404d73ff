pub mod diagnostics_controller;
pub mod lead_controller;
pub mod vehicle_controller;
