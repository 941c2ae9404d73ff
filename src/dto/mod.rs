pub mod diagnostics_dto;
pub mod entity_dto;
