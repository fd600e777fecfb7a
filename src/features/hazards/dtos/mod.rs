mod hazard_dto;

pub use hazard_dto::{
    CreateHazardDto, HazardResponseDto, PopulatedHazardDto, UpdateHazardDto,
};
