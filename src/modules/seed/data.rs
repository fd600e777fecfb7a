/// Fixed sample category
#[derive(Debug, Clone, Copy)]
pub struct SeedCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// Fixed sample hazard, linked to its category by name
#[derive(Debug, Clone, Copy)]
pub struct SeedHazard {
    pub name: &'static str,
    pub description: &'static str,
    pub severity: i32,
    pub category: &'static str,
}

pub const CATEGORIES: &[SeedCategory] = &[
    SeedCategory {
        name: "Fire Hazard",
        description: "Hazards related to fires, explosions, and flammable materials.",
        color: "#FF4500",
    },
    SeedCategory {
        name: "Chemical Hazard",
        description: "Risks caused by exposure to hazardous chemicals, gases, or toxic substances.",
        color: "#8B0000",
    },
    SeedCategory {
        name: "Electrical Hazard",
        description: "Dangers associated with electrical equipment, wiring, and power sources.",
        color: "#FFD700",
    },
    SeedCategory {
        name: "Biological Hazard",
        description: "Health risks from bacteria, viruses, fungi, or other biological agents.",
        color: "#228B22",
    },
    SeedCategory {
        name: "Radiation Hazard",
        description: "Exposure risks from radioactive materials or radiation-emitting equipment.",
        color: "#9400D3",
    },
    SeedCategory {
        name: "Physical Hazard",
        description: "Injuries caused by slips, trips, falls, noise, or moving machinery.",
        color: "#4682B4",
    },
    SeedCategory {
        name: "Ergonomic Hazard",
        description: "Risks resulting from poor posture, repetitive movements, or improper workstation setup.",
        color: "#20B2AA",
    },
    SeedCategory {
        name: "Environmental Hazard",
        description: "Hazards that impact the environment such as pollution, waste, or climate-related risks.",
        color: "#2E8B57",
    },
];

pub const HAZARDS: &[SeedHazard] = &[
    SeedHazard {
        name: "Open Flame Exposure",
        description: "Risk of burns or fire caused by uncontrolled open flames in the workplace.",
        severity: 5,
        category: "Fire Hazard",
    },
    SeedHazard {
        name: "Flammable Material Storage",
        description: "Improper storage of flammable materials increasing the risk of ignition.",
        severity: 4,
        category: "Fire Hazard",
    },
    SeedHazard {
        name: "Toxic Chemical Spill",
        description: "Exposure to harmful chemicals due to accidental spills or leaks.",
        severity: 5,
        category: "Chemical Hazard",
    },
    SeedHazard {
        name: "Corrosive Substance Handling",
        description: "Skin or eye injuries from improper handling of corrosive substances.",
        severity: 4,
        category: "Chemical Hazard",
    },
    SeedHazard {
        name: "Exposed Electrical Wiring",
        description: "Risk of electric shock due to damaged or exposed wiring.",
        severity: 5,
        category: "Electrical Hazard",
    },
    SeedHazard {
        name: "Overloaded Power Circuits",
        description: "Fire or shock hazard caused by excessive electrical load on circuits.",
        severity: 4,
        category: "Electrical Hazard",
    },
    SeedHazard {
        name: "Airborne Pathogen Exposure",
        description: "Risk of illness from inhalation of airborne biological agents.",
        severity: 4,
        category: "Biological Hazard",
    },
    SeedHazard {
        name: "Contaminated Waste Handling",
        description: "Exposure to infectious materials during waste disposal.",
        severity: 3,
        category: "Biological Hazard",
    },
    SeedHazard {
        name: "Ionizing Radiation Exposure",
        description: "Health risks from prolonged exposure to ionizing radiation sources.",
        severity: 5,
        category: "Radiation Hazard",
    },
    SeedHazard {
        name: "Unshielded Radiation Equipment",
        description: "Radiation exposure due to inadequate shielding on equipment.",
        severity: 4,
        category: "Radiation Hazard",
    },
    SeedHazard {
        name: "Slippery Floor Surface",
        description: "Risk of slips and falls caused by wet or uneven flooring.",
        severity: 3,
        category: "Physical Hazard",
    },
    SeedHazard {
        name: "Moving Machinery Parts",
        description: "Injury risk from contact with unguarded moving machinery.",
        severity: 5,
        category: "Physical Hazard",
    },
    SeedHazard {
        name: "Repetitive Motion Strain",
        description: "Muscle or joint injuries caused by repetitive movements over time.",
        severity: 3,
        category: "Ergonomic Hazard",
    },
    SeedHazard {
        name: "Improper Workstation Setup",
        description: "Back and neck strain caused by poorly designed workstations.",
        severity: 2,
        category: "Ergonomic Hazard",
    },
    SeedHazard {
        name: "Air Pollution Exposure",
        description: "Health risks caused by prolonged exposure to polluted air.",
        severity: 4,
        category: "Environmental Hazard",
    },
    SeedHazard {
        name: "Improper Waste Disposal",
        description: "Environmental contamination due to unsafe waste disposal practices.",
        severity: 3,
        category: "Environmental Hazard",
    },
];
