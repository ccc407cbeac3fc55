//! Built-in reference data, used when no `REFERENCE_DATA_PATH` is configured.

use pathwise_algo::{ConceptHierarchy, Modality, ResourceCatalog};

const HIERARCHY: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Physics",
        &[
            ("foundational", &["Kinematics", "Laws of Motion", "Work and Energy"]),
            ("intermediate", &["Gravitation", "Optics"]),
            ("advanced", &["Electromagnetism", "Quantum Mechanics"]),
        ],
    ),
    (
        "Biology",
        &[
            ("foundational", &["Cell Structure", "Basic Biochemistry"]),
            ("intermediate", &["Genetics", "Photosynthesis", "Respiration"]),
            ("advanced", &["Evolution", "Ecology"]),
        ],
    ),
    (
        "Mathematics",
        &[
            ("foundational", &["Basic Algebra", "Basic Geometry"]),
            ("intermediate", &["Linear Equations", "Trigonometry", "Calculus Basics"]),
            ("advanced", &["Differential Equations", "Linear Algebra"]),
        ],
    ),
    (
        "Chemistry",
        &[
            ("foundational", &["Atomic Structure", "Periodic Table", "Chemical Bonding"]),
            ("intermediate", &["Chemical Reactions", "Stoichiometry", "Acids and Bases"]),
            ("advanced", &["Organic Chemistry", "Thermodynamics"]),
        ],
    ),
];

/// (concept, visual, auditory, interactive)
const RESOURCES: &[(&str, &[&str], &[&str], &[&str])] = &[
    (
        "Kinematics",
        &["Kinematics Diagrams", "Motion Graphs"],
        &["Kinematics Audio Lecture"],
        &["Kinematics Simulation"],
    ),
    (
        "Laws of Motion",
        &["Newton's Laws Diagrams"],
        &["Newton's Laws Explanation"],
        &["Force and Motion Lab"],
    ),
    (
        "Cell Structure",
        &["Cell Diagrams", "Microscope Images"],
        &["Cell Biology Lecture"],
        &["Virtual Cell Tour"],
    ),
    (
        "Genetics",
        &["Punnett Squares", "DNA Structure"],
        &["Genetics Explanation"],
        &["DNA Replication Game"],
    ),
    (
        "Basic Algebra",
        &["Algebraic Equations", "Graphing"],
        &["Algebra Basics"],
        &["Algebra Practice"],
    ),
    (
        "Basic Geometry",
        &["Geometric Shapes", "Theorems"],
        &["Geometry Basics"],
        &["Geometry Tool"],
    ),
    (
        "Atomic Structure",
        &["Atomic Models", "Electron Configuration"],
        &["Atomic Structure Explanation"],
        &["Build an Atom"],
    ),
    (
        "Periodic Table",
        &["Periodic Table", "Element Trends"],
        &["Periodic Table Explanation"],
        &["Periodic Table Game"],
    ),
];

pub fn builtin_hierarchy() -> ConceptHierarchy {
    HIERARCHY
        .iter()
        .fold(ConceptHierarchy::new(), |hierarchy, (subject, levels)| {
            levels.iter().fold(hierarchy, |h, (level, concepts)| {
                h.with_level(subject, level, concepts.iter().copied())
            })
        })
}

pub fn builtin_catalog() -> ResourceCatalog {
    RESOURCES
        .iter()
        .fold(ResourceCatalog::new(), |catalog, (concept, visual, auditory, interactive)| {
            catalog
                .with_resources(concept, Modality::Visual, visual.iter().copied())
                .with_resources(concept, Modality::Auditory, auditory.iter().copied())
                .with_resources(concept, Modality::Interactive, interactive.iter().copied())
        })
}
