//! Content entity families, all scoped by portfolio (and platform menu
//! for multi-instance sections), each with an item-level visibility flag
//! independent of section-level visibility.

pub mod about;
pub mod architecture;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;

pub use about::{AboutContent, CreateAbout, CreatePrinciple, Principle, UpdateAbout, UpdatePrinciple};
pub use architecture::{
    ArchitectureContent, CreateArchitecture, CreatePillar, CreatePillarPoint, Pillar, PillarPoint,
    UpdateArchitecture, UpdatePillar, UpdatePillarPoint,
};
pub use experience::{CreateExperience, Experience, UpdateExperience};
pub use profile::{HeroContent, PersonInfo, UpdateHero, UpdatePersonInfo};
pub use projects::{CreateProject, Project, UpdateProject};
pub use skills::{CreateSkill, CreateSkillGroup, Skill, SkillGroup, UpdateSkill, UpdateSkillGroup};
