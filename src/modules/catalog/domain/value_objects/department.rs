use async_graphql::Enum;

use super::fold_label;

/// Crew departments used by the `crew(departments:)` filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum Department {
    Acting,
    Art,
    Camera,
    CostumeMakeUp,
    Crew,
    Directing,
    Editing,
    Lighting,
    Production,
    Sound,
    VisualEffects,
    Writing,
}

impl Department {
    pub fn upstream_name(&self) -> &'static str {
        match self {
            Department::Acting => "Acting",
            Department::Art => "Art",
            Department::Camera => "Camera",
            Department::CostumeMakeUp => "Costume & Make-Up",
            Department::Crew => "Crew",
            Department::Directing => "Directing",
            Department::Editing => "Editing",
            Department::Lighting => "Lighting",
            Department::Production => "Production",
            Department::Sound => "Sound",
            Department::VisualEffects => "Visual Effects",
            Department::Writing => "Writing",
        }
    }

    pub fn matches(&self, raw: &str) -> bool {
        fold_label(self.upstream_name()) == fold_label(raw)
    }
}
