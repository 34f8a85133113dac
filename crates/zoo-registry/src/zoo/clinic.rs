use super::domain::{Animal, Category};

/// Herbivores below this kindness are turned away.
pub const MIN_ADMISSION_KINDNESS: u8 = 2;
/// Predators above this danger are turned away.
pub const MAX_ADMISSION_DANGER: u8 = 7;

/// Outcome of a veterinary examination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectionReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn summary(&self) -> String {
        match self {
            Verdict::Accepted => "accepted".to_string(),
            Verdict::Rejected(reason) => reason.summary(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    Unfriendly { kindness: u8 },
    Dangerous { danger: u8 },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::Unfriendly { kindness } => format!(
                "too unfriendly: kindness {kindness} is below {MIN_ADMISSION_KINDNESS}"
            ),
            RejectionReason::Dangerous { danger } => {
                format!("too dangerous: danger {danger} is above {MAX_ADMISSION_DANGER}")
            }
        }
    }
}

/// Gate consulted before an animal enters the zoo. Implementations must be
/// pure: the same animal always yields the same verdict.
pub trait AdmissionPolicy {
    fn evaluate(&self, animal: &Animal) -> Verdict;

    fn accept(&self, animal: &Animal) -> bool {
        self.evaluate(animal).is_accepted()
    }
}

/// The zoo's veterinary clinic.
#[derive(Debug, Default, Clone, Copy)]
pub struct VeterinaryClinic;

impl AdmissionPolicy for VeterinaryClinic {
    fn evaluate(&self, animal: &Animal) -> Verdict {
        examine(animal.category())
    }
}

fn examine(category: Category) -> Verdict {
    match category {
        Category::Herbivore { kindness } if kindness < MIN_ADMISSION_KINDNESS => {
            Verdict::Rejected(RejectionReason::Unfriendly { kindness })
        }
        Category::Predator { danger } if danger > MAX_ADMISSION_DANGER => {
            Verdict::Rejected(RejectionReason::Dangerous { danger })
        }
        Category::Herbivore { .. } | Category::Predator { .. } => Verdict::Accepted,
    }
}
