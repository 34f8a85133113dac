use crate::zoo::clinic::{AdmissionPolicy, RejectionReason, Verdict};
use crate::zoo::domain::{Animal, Thing};
use crate::zoo::service::ZooService;

pub(super) fn monkey() -> Animal {
    Animal::monkey("Chicha", 3, 1001, 8).expect("valid monkey")
}

pub(super) fn rabbit() -> Animal {
    Animal::rabbit("Bucks", 1, 1002, 6).expect("valid rabbit")
}

pub(super) fn tiger() -> Animal {
    Animal::tiger("Shere Khan", 7, 2001, 9).expect("valid tiger")
}

pub(super) fn wolf() -> Animal {
    Animal::wolf("Grey", 5, 2002, 6).expect("valid wolf")
}

pub(super) fn table() -> Thing {
    Thing::table(3001, "Desk")
}

pub(super) fn computer() -> Thing {
    Thing::computer(3002, "PC")
}

/// Service after the reference intake: three animals admitted, the tiger
/// turned away, two things registered.
pub(super) fn stocked_service() -> ZooService {
    let mut service = ZooService::new();
    for animal in [monkey(), rabbit(), tiger(), wolf()] {
        service.admit(animal);
    }
    service.add_thing(table());
    service.add_thing(computer());
    service
}

#[derive(Debug, Default)]
pub(super) struct AdmitEverything;

impl AdmissionPolicy for AdmitEverything {
    fn evaluate(&self, _animal: &Animal) -> Verdict {
        Verdict::Accepted
    }
}

#[derive(Debug, Default)]
pub(super) struct TurnEveryoneAway;

impl AdmissionPolicy for TurnEveryoneAway {
    fn evaluate(&self, _animal: &Animal) -> Verdict {
        Verdict::Rejected(RejectionReason::Dangerous { danger: 10 })
    }
}
