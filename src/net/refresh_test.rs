use super::*;

#[test]
fn first_caller_leads() {
    let coordinator = RefreshCoordinator::new();
    assert!(!coordinator.in_flight());
    assert!(matches!(coordinator.begin(), RefreshTicket::Lead));
    assert!(coordinator.in_flight());
}

#[test]
fn second_caller_waits_for_the_leaders_outcome() {
    let coordinator = RefreshCoordinator::new();
    let RefreshTicket::Lead = coordinator.begin() else {
        panic!("expected lead ticket");
    };
    let RefreshTicket::Wait(rx) = coordinator.begin() else {
        panic!("expected wait ticket");
    };
    coordinator.complete(&Ok(()));
    let outcome = futures::executor::block_on(rx).expect("leader dropped without completing");
    assert_eq!(outcome, Ok(()));
}

#[test]
fn every_waiter_receives_the_broadcast_failure() {
    let coordinator = RefreshCoordinator::new();
    let RefreshTicket::Lead = coordinator.begin() else {
        panic!("expected lead ticket");
    };
    let receivers: Vec<_> = (0..3)
        .map(|_| match coordinator.begin() {
            RefreshTicket::Wait(rx) => rx,
            RefreshTicket::Lead => panic!("duplicate leader while in flight"),
        })
        .collect();
    coordinator.complete(&Err("expired".to_owned()));
    for rx in receivers {
        let outcome = futures::executor::block_on(rx).expect("leader dropped without completing");
        assert_eq!(outcome, Err("expired".to_owned()));
    }
}

#[test]
fn complete_closes_the_window_for_a_new_leader() {
    let coordinator = RefreshCoordinator::new();
    let RefreshTicket::Lead = coordinator.begin() else {
        panic!("expected lead ticket");
    };
    coordinator.complete(&Ok(()));
    assert!(!coordinator.in_flight());
    assert!(matches!(coordinator.begin(), RefreshTicket::Lead));
}

#[test]
fn clones_share_the_in_flight_window() {
    let coordinator = RefreshCoordinator::new();
    let sibling = coordinator.clone();
    let RefreshTicket::Lead = coordinator.begin() else {
        panic!("expected lead ticket");
    };
    assert!(sibling.in_flight());
    assert!(matches!(sibling.begin(), RefreshTicket::Wait(_)));
}
