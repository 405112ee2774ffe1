//! End-to-end behavior of the railyard engine

mod common;

use railyard::domain::{Departure, MoveError, Tag};
use railyard::util::testing;

use common::{apply, symbols, yard};

// ============================================================
// Departure scenarios
// ============================================================

#[test]
fn given_train_with_uniform_cars_when_moved_to_empty_track_then_it_departs() {
    testing::init_test_setup();
    // Track 1: locomotive, 1, 1 (front to rear), capacity 3
    // Track 2: empty, capacity 4
    let mut y = yard("-11T-\n------\n");
    assert_eq!(y.locomotive_count(), 1);

    let outcome = apply(&mut y, "move 1 1 2").unwrap();

    assert_eq!(
        outcome.departure,
        Some(Departure {
            track: 2,
            car_count: 1,
            destination: Tag::new('1').unwrap(),
        })
    );
    assert!(outcome.yard_exhausted);
    assert_eq!(symbols(&y, 1), "1");
    assert_eq!(symbols(&y, 2), "");
    assert_eq!(y.locomotive_count(), 0);
    assert!(!y.should_continue());
}

#[test]
fn given_mixed_train_when_moved_then_it_stays_until_uniform() {
    let mut y = yard("-BAT-\n--------\n-------\n");

    let first = apply(&mut y, "move 2 1 2").unwrap();
    assert_eq!(first.departure, None);
    assert_eq!(symbols(&y, 2), "TAB");

    // Leave the B behind: the A car alone is a uniform train.
    let mut z = yard("-BAT-\n-----\n");
    let outcome = apply(&mut z, "move 1 1 2").unwrap();
    assert_eq!(outcome.departure.map(|d| d.destination.symbol()), Some('A'));
    assert_eq!(symbols(&z, 1), "B");
}

#[test]
fn given_cars_waiting_on_destination_when_train_arrives_then_they_are_coupled_behind() {
    // Track 2 already holds two A cars; the train brings one more A.
    let mut y = yard("-AT-\n-----AA-\n");

    let outcome = apply(&mut y, "move 1 1 2").unwrap();

    let departure = outcome.departure.unwrap();
    assert_eq!(departure.car_count, 3);
    assert_eq!(departure.destination, Tag::new('A').unwrap());
    assert_eq!(y.total_cars(), 0);
}

#[test]
fn given_remaining_locomotives_when_train_departs_then_yard_is_not_exhausted() {
    let mut y = yard("-AT-\n-----\n--T-\n");
    let outcome = apply(&mut y, "move 1 1 2").unwrap();
    assert!(outcome.departure.is_some());
    assert!(!outcome.yard_exhausted);
    assert!(y.should_continue());
}

#[test]
fn given_locomotive_moved_alone_when_destination_is_empty_then_nothing_departs() {
    let mut y = yard("-AT-\n----\n");
    let outcome = apply(&mut y, "move 0 1 2").unwrap();
    assert_eq!(outcome.departure, None);
    assert_eq!(symbols(&y, 2), "T");
}

#[test]
fn given_locomotive_pulled_back_when_cars_left_behind_then_remainder_keeps_order() {
    let mut y = yard("-CBAT-\n-------\n-------\n");

    apply(&mut y, "move 0 1 2").unwrap();
    assert_eq!(symbols(&y, 1), "ABC");
    assert_eq!(symbols(&y, 2), "T");
    assert_eq!(y.locomotive_count(), 1);
    assert_eq!(y.destination_count(), 3);
}

// ============================================================
// Rejections
// ============================================================

#[test]
fn given_too_few_cars_when_moving_five_then_insufficient_cars_and_state_unchanged() {
    let mut y = yard("-11T-\n----------\n");
    let before = y.snapshot();

    let err = apply(&mut y, "move 5 1 2").unwrap_err();

    assert_eq!(
        err,
        MoveError::InsufficientCarsOnSource {
            count: 5,
            from: 1,
            available: 2
        }
    );
    assert_eq!(y.snapshot(), before);
}

#[test]
fn given_locomotive_on_destination_when_moving_then_rejected_and_state_unchanged() {
    let mut y = yard("-AT-\n----BT-\n");
    let before = y.snapshot();

    let err = apply(&mut y, "move 1 1 2").unwrap_err();

    assert_eq!(err, MoveError::LocomotiveAlreadyAtDestination { to: 2 });
    assert_eq!(y.snapshot(), before);
}

#[test]
fn given_destination_exactly_full_when_moving_then_one_slot_is_held_back() {
    // Train of 2 into an empty track of capacity 2 needs 2 + 1 slots.
    let mut y = yard("-AT-\n----\n");
    let err = apply(&mut y, "move 1 1 2").unwrap_err();
    assert_eq!(
        err,
        MoveError::InsufficientSpaceAtDestination {
            count: 1,
            to: 2,
            capacity: 2
        }
    );

    // Capacity 3 is enough.
    let mut y = yard("-AT-\n-----\n");
    assert!(apply(&mut y, "move 1 1 2").is_ok());
}

#[test]
fn given_error_messages_when_displayed_then_they_name_the_offending_values() {
    let mut y = yard("-AT-\n---B-\n");
    assert_eq!(
        apply(&mut y, "move 1 2 1").unwrap_err().to_string(),
        "Cannot move from track 2 because it doesn't have a locomotive."
    );
    assert_eq!(
        apply(&mut y, "move 1 1 2").unwrap_err().to_string(),
        "Cannot move 1 cars to track 2 because it doesn't have enough space."
    );
    assert_eq!(
        apply(&mut y, "move one 1 2").unwrap_err().to_string(),
        "Could not convert the 'count' value to an integer: 'one'"
    );
    assert_eq!(
        apply(&mut y, "move 1 1 3").unwrap_err().to_string(),
        "The to-track or from-track number is invalid."
    );
}
