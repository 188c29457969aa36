//! Property-based tests for the turn engine.
//!
//! These tests use proptest to verify the algebraic laws of face turns
//! from many randomly scrambled starting states.

use proptest::prelude::*;
use std::collections::HashMap;
use twisty::core::{Cell, CubeState, FaceKey, Move, TurnDirection, CUBE_SIZE};
use twisty::engine::{apply, apply_move, rotate_face};
use twisty::{Checkpoint, CubeStore, CubeStoreBuilder};

prop_compose! {
    fn arbitrary_face()(variant in 0..6usize) -> FaceKey {
        FaceKey::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_direction()(inverted in any::<bool>()) -> TurnDirection {
        TurnDirection::from_inverted(inverted)
    }
}

prop_compose! {
    fn arbitrary_move()(face in arbitrary_face(), direction in arbitrary_direction()) -> Move {
        Move::new(face, direction)
    }
}

prop_compose! {
    fn arbitrary_state()(moves in prop::collection::vec(arbitrary_move(), 0..25)) -> CubeState {
        moves
            .into_iter()
            .fold(CubeState::solved(), |state, mv| apply_move(&state, mv))
    }
}

fn cell_multiset(state: &CubeState) -> HashMap<Cell, usize> {
    let mut counts = HashMap::new();
    for cell in state.cells() {
        *counts.entry(*cell).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn four_turns_are_identity(
        state in arbitrary_state(),
        face in arbitrary_face(),
        direction in arbitrary_direction(),
    ) {
        let mut turned = state.clone();
        for _ in 0..4 {
            turned = apply(&turned, face, direction);
        }
        prop_assert_eq!(turned, state);
    }

    #[test]
    fn own_face_rotation_has_order_four(state in arbitrary_state(), face in arbitrary_face()) {
        let original = *state.face(face);
        let mut turned = original;
        for _ in 0..4 {
            turned = rotate_face(&turned, TurnDirection::Clockwise);
        }
        prop_assert_eq!(turned, original);
    }

    #[test]
    fn opposite_direction_undoes_turn(
        state in arbitrary_state(),
        face in arbitrary_face(),
        direction in arbitrary_direction(),
    ) {
        let there = apply(&state, face, direction);
        let back = apply(&there, face, direction.inverse());
        prop_assert_eq!(back, state);
    }

    #[test]
    fn three_clockwise_equal_one_counter_clockwise(
        state in arbitrary_state(),
        face in arbitrary_face(),
    ) {
        let mut thrice = state.clone();
        for _ in 0..3 {
            thrice = apply(&thrice, face, TurnDirection::Clockwise);
        }
        prop_assert_eq!(thrice, apply(&state, face, TurnDirection::CounterClockwise));
    }

    #[test]
    fn turns_conserve_cells(
        state in arbitrary_state(),
        face in arbitrary_face(),
        direction in arbitrary_direction(),
    ) {
        let next = apply(&state, face, direction);

        prop_assert_eq!(cell_multiset(&next), cell_multiset(&state));
        for (_, turned) in next.faces() {
            prop_assert_eq!(turned.cells().count(), CUBE_SIZE * CUBE_SIZE);
        }
        prop_assert!(next.validate().is_success());
    }

    #[test]
    fn turned_own_face_keeps_its_cells(
        state in arbitrary_state(),
        face in arbitrary_face(),
        direction in arbitrary_direction(),
    ) {
        let next = apply(&state, face, direction);
        let mut before: Vec<Cell> = state.face(face).cells().copied().collect();
        let mut after: Vec<Cell> = next.face(face).cells().copied().collect();
        before.sort_by_key(|cell| cell.origin);
        after.sort_by_key(|cell| cell.origin);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn opposite_face_is_unchanged(
        state in arbitrary_state(),
        face in arbitrary_face(),
        direction in arbitrary_direction(),
    ) {
        let next = apply(&state, face, direction);
        prop_assert_eq!(next.face(face.opposite()), state.face(face.opposite()));
    }

    #[test]
    fn neighbour_cells_off_the_border_are_unchanged(
        state in arbitrary_state(),
        face in arbitrary_face(),
        direction in arbitrary_direction(),
    ) {
        let next = apply(&state, face, direction);
        let mid = CUBE_SIZE / 2;
        for (key, turned) in next.faces() {
            prop_assert_eq!(turned.cell(mid, mid), state.face(key).cell(mid, mid));
        }
    }

    #[test]
    fn store_agrees_with_engine(
        moves in prop::collection::vec(arbitrary_move(), 0..20),
    ) {
        let mut store = CubeStore::new();
        let mut expected = CubeState::solved();
        for mv in &moves {
            if store.direction() != mv.direction {
                store.toggle_direction();
            }
            store.turn(mv.face);
            expected = apply_move(&expected, *mv);
        }
        prop_assert_eq!(store.state(), &expected);
        prop_assert_eq!(store.turn_count(), moves.len() as u64);
    }

    #[test]
    fn reachable_states_build_and_resume(state in arbitrary_state(), inverted in any::<bool>()) {
        let store = CubeStoreBuilder::new()
            .state(state.clone())
            .inverted(inverted)
            .build()
            .unwrap();

        let json = store.checkpoint().to_json().unwrap();
        let resumed = CubeStore::resume(Checkpoint::from_json(&json).unwrap()).unwrap();
        prop_assert_eq!(resumed.state(), &state);
        prop_assert_eq!(resumed.is_inverted(), inverted);
    }
}
