#[macro_use]
extern crate assert_matches;

use wordle_player::*;

#[test]
fn get_feedback_all_exact() {
    let feedback = get_feedback("angle", "angle");

    assert_eq!(feedback.unwrap(), vec![LetterFeedback::Exact; 5]);
}

#[test]
fn get_feedback_mixes_exact_and_absent() {
    let feedback = get_feedback("apple", "angle");

    assert_eq!(
        feedback.unwrap(),
        vec![
            LetterFeedback::Exact,
            LetterFeedback::Absent,
            LetterFeedback::Absent,
            LetterFeedback::Exact,
            LetterFeedback::Exact,
        ]
    );
}

#[test]
fn get_feedback_marks_misplaced_letters_present() {
    let feedback = get_feedback("least", "angle");

    assert_eq!(
        feedback.unwrap(),
        vec![
            LetterFeedback::Present,
            LetterFeedback::Present,
            LetterFeedback::Present,
            LetterFeedback::Absent,
            LetterFeedback::Absent,
        ]
    );
}

#[test]
fn get_feedback_none_match() {
    let feedback = get_feedback("brick", "angle");

    assert_eq!(feedback.unwrap(), vec![LetterFeedback::Absent; 5]);
}

#[test]
fn get_feedback_exact_positions_are_independent_of_order() {
    // The multiset of non-exact verdicts depends only on letter membership,
    // not on which end of the word the letters sit at.
    let forwards = get_feedback("nagle", "angle").unwrap();
    let count_present = forwards
        .iter()
        .filter(|letter| **letter == LetterFeedback::Present)
        .count();

    assert_eq!(forwards[2..], [LetterFeedback::Exact; 3]);
    assert_eq!(count_present, 2);
}

#[test]
fn get_feedback_overcounts_repeated_letters() {
    // The target has a single 'l', yet both misplaced 'l's in the guess are
    // marked present in addition to the exact match.
    let feedback = get_feedback("lolly", "angle");

    assert_eq!(
        feedback.unwrap(),
        vec![
            LetterFeedback::Present,
            LetterFeedback::Absent,
            LetterFeedback::Present,
            LetterFeedback::Exact,
            LetterFeedback::Absent,
        ]
    );
}

#[test]
fn get_feedback_length_mismatch() {
    assert_matches!(
        get_feedback("goal", "angle"),
        Err(PlayerError::LengthMismatch {
            guess: 4,
            target: 5
        })
    );
}

#[test]
fn guess_feedback_for_target() {
    let feedback = GuessFeedback::for_target(std::sync::Arc::from("apple"), "angle").unwrap();

    assert_eq!(feedback.guess.as_ref(), "apple");
    assert_eq!(feedback.letters.len(), 5);
}
