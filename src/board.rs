//! Number Board State
//!
//! The list, the delete dialog and the submission status, plus every
//! operation the page performs on them. The selection lives outside this
//! struct (it must not trigger re-renders) and is passed in wherever the
//! list is replaced or filtered, so it can never refer to a value that
//! is no longer shown.

use reactive_stores::Store;

use crate::commands::SubmitError;
use crate::gate::ConfirmGate;
use crate::models::{Notice, RequestStatus};
use crate::selection::SelectionSet;

#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Displayed numbers, in draw order
    pub numbers: Vec<u32>,
    pub gate: ConfirmGate,
    pub status: RequestStatus,
    /// Bumped on every refresh; part of each row's render key
    pub generation: u32,
}

impl BoardState {
    pub fn new(numbers: Vec<u32>) -> Self {
        Self {
            numbers,
            ..Default::default()
        }
    }

    /// Replace the list wholesale.
    ///
    /// An in-flight submission keeps its `Pending` status on purpose, unlike
    /// the page this was modelled on, which reset it to idle here. Only the
    /// request's completion returns the board to `Idle`, so the send button
    /// can never fire a second request while one is outstanding.
    pub fn refresh(&mut self, numbers: Vec<u32>, selection: &mut SelectionSet) {
        selection.clear();
        self.numbers = numbers;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn request_delete(&mut self) {
        self.gate.request();
    }

    pub fn cancel_delete(&mut self) {
        self.gate.cancel();
    }

    /// Apply the selection to the list if the dialog was open.
    /// Returns the removed values in list order.
    pub fn confirm_delete(&mut self, selection: &mut SelectionSet) -> Vec<u32> {
        if !self.gate.confirm() {
            return Vec::new();
        }

        let (removed, kept): (Vec<u32>, Vec<u32>) =
            self.numbers.iter().copied().partition(|&n| selection.contains(n));
        self.numbers = kept;
        selection.clear();
        removed
    }

    pub fn sum(&self) -> u64 {
        sum_of(&self.numbers)
    }

    /// Mark a submission as started and return the sum to send,
    /// or `None` while another one is outstanding.
    pub fn begin_submission(&mut self) -> Option<u64> {
        if self.status.begin() {
            Some(self.sum())
        } else {
            None
        }
    }

    /// Back to idle, whatever the outcome
    pub fn finish_submission(&mut self, result: &Result<(), SubmitError>) -> Notice {
        self.status.finish();
        submission_notice(result)
    }
}

pub fn sum_of(numbers: &[u32]) -> u64 {
    numbers.iter().map(|&n| u64::from(n)).sum()
}

pub fn submission_notice(result: &Result<(), SubmitError>) -> Notice {
    match result {
        Ok(()) => Notice::SumSent,
        Err(e) => {
            log::warn!("[SUBMIT] {}", e);
            Notice::SumFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SumTransport;
    use crate::generator::{generate_numbers, GenerationPolicy, RandomSource};
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct Lcg(u64);

    impl RandomSource for Lcg {
        fn next_unit(&mut self) -> f64 {
            self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (self.0 >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    /// Records sent sums; fails every call when `fail` is set
    #[derive(Default)]
    struct FakeTransport {
        fail: bool,
        sent: RefCell<Vec<u64>>,
    }

    impl SumTransport for FakeTransport {
        async fn post_sum(&self, sum: u64) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(sum);
            if self.fail {
                Err(SubmitError::Transport("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    fn select(selection: &mut SelectionSet, values: &[u32]) {
        for &v in values {
            selection.toggle(v);
        }
    }

    #[test]
    fn test_confirm_delete_scenario() {
        let mut board = BoardState::new(vec![3, 7, 10]);
        let mut selection = SelectionSet::new();
        select(&mut selection, &[7]);

        board.request_delete();
        let removed = board.confirm_delete(&mut selection);

        assert_eq!(removed, vec![7]);
        assert_eq!(board.numbers, vec![3, 10]);
        assert!(selection.is_empty());
        assert!(!board.gate.is_open());
    }

    #[test]
    fn test_confirm_delete_removes_exactly_selected() {
        let mut board = BoardState::new(vec![5, 1, 9, 44, 2, 60]);
        let mut selection = SelectionSet::new();
        select(&mut selection, &[1, 44, 60]);

        board.request_delete();
        board.confirm_delete(&mut selection);

        assert_eq!(board.numbers, vec![5, 9, 2]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_duplicates_removed_by_value() {
        let mut board = BoardState::new(vec![4, 8, 4, 1]);
        let mut selection = SelectionSet::new();
        select(&mut selection, &[4]);

        board.request_delete();
        assert_eq!(board.confirm_delete(&mut selection), vec![4, 4]);
        assert_eq!(board.numbers, vec![8, 1]);
    }

    #[test]
    fn test_cancel_leaves_state_unchanged() {
        let mut board = BoardState::new(vec![3, 7, 10]);
        let mut selection = SelectionSet::new();
        select(&mut selection, &[3, 10]);

        board.request_delete();
        board.cancel_delete();

        assert_eq!(board.numbers, vec![3, 7, 10]);
        assert!(selection.contains(3) && selection.contains(10));
        assert_eq!(selection.len(), 2);
        assert!(!board.gate.is_open());
    }

    #[test]
    fn test_confirm_without_open_dialog_deletes_nothing() {
        let mut board = BoardState::new(vec![3, 7]);
        let mut selection = SelectionSet::new();
        select(&mut selection, &[3]);

        assert!(board.confirm_delete(&mut selection).is_empty());
        assert_eq!(board.numbers, vec![3, 7]);
        assert!(selection.contains(3));
    }

    #[test]
    fn test_refresh_replaces_list_and_clears_selection() {
        let mut rng = Lcg(1);
        let mut board = BoardState::new(generate_numbers(GenerationPolicy::Unique, 10, 100, &mut rng));
        let mut selection = SelectionSet::new();

        for _ in 0..20 {
            let first = board.numbers[0];
            selection.toggle(first);
            let generation = board.generation;

            board.refresh(generate_numbers(GenerationPolicy::Unique, 10, 100, &mut rng), &mut selection);

            assert_eq!(board.numbers.len(), 10);
            assert!(selection.is_empty());
            assert_eq!(board.generation, generation + 1);
        }
    }

    #[test]
    fn test_refresh_keeps_pending_status() {
        let mut board = BoardState::new(vec![1, 2]);
        let mut selection = SelectionSet::new();
        assert_eq!(board.begin_submission(), Some(3));
        board.refresh(vec![50], &mut selection);
        assert!(board.status.is_pending());
        assert_eq!(board.begin_submission(), None);
    }

    #[test]
    fn test_sum_tracks_current_contents() {
        let mut board = BoardState::new(vec![3, 7, 10]);
        assert_eq!(board.sum(), 20);

        let mut selection = SelectionSet::new();
        select(&mut selection, &[10]);
        board.request_delete();
        board.confirm_delete(&mut selection);
        assert_eq!(board.sum(), 10);

        board.refresh(Vec::new(), &mut selection);
        assert_eq!(board.sum(), 0);
    }

    #[test]
    fn test_successful_submission() {
        let mut board = BoardState::new(vec![3, 7, 10]);
        let transport = FakeTransport::default();

        let sum = board.begin_submission().unwrap();
        assert!(board.status.is_pending());
        assert_eq!(board.begin_submission(), None);

        let result = block_on(transport.post_sum(sum));
        let notice = board.finish_submission(&result);

        assert_eq!(notice, Notice::SumSent);
        assert_eq!(board.status, RequestStatus::Idle);
        assert_eq!(*transport.sent.borrow(), vec![20]);
    }

    #[test]
    fn test_rejected_submission_resets_status() {
        let mut board = BoardState::new(vec![3, 7, 10]);
        let transport = FakeTransport { fail: true, ..Default::default() };

        let sum = board.begin_submission().unwrap();
        let result = block_on(transport.post_sum(sum));
        let notice = board.finish_submission(&result);

        assert_eq!(notice, Notice::SumFailed);
        assert_eq!(notice.message(), "Error sending sum...");
        assert_eq!(board.status, RequestStatus::Idle);
        assert_eq!(board.numbers, vec![3, 7, 10]);
    }

    #[test]
    fn test_status_error_is_failure() {
        assert_eq!(submission_notice(&Err(SubmitError::Status(500))), Notice::SumFailed);
        assert_eq!(submission_notice(&Ok(())), Notice::SumSent);
    }
}
