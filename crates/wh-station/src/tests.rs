//! Unit tests for wh-station.

#[cfg(test)]
mod claims {
    use wh_core::{AgentId, Cell, SlotId};

    use crate::{StationKind, StationSet};

    fn two_slot_set() -> StationSet {
        StationSet::new(
            StationKind::Loader,
            vec![Cell::new(0, 0), Cell::new(0, 5)],
        )
    }

    #[test]
    fn claim_free_slot_succeeds() {
        let mut s = two_slot_set();
        assert!(!s.is_taken(SlotId(0)));
        assert!(s.claim_if_free(SlotId(0), AgentId(1)));
        assert!(s.is_taken(SlotId(0)));
        assert_eq!(s.holder_of(SlotId(0)), Some(AgentId(1)));
    }

    #[test]
    fn claim_taken_slot_fails() {
        let mut s = two_slot_set();
        assert!(s.claim_if_free(SlotId(0), AgentId(1)));
        assert!(!s.claim_if_free(SlotId(0), AgentId(2)));
        assert_eq!(s.holder_of(SlotId(0)), Some(AgentId(1)));
    }

    #[test]
    fn release_only_by_holder() {
        let mut s = two_slot_set();
        s.claim_if_free(SlotId(0), AgentId(1));
        s.release_if_holder(SlotId(0), AgentId(2)); // not the holder — no-op
        assert_eq!(s.holder_of(SlotId(0)), Some(AgentId(1)));
        s.release_if_holder(SlotId(0), AgentId(1));
        assert_eq!(s.holder_of(SlotId(0)), None);
    }

    #[test]
    fn slots_are_independent() {
        let mut s = two_slot_set();
        assert!(s.claim_if_free(SlotId(0), AgentId(1)));
        assert!(s.claim_if_free(SlotId(1), AgentId(2)));
        s.release_if_holder(SlotId(0), AgentId(1));
        assert_eq!(s.holder_of(SlotId(1)), Some(AgentId(2)));
    }

    #[test]
    fn cell_lookup() {
        let s = two_slot_set();
        assert_eq!(s.cell(SlotId(1)), Cell::new(0, 5));
        assert!(s.contains_cell(Cell::new(0, 0)));
        assert!(!s.contains_cell(Cell::new(1, 1)));
    }
}

#[cfg(test)]
mod queues {
    use wh_core::{AgentId, Cell, SlotId};

    use crate::{StationKind, StationSet};

    fn one_slot_set() -> StationSet {
        StationSet::new(StationKind::Charger, vec![Cell::new(3, 3)])
    }

    #[test]
    fn fifo_promotion_order() {
        let mut s = one_slot_set();
        s.claim_if_free(SlotId(0), AgentId(0));
        s.enqueue(SlotId(0), AgentId(1));
        s.enqueue(SlotId(0), AgentId(2));
        s.enqueue(SlotId(0), AgentId(3));
        assert_eq!(s.queue_len(SlotId(0)), 3);

        // Holder still present — pop must refuse.
        assert_eq!(s.pop_next(SlotId(0)), None);

        s.release_if_holder(SlotId(0), AgentId(0));
        assert_eq!(s.pop_next(SlotId(0)), Some(AgentId(1)));
        assert_eq!(s.holder_of(SlotId(0)), Some(AgentId(1)));

        // The promoted agent is the holder now, so another pop refuses.
        assert_eq!(s.pop_next(SlotId(0)), None);

        s.release_if_holder(SlotId(0), AgentId(1));
        assert_eq!(s.pop_next(SlotId(0)), Some(AgentId(2)));
        s.release_if_holder(SlotId(0), AgentId(2));
        assert_eq!(s.pop_next(SlotId(0)), Some(AgentId(3)));
        s.release_if_holder(SlotId(0), AgentId(3));
        assert_eq!(s.pop_next(SlotId(0)), None);
    }

    #[test]
    fn double_enqueue_ignored() {
        let mut s = one_slot_set();
        s.claim_if_free(SlotId(0), AgentId(0));
        s.enqueue(SlotId(0), AgentId(1));
        s.enqueue(SlotId(0), AgentId(1));
        assert_eq!(s.queue_len(SlotId(0)), 1);
    }

    #[test]
    fn holder_cannot_enqueue_on_own_slot() {
        let mut s = one_slot_set();
        s.claim_if_free(SlotId(0), AgentId(7));
        s.enqueue(SlotId(0), AgentId(7));
        assert_eq!(s.queue_len(SlotId(0)), 0);
    }

    #[test]
    fn pop_on_empty_queue_is_none() {
        let mut s = one_slot_set();
        assert_eq!(s.pop_next(SlotId(0)), None);
    }

    #[test]
    fn shortest_queue_prefers_lowest_index_on_ties() {
        let mut s = StationSet::new(
            StationKind::Dump,
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
        );
        assert_eq!(s.shortest_queue(), SlotId(0));

        s.enqueue(SlotId(0), AgentId(1));
        assert_eq!(s.shortest_queue(), SlotId(1));

        s.enqueue(SlotId(1), AgentId(2));
        s.enqueue(SlotId(2), AgentId(3));
        s.enqueue(SlotId(2), AgentId(4));
        // Queue lengths now 1, 1, 2 — lowest index among the ties wins.
        assert_eq!(s.shortest_queue(), SlotId(0));
    }
}
