//! Unit tests for office-entity.

use office_core::{Capability, ClientClass, ClientId, Requirement, SimTime, WorkerId, WorkerSpec};

use crate::Client;

fn client(id: u32, requirement: Option<Requirement>, arrival: f64) -> Client {
    let mut c = Client::new(ClientId(id), ClientClass::A, SimTime(arrival));
    c.requirement = requirement;
    c
}

#[cfg(test)]
mod call_queue {
    use super::*;
    use crate::CallQueue;

    #[test]
    fn push_fills_first_empty_slot() {
        let mut q = CallQueue::new(2);
        assert_eq!(q.capacity(), 3);
        assert_eq!(q.push(ClientId(1)), Some(0));
        assert_eq!(q.push(ClientId(2)), Some(1));
        assert_eq!(q.push(ClientId(3)), Some(2));
        assert!(q.is_full());
        assert_eq!(q.push(ClientId(4)), None);
    }

    #[test]
    fn advance_compacts_in_order() {
        let mut q = CallQueue::new(2);
        for i in 1..=3 {
            q.push(ClientId(i));
        }
        assert_eq!(q.advance(), Some(ClientId(2)));
        assert_eq!(q.slots(), &[Some(ClientId(2)), Some(ClientId(3)), None]);
        assert!(q.is_compact());
        assert_eq!(q.advance(), Some(ClientId(3)));
        assert_eq!(q.advance(), None);
        assert!(q.is_empty());
        assert!(q.is_compact());
    }

    #[test]
    fn zero_depth_has_one_slot() {
        let mut q = CallQueue::new(0);
        assert_eq!(q.push(ClientId(9)), Some(0));
        assert!(q.is_full());
        assert_eq!(q.len(), 1);
        assert_eq!(q.occupants().collect::<Vec<_>>(), vec![ClientId(9)]);
    }
}

#[cfg(test)]
mod worker {
    use super::*;
    use crate::{Worker, WorkerStatus};

    fn worker(capability: Capability, break_start: f64, depth: usize) -> Worker {
        Worker::new(WorkerId(0), &WorkerSpec::new(capability, break_start), depth)
    }

    #[test]
    fn call_signals_start_only_for_idle_head() {
        let mut w = worker(Capability::Combined, 12.0, 1);
        assert!(w.call(ClientId(1)), "idle worker with empty queue starts at once");
        w.begin_service();
        assert_eq!(w.status(), WorkerStatus::Serving);
        assert!(!w.call(ClientId(2)), "second client only waits in slot 1");
        assert!(!w.accepts_calls());
    }

    #[test]
    fn finish_then_next_pulls_held_client() {
        let mut w = worker(Capability::Combined, 12.0, 1);
        w.call(ClientId(1));
        w.begin_service();
        w.call(ClientId(2));
        w.finish_service();
        assert_eq!(w.next(), Some(ClientId(2)));
        assert_eq!(w.queue().slots(), &[Some(ClientId(2)), None]);
        w.begin_service();
        w.finish_service();
        assert_eq!(w.next(), None);
        assert_eq!(w.status(), WorkerStatus::Idle);
    }

    #[test]
    fn break_is_taken_once_at_or_after_start() {
        let mut w = worker(Capability::Sales, 12.0, 1);
        assert!(!w.start_break_if_due(SimTime(11.99)));
        assert!(w.start_break_if_due(SimTime(12.0)));
        assert_eq!(w.status(), WorkerStatus::OnBreak);
        assert!(!w.accepts_calls());
        assert_eq!(w.end_break(), None);
        assert_eq!(w.status(), WorkerStatus::Idle);
        assert!(!w.start_break_if_due(SimTime(15.0)), "only one break per run");
        assert!(w.took_break());
    }

    #[test]
    fn end_break_reports_queued_head() {
        let mut w = worker(Capability::Support, 10.0, 1);
        w.call(ClientId(1));
        w.begin_service();
        w.call(ClientId(2));
        w.finish_service();
        assert_eq!(w.next(), Some(ClientId(2)));
        assert!(w.start_break_if_due(SimTime(10.5)));
        assert_eq!(w.end_break(), Some(ClientId(2)));
    }

    #[test]
    fn capability_filter() {
        let w = worker(Capability::Support, 12.0, 1);
        assert!(!w.can_serve(Requirement::Sale));
        assert!(w.can_serve(Requirement::Inquiry));
    }
}

#[cfg(test)]
mod totem {
    use super::*;
    use crate::{Totem, TotemStatus};

    #[test]
    fn tickets_increase_per_class_from_one() {
        let mut t = Totem::new();
        let mut issued = Vec::new();
        for _ in 0..3 {
            t.accept();
            issued.push(t.issue_ticket(ClientClass::A));
        }
        t.accept();
        assert_eq!(t.issue_ticket(ClientClass::B), 1);
        assert_eq!(issued, vec![1, 2, 3]);
        assert_eq!(t.issued(ClientClass::A), 3);
        assert_eq!(t.issued(ClientClass::C), 0);
    }

    #[test]
    fn state_machine() {
        let mut t = Totem::new();
        assert!(t.is_free());
        t.accept();
        assert_eq!(t.status(), TotemStatus::Issuing);
        assert!(!t.resume(), "resume only applies to a halted kiosk");
        assert_eq!(t.status(), TotemStatus::Issuing);
        t.issue_ticket(ClientClass::C);
        t.halt();
        assert_eq!(t.status(), TotemStatus::Halted);
        assert!(t.resume());
        assert!(t.is_free());
    }
}

#[cfg(test)]
mod room {
    use super::*;
    use crate::WaitingRoom;

    #[test]
    fn capacity_tracking() {
        let mut r = WaitingRoom::new(2);
        r.insert(ClientId(1));
        assert!(!r.is_full());
        r.insert(ClientId(2));
        assert!(r.is_full());
        assert!(r.remove(ClientId(1)));
        assert!(!r.remove(ClientId(1)));
        assert_eq!(r.members(), &[ClientId(2)]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn overflow_asserts() {
        let mut r = WaitingRoom::new(1);
        r.insert(ClientId(1));
        r.insert(ClientId(2));
    }
}

#[cfg(test)]
mod client {
    use super::*;
    use crate::{ExitKind, Stage};

    #[test]
    fn served_journey() {
        let mut c = client(0, None, 9.0);
        assert_eq!(c.stage, Stage::KioskLine);
        c.stage = Stage::Ticketing;
        c.enter_room(SimTime(9.1), 1, Requirement::Sale);
        assert_eq!(c.to_string(), "A-1");
        c.stage = Stage::Called(WorkerId(2));
        c.start_service(SimTime(9.2), 100.0);
        c.finish_service(SimTime(9.3), WorkerId(2));
        assert!(c.has_exited());
        assert_eq!(c.exit_kind, Some(ExitKind::Served));
        assert_eq!(c.exit_time, Some(SimTime(9.3)));
        assert_eq!(c.served_by, Some(WorkerId(2)));
        assert_eq!(c.price, Some(100.0));
    }

    #[test]
    fn abandonment_records_penalty() {
        let mut c = client(4, None, 9.0);
        c.abandon(SimTime(9.5), -100_000.0);
        assert_eq!(c.exit_kind, Some(ExitKind::Abandoned));
        assert_eq!(c.price, Some(-100_000.0));
        assert_eq!(c.ticket, None);
        assert_eq!(c.to_string(), "A-#4");
    }
}

#[cfg(test)]
mod priority {
    use std::cmp::Ordering;

    use super::*;
    use crate::priority_cmp;

    #[test]
    fn sales_first_then_inquiry_then_claim() {
        let sale = client(0, Some(Requirement::Sale), 10.0);
        let inquiry = client(1, Some(Requirement::Inquiry), 9.0);
        let claim = client(2, Some(Requirement::Claim), 8.0);
        let mut v = vec![claim.clone(), inquiry.clone(), sale.clone()];
        v.sort_by(priority_cmp);
        let ids: Vec<_> = v.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn earlier_arrival_within_class() {
        let early = client(5, Some(Requirement::Claim), 9.0);
        let late = client(3, Some(Requirement::Claim), 9.5);
        assert_eq!(priority_cmp(&early, &late), Ordering::Less);
    }

    #[test]
    fn exact_ties_broken_by_id() {
        let a = client(1, Some(Requirement::Sale), 9.0);
        let b = client(2, Some(Requirement::Sale), 9.0);
        assert_eq!(priority_cmp(&a, &b), Ordering::Less);
        assert_eq!(priority_cmp(&b, &a), Ordering::Greater);
        assert_eq!(priority_cmp(&a, &a), Ordering::Equal);
    }
}
