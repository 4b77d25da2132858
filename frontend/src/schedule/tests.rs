use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =========================================================
// Virtual-clock scheduler
// =========================================================

struct Pending {
    due: u64,
    order: u64,
    job: Box<dyn FnOnce()>,
}

/// Runs deferred jobs only when the test advances the clock.
#[derive(Default)]
struct ManualScheduler {
    now: Cell<u64>,
    inserted: Cell<u64>,
    queue: RefCell<Vec<Pending>>,
}

impl ManualScheduler {
    fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Advance the clock, running every job that becomes due in (due, insertion) order.
    fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                let idx = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.order))
                    .map(|(i, _)| i);
                idx.map(|i| queue.remove(i))
            };
            match next {
                Some(pending) => {
                    self.now.set(pending.due);
                    (pending.job)();
                }
                None => break,
            }
        }
        self.now.set(target);
    }

    /// Drop everything still queued, like a torn-down page.
    fn teardown(&self) {
        self.queue.borrow_mut().clear();
    }
}

impl Scheduler for Rc<ManualScheduler> {
    fn defer(&self, delay_ms: u32, job: Box<dyn FnOnce() + 'static>) {
        let order = self.inserted.get();
        self.inserted.set(order + 1);
        self.queue.borrow_mut().push(Pending {
            due: self.now.get() + u64::from(delay_ms),
            order,
            job,
        });
    }
}

fn setup() -> (Rc<ManualScheduler>, Guard<Rc<ManualScheduler>>) {
    let scheduler = Rc::new(ManualScheduler::default());
    let guard = Guard::new(scheduler.clone(), GuardConfig::default());
    (scheduler, guard)
}

fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> Task {
    let log = log.clone();
    Box::new(move || {
        log.borrow_mut().push(name);
        Ok(())
    })
}

// =========================================================
// Tests
// =========================================================

#[test]
fn guard_runs_after_default_delay() {
    let (scheduler, guard) = setup();
    let ran = Rc::new(Cell::new(false));

    let flag = ran.clone();
    let handle = guard.defer(move || {
        flag.set(true);
        Ok(())
    });
    assert_eq!(handle.delay_ms, 100);

    scheduler.advance(99);
    assert!(!ran.get());
    scheduler.advance(1);
    assert!(ran.get());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn batch_preserves_input_order_with_strict_stagger() {
    let (scheduler, guard) = setup();
    let log = Rc::new(RefCell::new(Vec::new()));

    let handles = guard.batch(vec![
        recorder(&log, "a"),
        recorder(&log, "b"),
        recorder(&log, "c"),
    ]);

    let delays: Vec<_> = handles.iter().map(|h| h.delay_ms).collect();
    assert_eq!(delays, vec![0, 50, 100]);
    assert!(handles.windows(2).all(|w| w[0].seq < w[1].seq));

    scheduler.advance(0);
    assert_eq!(*log.borrow(), vec!["a"]);
    scheduler.advance(100);
    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
}

#[test]
fn failing_task_does_not_stop_the_batch() {
    let (scheduler, guard) = setup();
    let log = Rc::new(RefCell::new(Vec::new()));

    let tasks: Vec<Task> = vec![
        recorder(&log, "a"),
        Box::new(|| Err(TaskError::failed("node detached"))),
        Box::new(|| panic!("boom")),
        recorder(&log, "d"),
    ];
    guard.batch(tasks);

    scheduler.advance(1_000);
    assert_eq!(*log.borrow(), vec!["a", "d"]);
}

#[test]
fn each_task_runs_exactly_once() {
    let (scheduler, guard) = setup();
    let count = Rc::new(Cell::new(0));

    let counter = count.clone();
    guard.guard(
        move || {
            counter.set(counter.get() + 1);
            Ok(())
        },
        10,
    );

    scheduler.advance(10);
    scheduler.advance(1_000);
    assert_eq!(count.get(), 1);
}

#[test]
fn teardown_before_delay_is_not_an_error() {
    let (scheduler, guard) = setup();
    let ran = Rc::new(Cell::new(false));

    let flag = ran.clone();
    guard.defer(move || {
        flag.set(true);
        Ok(())
    });
    scheduler.teardown();
    scheduler.advance(1_000);
    assert!(!ran.get());
}

#[test]
fn sequence_numbers_span_calls() {
    let (_scheduler, guard) = setup();
    let first = guard.defer(|| Ok(()));
    let batch = guard.batch(vec![Box::new(|| Ok(())) as Task, Box::new(|| Ok(())) as Task]);
    assert_eq!(first.seq, 0);
    assert_eq!(batch.iter().map(|h| h.seq).collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn panic_message_is_extracted() {
    assert_eq!(panic_message(&"static"), "static");
    assert_eq!(panic_message(&String::from("owned")), "owned");
    assert_eq!(panic_message(&42u8), "unknown panic");
}
