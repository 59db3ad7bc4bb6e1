//! Cooperative tic scheduler.
//!
//! Owns every live task and advances them one tic at a time:
//! - tasks run in registration order
//! - a task sleeping `n` tics is skipped until its countdown expires
//! - tasks spawned during a tic join the end of the list and first run on
//!   the next tic
//! - finished tasks are dropped at the end of the tic

use crate::canvas::Canvas;
use crate::task::{Context, Step, Task, TaskKind};
use crate::world::World;

#[derive(Debug)]
struct Slot {
    task: Box<dyn Task>,
    countdown: u32,
    done: bool,
}

/// Runs tasks on a shared tic clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    slots: Vec<Slot>,
    spawned: Vec<Box<dyn Task>>,
    tic: u64,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a task. It runs on the next tic.
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.spawn_boxed(Box::new(task));
    }

    /// Register an already boxed task.
    pub fn spawn_boxed(&mut self, task: Box<dyn Task>) {
        self.slots.push(Slot {
            task,
            countdown: 0,
            done: false,
        });
    }

    /// Advance every task whose sleep has expired by one step.
    pub fn tick(&mut self, world: &mut World, canvas: &mut dyn Canvas) {
        self.tic += 1;

        for slot in &mut self.slots {
            if slot.countdown > 1 {
                slot.countdown -= 1;
                continue;
            }
            let mut ctx = Context::new(world, canvas, &mut self.spawned);
            match slot.task.resume(&mut ctx) {
                Step::Sleep(tics) => slot.countdown = tics.max(1),
                Step::Done => slot.done = true,
            }
        }

        let before = self.slots.len();
        self.slots.retain(|slot| !slot.done);
        let finished = before - self.slots.len();
        let started = self.spawned.len();
        for task in self.spawned.drain(..) {
            self.slots.push(Slot {
                task,
                countdown: 0,
                done: false,
            });
        }

        log::trace!(
            "tic {}: {} tasks ({started} started, {finished} finished)",
            self.tic,
            self.slots.len()
        );
    }

    /// Number of tics run so far.
    #[must_use]
    pub const fn tic(&self) -> u64 {
        self.tic
    }

    /// Number of live tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no tasks remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether any live task is of `kind`.
    #[must_use]
    pub fn contains(&self, kind: TaskKind) -> bool {
        self.slots.iter().any(|slot| slot.task.kind() == kind)
    }

    /// Number of live tasks of `kind`.
    #[must_use]
    pub fn count(&self, kind: TaskKind) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.task.kind() == kind)
            .count()
    }

    /// Drop every task.
    pub fn shutdown(&mut self) {
        log::debug!("scheduler shutdown with {} tasks", self.slots.len());
        self.slots.clear();
        self.spawned.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::canvas::HeadlessCanvas;
    use crate::geometry::Bounds;

    /// Logs `(tic, label)` each time it runs and follows a fixed sleep plan.
    #[derive(Debug)]
    struct Probe {
        label: &'static str,
        plan: Vec<Step>,
        log: Rc<RefCell<Vec<(u64, &'static str)>>>,
        tic: Rc<RefCell<u64>>,
        child: Option<&'static str>,
    }

    impl Task for Probe {
        fn kind(&self) -> TaskKind {
            TaskKind::Blink
        }

        fn resume(&mut self, ctx: &mut Context<'_>) -> Step {
            self.log.borrow_mut().push((*self.tic.borrow(), self.label));
            if let Some(label) = self.child.take() {
                ctx.spawn(Probe {
                    label,
                    plan: vec![Step::Done],
                    log: Rc::clone(&self.log),
                    tic: Rc::clone(&self.tic),
                    child: None,
                });
            }
            if self.plan.is_empty() {
                Step::Sleep(1)
            } else {
                self.plan.remove(0)
            }
        }
    }

    struct Rig {
        scheduler: Scheduler,
        world: World,
        canvas: HeadlessCanvas,
        log: Rc<RefCell<Vec<(u64, &'static str)>>>,
        tic: Rc<RefCell<u64>>,
    }

    impl Rig {
        fn new() -> Self {
            let bounds = Bounds::new(10, 10);
            Self {
                scheduler: Scheduler::new(),
                world: World::new(bounds, 1957),
                canvas: HeadlessCanvas::new(bounds),
                log: Rc::default(),
                tic: Rc::default(),
            }
        }

        fn probe(&self, label: &'static str, plan: Vec<Step>) -> Probe {
            Probe {
                label,
                plan,
                log: Rc::clone(&self.log),
                tic: Rc::clone(&self.tic),
                child: None,
            }
        }

        fn run(&mut self, tics: u64) {
            for _ in 0..tics {
                *self.tic.borrow_mut() += 1;
                self.scheduler.tick(&mut self.world, &mut self.canvas);
            }
        }

        fn runs_of(&self, label: &str) -> Vec<u64> {
            self.log
                .borrow()
                .iter()
                .filter(|(_, l)| *l == label)
                .map(|(tic, _)| *tic)
                .collect()
        }
    }

    #[test]
    fn test_registration_order() {
        let mut rig = Rig::new();
        let a = rig.probe("a", vec![]);
        let b = rig.probe("b", vec![]);
        rig.scheduler.spawn(a);
        rig.scheduler.spawn(b);
        rig.run(2);
        assert_eq!(*rig.log.borrow(), vec![(1, "a"), (1, "b"), (2, "a"), (2, "b")]);
    }

    #[test]
    fn test_sleep_skips_tics() {
        let mut rig = Rig::new();
        let probe = rig.probe("a", vec![Step::Sleep(3), Step::Sleep(0)]);
        rig.scheduler.spawn(probe);
        rig.run(6);
        assert_eq!(rig.runs_of("a"), vec![1, 4, 5, 6]);
    }

    #[test]
    fn test_done_tasks_are_removed() {
        let mut rig = Rig::new();
        let probe = rig.probe("a", vec![Step::Sleep(1), Step::Done]);
        rig.scheduler.spawn(probe);
        rig.run(1);
        assert_eq!(rig.scheduler.len(), 1);
        rig.run(1);
        assert!(rig.scheduler.is_empty());
        rig.run(3);
        assert_eq!(rig.runs_of("a"), vec![1, 2]);
    }

    #[test]
    fn test_spawned_task_runs_next_tic_after_existing() {
        let mut rig = Rig::new();
        let mut parent = rig.probe("parent", vec![]);
        parent.child = Some("child");
        let sibling = rig.probe("sibling", vec![]);
        rig.scheduler.spawn(parent);
        rig.scheduler.spawn(sibling);

        rig.run(1);
        assert!(rig.runs_of("child").is_empty());
        assert_eq!(rig.scheduler.len(), 3);

        rig.run(1);
        assert_eq!(
            *rig.log.borrow(),
            vec![(1, "parent"), (1, "sibling"), (2, "parent"), (2, "sibling"), (2, "child")]
        );
        assert_eq!(rig.scheduler.len(), 2);
    }

    #[test]
    fn test_shutdown_drops_everything() {
        let mut rig = Rig::new();
        let probe = rig.probe("a", vec![]);
        rig.scheduler.spawn(probe);
        rig.scheduler.shutdown();
        assert!(rig.scheduler.is_empty());
        rig.run(1);
        assert!(rig.log.borrow().is_empty());
        assert_eq!(rig.scheduler.count(TaskKind::Blink), 0);
    }
}
