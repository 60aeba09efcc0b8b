//! Delayed tasks: threat confirmation and attack cooldown.
//!
//! Tasks carry only entity handles. They fire at the start of the first
//! tick whose time reaches their due time, in (due time, insertion) order,
//! and the firing code re-validates owner and target before acting.

use hecs::Entity;

use vigil_core::constants::TIME_EPSILON;

/// What a task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Re-validate a candidate threat and engage or stand down.
    IdentifyThreat { target: Entity },
    /// Clear the attack busy flag.
    AttackCooldown,
}

#[derive(Debug, Clone)]
pub struct ScheduledTask {
    pub due_secs: f64,
    pub seq: u64,
    pub owner: Entity,
    pub kind: TaskKind,
}

/// Pending tasks for all entities.
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<ScheduledTask>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task for `owner` at absolute time `due_secs`.
    pub fn schedule(&mut self, owner: Entity, kind: TaskKind, due_secs: f64) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(ScheduledTask {
            due_secs,
            seq,
            owner,
            kind,
        });
        seq
    }

    /// Remove and return every task due at `now`, oldest first.
    pub fn take_due(&mut self, now: f64) -> Vec<ScheduledTask> {
        let (mut due, pending): (Vec<_>, Vec<_>) = self
            .tasks
            .drain(..)
            .partition(|t| t.due_secs <= now + TIME_EPSILON);
        self.tasks = pending;
        due.sort_by(|a, b| a.due_secs.total_cmp(&b.due_secs).then(a.seq.cmp(&b.seq)));
        due
    }

    /// Drop every task owned by `owner`. Returns how many were dropped.
    pub fn cancel_owner(&mut self, owner: Entity) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.owner != owner);
        before - self.tasks.len()
    }

    /// Pending threat confirmations owned by `owner`.
    pub fn pending_identify(&self, owner: Entity) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.owner == owner && matches!(t.kind, TaskKind::IdentifyThreat { .. }))
            .count()
    }

    /// Pending attack cooldowns owned by `owner`.
    pub fn pending_cooldown(&self, owner: Entity) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.owner == owner && t.kind == TaskKind::AttackCooldown)
            .count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
