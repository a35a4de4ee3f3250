/// Handle to a scheduled task, used to cancel it before it fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskKey(u64);

struct ScheduledTask<T> {
    key: TaskKey,
    due: u64,
    payload: T,
}

/// Tick-deferred tasks. Each task carries a snapshot of the arguments it
/// needs and is handed back by [`advance`](TaskQueue::advance) once due.
/// Nothing runs on another thread and nothing blocks.
pub struct TaskQueue<T> {
    now: u64,
    next_key: u64,
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_key: 0,
            tasks: Vec::new(),
        }
    }

    /// Current tick
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedules `payload` to come due `delay` ticks from now. A zero delay
    /// fires on the next advance.
    pub fn schedule(&mut self, delay: u32, payload: T) -> TaskKey {
        let key = TaskKey(self.next_key);
        self.next_key += 1;
        self.tasks.push(ScheduledTask {
            key,
            due: self.now + u64::from(delay),
            payload,
        });
        key
    }

    /// Removes a task that has not fired yet, returning its payload
    pub fn cancel(&mut self, key: &TaskKey) -> Option<T> {
        let index = self.tasks.iter().position(|task| task.key == *key)?;
        Some(self.tasks.remove(index).payload)
    }

    /// Drops every pending task, returning how many were dropped
    pub fn clear(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        count
    }

    /// Moves one tick forward and returns the payloads that came due, in
    /// the order they were scheduled
    pub fn advance(&mut self) -> Vec<T> {
        self.now += 1;
        let now = self.now;

        let mut due = Vec::new();
        let mut pending = Vec::with_capacity(self.tasks.len());
        for task in self.tasks.drain(..) {
            if task.due <= now {
                due.push(task.payload);
            } else {
                pending.push(task);
            }
        }
        self.tasks = pending;

        due
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
