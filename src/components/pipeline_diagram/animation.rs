use std::collections::BTreeMap;

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
	Once,
	/// Restart forever, holding the end state for `pause` between cycles.
	Forever { pause: f64 },
}

/// Declarative timing: where an animation is at any elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
	pub duration: f64,
	pub delay: f64,
	pub repeat: Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
	/// Start delay has not elapsed yet.
	Delayed,
	/// Linear progress in `[0, 1)`.
	Running(f64),
	/// Between cycles of a repeating animation, end state shown.
	Holding,
	Finished,
}

impl Timeline {
	pub fn phase_at(&self, elapsed: f64) -> Phase {
		let local = elapsed - self.delay;
		if local < 0.0 {
			return Phase::Delayed;
		}
		match self.repeat {
			Repeat::Once if local >= self.duration => Phase::Finished,
			Repeat::Once => Phase::Running(local / self.duration),
			Repeat::Forever { pause } => {
				let cycle = self.duration + pause;
				if cycle <= 0.0 {
					return Phase::Holding;
				}
				let t = local.rem_euclid(cycle);
				if t < self.duration {
					Phase::Running(t / self.duration)
				} else {
					Phase::Holding
				}
			}
		}
	}
}

/// Identifies a scheduled animation and doubles as its cancellation handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskKey {
	Entrance(usize),
	Connector(usize),
}

#[derive(Clone, Copy, Debug)]
struct Task {
	timeline: Timeline,
	started_at: f64,
}

/// Owns every running animation of one diagram against a shared clock.
///
/// The scheduler never drives frames itself; the host advances `now` and
/// samples tasks when it paints.
#[derive(Clone, Debug, Default)]
pub struct AnimationScheduler {
	now: f64,
	tasks: BTreeMap<TaskKey, Task>,
}

impl AnimationScheduler {
	/// Moves the clock forward. Going backwards is ignored.
	pub fn set_now(&mut self, now: f64) {
		self.now = self.now.max(now);
	}

	/// Schedules a one-shot animation unless `key` was ever scheduled before.
	/// Returns `false` when the call was a replay.
	pub fn schedule_once(&mut self, key: TaskKey, duration: f64, delay: f64) -> bool {
		if self.tasks.contains_key(&key) {
			return false;
		}
		self.tasks.insert(
			key,
			Task {
				timeline: Timeline {
					duration,
					delay,
					repeat: Repeat::Once,
				},
				started_at: self.now,
			},
		);
		true
	}

	/// Schedules (or replaces) the endless loop of connector `index`, offset by
	/// `index * stagger` so loops draw in sequence.
	pub fn schedule_repeating(
		&mut self,
		index: usize,
		duration: f64,
		pause: f64,
		delay: f64,
		stagger: f64,
	) -> TaskKey {
		let key = TaskKey::Connector(index);
		self.tasks.insert(
			key,
			Task {
				timeline: Timeline {
					duration,
					delay: delay + index as f64 * stagger,
					repeat: Repeat::Forever { pause },
				},
				started_at: self.now,
			},
		);
		key
	}

	/// Rewinds `key` to its start (delay included) at the current time.
	pub fn restart(&mut self, key: TaskKey) -> bool {
		match self.tasks.get_mut(&key) {
			Some(task) => {
				task.started_at = self.now;
				true
			}
			None => false,
		}
	}

	pub fn sample(&self, key: TaskKey) -> Option<Phase> {
		self.sample_at(key, self.now)
	}

	pub fn sample_at(&self, key: TaskKey, now: f64) -> Option<Phase> {
		self.tasks
			.get(&key)
			.map(|task| task.timeline.phase_at(now - task.started_at))
	}

	/// Stops the task behind `key`. Returns `false` if nothing was scheduled.
	pub fn cancel(&mut self, key: TaskKey) -> bool {
		self.tasks.remove(&key).is_some()
	}
}
