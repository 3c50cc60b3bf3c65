//! Executes the effect intents produced by the reducer.
//!
//! The runtime owns the current state, the timer queue and the backing
//! store. Callers pass both a wall-clock reading (for the clock session) and
//! a monotonic offset (for timers) so that the whole loop can be driven
//! deterministically.

use crate::config::Config;
use crate::core::app::{self, AppState, Context, Effect, Event, Timings};
use crate::core::dispatcher::find_record;
use crate::core::scheduler::{Scheduler, TimerTask};
use crate::data::Dataset;
use crate::db::log::OperationLog;
use crate::db::prefs::PreferenceStore;
use crate::errors::{AppError, AppResult};
use crate::models::theme::{THEME_KEY, Theme};
use crate::models::toast::Toast;
use crate::ui::render;
use chrono::NaiveDateTime;
use std::time::Duration;

/// Something the front end has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Screen(String),
    Toast(Toast),
    Warning(String),
    Error(String),
}

pub struct Runtime<S: PreferenceStore + OperationLog> {
    state: AppState,
    data: Dataset,
    timings: Timings,
    scheduler: Scheduler,
    store: S,
}

fn stored_theme<S: PreferenceStore>(store: &S) -> (Option<Theme>, Option<Output>) {
    match store.get(THEME_KEY) {
        Ok(Some(v)) => match Theme::parse(&v) {
            Ok(t) => (Some(t), None),
            Err(e) => (None, Some(Output::Warning(format!("Ignoring stored theme: {}", e)))),
        },
        Ok(None) => (None, None),
        Err(e) => (None, Some(Output::Warning(format!("Cannot read theme preference: {}", e)))),
    }
}

impl<S: PreferenceStore + OperationLog> Runtime<S> {
    /// Build the initial state from the store and config, then run the
    /// start-up effects at monotonic time zero.
    pub fn boot(
        store: S,
        data: Dataset,
        cfg: &Config,
        system_theme: Theme,
        now: NaiveDateTime,
    ) -> AppResult<(Self, Vec<Output>)> {
        let timings = cfg.timings();
        let demo_start = cfg.demo_start()?;
        let (stored, warning) = stored_theme(&store);

        let transition = {
            let ctx = Context {
                now,
                data: &data,
                timings: &timings,
            };
            app::start(stored, system_theme, demo_start, &ctx)
        };

        let mut rt = Self {
            state: transition.state,
            data,
            timings,
            scheduler: Scheduler::new(),
            store,
        };

        let mut out: Vec<Output> = warning.into_iter().collect();
        out.extend(rt.execute(transition.effects, Duration::ZERO));
        Ok((rt, out))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn next_timer(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Feed one event through the reducer and run its effects.
    pub fn dispatch(&mut self, event: Event, now: NaiveDateTime, mono: Duration) -> Vec<Output> {
        let transition = {
            let ctx = Context {
                now,
                data: &self.data,
                timings: &self.timings,
            };
            app::reduce(&self.state, &event, &ctx)
        };
        self.state = transition.state;
        self.execute(transition.effects, mono)
    }

    /// Fire every timer due at `mono`. Timers armed while firing wait for
    /// the next call.
    pub fn advance(&mut self, now: NaiveDateTime, mono: Duration) -> Vec<Output> {
        let mut out = Vec::new();
        for (due, task) in self.scheduler.take_due(mono) {
            // the clock tick re-arms from its deadline, not from when it ran
            let at = if task == TimerTask::ClockTick { due } else { mono };
            out.extend(self.dispatch(Event::TimerFired(task), now, at));
        }
        out
    }

    /// Select a result identified by a raw `(kind, id)` pair. An unknown
    /// kind or id aborts only this operation.
    pub fn open(
        &mut self,
        kind: &str,
        id: &str,
        now: NaiveDateTime,
        mono: Duration,
    ) -> AppResult<Vec<Output>> {
        let record = find_record(&self.data.index, kind, id)?;
        Ok(self.dispatch(Event::ResultSelected(record), now, mono))
    }

    /// Record a failed operation in the internal log and describe it.
    pub fn report_error(&mut self, operation: &str, err: &AppError) -> Output {
        let target = match err {
            AppError::ContractViolation(_) => "contract_violation",
            AppError::Validation(_) => "validation",
            _ => "error",
        };
        if let Err(e) = self.store.record(operation, target, &err.to_string()) {
            return Output::Error(format!("{} (log write failed: {})", err, e));
        }
        Output::Error(err.to_string())
    }

    fn execute(&mut self, effects: Vec<Effect>, mono: Duration) -> Vec<Output> {
        let mut out = Vec::new();

        for effect in effects {
            match effect {
                Effect::Render => out.push(Output::Screen(render::screen(&self.state))),
                Effect::Persist { key, value } => {
                    if let Err(e) = self.store.set(key, &value) {
                        out.push(Output::Warning(format!(
                            "Failed to persist '{}': {}",
                            key, e
                        )));
                    }
                }
                Effect::Schedule { delay, task } => {
                    // Each shown toast arms exactly one dismiss timer.
                    if task == TimerTask::HideToast
                        && let Some(t) = &self.state.toast
                    {
                        out.push(Output::Toast(t.clone()));
                    }
                    self.scheduler.schedule(mono, delay, task);
                }
                Effect::Log {
                    operation,
                    target,
                    message,
                } => {
                    if let Err(e) = self.store.record(operation, &target, &message) {
                        out.push(Output::Warning(format!(
                            "Failed to write internal log: {}",
                            e
                        )));
                    }
                }
            }
        }

        out
    }
}
