//! The color-state controller: single owner of the active color, the custom
//! draft, the recently-used history and the two transient feedback flags.

use crossbeam_channel::{unbounded, Receiver, Sender};
use shared::{
    domain::{Background, ColorValue, HistoryList, GRADIENT_TOKEN},
    protocol::{ColorSnapshot, Intent},
};
use tracing::{debug, warn};

use crate::{
    clipboard::ClipboardSink,
    config::Settings,
    timers::{Expired, TimerFacility, TimerHandle, TokioTimers, TransientFlag},
};

#[derive(Debug, Default)]
struct FlagState {
    raised: bool,
    pending: Option<TimerHandle>,
}

pub struct ColorStateController<T: TimerFacility> {
    active_color: ColorValue,
    custom_draft: ColorValue,
    history: HistoryList,
    palette: Vec<ColorValue>,
    animating: FlagState,
    copied: FlagState,
    revision: u64,
    timers: T,
    clipboard: Box<dyn ClipboardSink>,
    subscribers: Vec<Sender<ColorSnapshot>>,
}

impl<T: TimerFacility> ColorStateController<T> {
    pub fn new(settings: &Settings, timers: T, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            active_color: ColorValue::empty(),
            custom_draft: settings.initial_draft.clone(),
            history: HistoryList::new(),
            palette: settings.palette.clone(),
            animating: FlagState::default(),
            copied: FlagState::default(),
            revision: 0,
            timers,
            clipboard,
            subscribers: Vec::new(),
        }
    }

    pub fn select_color(&mut self, value: impl Into<ColorValue>) {
        let value = value.into();
        debug!(color = %value, "select color");
        if self.history.record(&value) {
            debug!(len = self.history.len(), "history updated");
        }
        self.active_color = value;
        self.raise(TransientFlag::Animating);
        self.publish();
    }

    /// Re-selects a history chip. Out-of-range indices are ignored.
    pub fn select_history(&mut self, index: usize) -> bool {
        let Some(value) = self.history.get(index).cloned() else {
            debug!(index, len = self.history.len(), "history index out of range");
            return false;
        };
        self.select_color(value);
        true
    }

    /// Selects a palette preset. Out-of-range indices are ignored.
    pub fn select_preset(&mut self, index: usize) -> bool {
        let Some(value) = self.palette.get(index).cloned() else {
            debug!(index, len = self.palette.len(), "preset index out of range");
            return false;
        };
        self.select_color(value);
        true
    }

    pub fn update_draft(&mut self, value: impl Into<ColorValue>) {
        let value = value.into();
        if value == self.custom_draft {
            return;
        }
        self.custom_draft = value;
        self.publish();
    }

    pub fn apply_draft(&mut self) {
        let draft = self.custom_draft.clone();
        self.select_color(draft);
    }

    pub fn reset(&mut self) {
        debug!("reset to default gradient");
        self.active_color = ColorValue::empty();
        self.raise(TransientFlag::Animating);
        self.publish();
    }

    pub fn clear_history(&mut self) {
        if self.history.is_empty() {
            return;
        }
        debug!(cleared = self.history.len(), "clear history");
        self.history.clear();
        self.publish();
    }

    /// Copies the active color, or the gradient token when none is set.
    ///
    /// Feedback is optimistic: `copied` is raised even if the write fails.
    pub fn copy_active_color(&mut self) {
        let text = if self.active_color.is_empty() {
            GRADIENT_TOKEN
        } else {
            self.active_color.as_str()
        };
        match self.clipboard.write_text(text) {
            Ok(()) => debug!(text, "copied to clipboard"),
            Err(err) => warn!(error = %err, "clipboard write failed"),
        }
        self.raise(TransientFlag::Copied);
        self.publish();
    }

    /// Returns `false` for intents that referenced a missing entry.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        debug!(intent = intent.name(), "dispatch intent");
        match intent {
            Intent::Select(value) => self.select_color(value),
            Intent::SelectHistory(index) => return self.select_history(index),
            Intent::SelectPreset(index) => return self.select_preset(index),
            Intent::UpdateDraft(value) => self.update_draft(value),
            Intent::ApplyDraft => self.apply_draft(),
            Intent::Reset => self.reset(),
            Intent::ClearHistory => self.clear_history(),
            Intent::Copy => self.copy_active_color(),
        }
        true
    }

    /// Applies every expiry the timer facility has collected.
    pub fn pump_timers(&mut self) -> bool {
        let mut changed = false;
        for expired in self.timers.drain_expired() {
            changed |= self.lower(expired);
        }
        if changed {
            self.publish();
        }
        changed
    }

    /// Applies a single expiry obtained directly from the timer facility.
    pub fn on_timer_expired(&mut self, expired: Expired) -> bool {
        let changed = self.lower(expired);
        if changed {
            self.publish();
        }
        changed
    }

    /// Cancels outstanding timers. The flags keep their current values.
    pub fn shutdown(&mut self) {
        self.animating.pending = None;
        self.copied.pending = None;
        self.timers.cancel_all();
    }

    pub fn subscribe(&mut self) -> Receiver<ColorSnapshot> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn snapshot(&self) -> ColorSnapshot {
        ColorSnapshot {
            revision: self.revision,
            active_color: self.active_color.clone(),
            custom_draft: self.custom_draft.clone(),
            history: self.history.as_slice().to_vec(),
            animating: self.animating.raised,
            copied: self.copied.raised,
            is_default_background: self.is_default_background(),
            background_label: Background::for_active(&self.active_color).label(),
        }
    }

    pub fn active_color(&self) -> &ColorValue {
        &self.active_color
    }

    pub fn custom_draft(&self) -> &ColorValue {
        &self.custom_draft
    }

    pub fn history(&self) -> &HistoryList {
        &self.history
    }

    pub fn palette(&self) -> &[ColorValue] {
        &self.palette
    }

    pub fn animating(&self) -> bool {
        self.animating.raised
    }

    pub fn copied(&self) -> bool {
        self.copied.raised
    }

    pub fn is_default_background(&self) -> bool {
        self.active_color.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    fn raise(&mut self, flag: TransientFlag) {
        let handle = self.timers.schedule(flag.duration(), flag);
        let slot = match flag {
            TransientFlag::Animating => &mut self.animating,
            TransientFlag::Copied => &mut self.copied,
        };
        slot.raised = true;
        if let Some(previous) = slot.pending.replace(handle) {
            self.timers.cancel(previous);
        }
    }

    fn lower(&mut self, expired: Expired) -> bool {
        let slot = match expired.flag {
            TransientFlag::Animating => &mut self.animating,
            TransientFlag::Copied => &mut self.copied,
        };
        if slot.pending != Some(expired.handle) {
            debug!(flag = expired.flag.name(), handle = expired.handle.0, "dropping stale timer");
            return false;
        }
        slot.pending = None;
        slot.raised = false;
        debug!(flag = expired.flag.name(), "transient flag cleared");
        true
    }

    fn publish(&mut self) {
        self.revision += 1;
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());
    }
}

impl ColorStateController<TokioTimers> {
    /// Waits for the next live timer expiry. Pends forever while no timer is
    /// scheduled, so it can sit in a `tokio::select!` loop. Feed the result
    /// to [`Self::on_timer_expired`].
    pub async fn next_timer_expiry(&mut self) -> Option<Expired> {
        self.timers.next_expired().await
    }
}

impl<T: TimerFacility> Drop for ColorStateController<T> {
    fn drop(&mut self) {
        self.timers.cancel_all();
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
