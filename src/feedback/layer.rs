// src/feedback/layer.rs
//
// Transient widgets shown by the actions: the Info overlay, the "Copied"
// tooltip, and the blocking error alert.
//
// Overlay/tooltip lifecycle: Created → Visible → Dismissed → removed.
// Phases only move forward; tasks aimed at a widget that already moved on
// (or is gone) do nothing.

use crate::config::options::FeedbackOptions;

use super::scheduler::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiTask {
    Reveal(WidgetId),
    FadeOut(WidgetId),
    Remove(WidgetId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Created,
    Visible,
    Dismissed,
}

/// Bottom-left corner of the control a tooltip belongs to, in screen points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    pub left: f32,
    pub bottom: f32,
}

impl Anchor {
    /// Top-left of a tooltip hanging `offset` below the control.
    pub fn below(self, offset: f32) -> (f32, f32) {
        (self.left, self.bottom + offset)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WidgetKind {
    /// Centered panel with read-only text and a close control.
    Overlay { text: String },
    Tooltip { message: String, anchor: Anchor },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Widget {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub phase: Phase,
}

impl Widget {
    /// Target opacity; the frontend animates towards it.
    pub fn opacity(&self) -> f32 {
        if self.phase == Phase::Visible { 1.0 } else { 0.0 }
    }
}

#[derive(Debug, Default)]
pub struct FeedbackLayer {
    options: FeedbackOptions,
    next_id: u64,
    widgets: Vec<Widget>,
    alert: Option<String>,
}

impl FeedbackLayer {
    pub fn new(options: FeedbackOptions) -> Self {
        Self { options, ..Self::default() }
    }

    pub fn options(&self) -> FeedbackOptions {
        self.options
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// `None` once removed.
    pub fn phase(&self, id: WidgetId) -> Option<Phase> {
        self.get(id).map(|w| w.phase)
    }

    pub fn show_overlay(&mut self, sched: &mut dyn Scheduler, text: String) -> WidgetId {
        let id = self.create(WidgetKind::Overlay { text });
        sched.next_frame(UiTask::Reveal(id));
        logd!("Feedback: overlay {:?} created", id);
        id
    }

    /// Fades in, holds, fades out, removes itself. No interaction needed.
    pub fn show_tooltip(&mut self, sched: &mut dyn Scheduler, anchor: Anchor, message: &str) -> WidgetId {
        let id = self.create(WidgetKind::Tooltip { message: s!(message), anchor });
        sched.next_frame(UiTask::Reveal(id));
        sched.after(self.options.tooltip_hold, UiTask::FadeOut(id));
        logd!("Feedback: tooltip {:?} created ({message})", id);
        id
    }

    /// User closed a widget. Returns false if it was already on its way out.
    pub fn dismiss(&mut self, sched: &mut dyn Scheduler, id: WidgetId) -> bool {
        self.fade_out(sched, id)
    }

    pub fn apply(&mut self, sched: &mut dyn Scheduler, task: UiTask) {
        match task {
            UiTask::Reveal(id) => {
                if let Some(w) = self.widgets.iter_mut().find(|w| w.id == id) {
                    if w.phase == Phase::Created {
                        w.phase = Phase::Visible;
                    }
                }
            }
            UiTask::FadeOut(id) => {
                self.fade_out(sched, id);
            }
            UiTask::Remove(id) => {
                self.widgets.retain(|w| w.id != id);
            }
        }
    }

    pub fn run_due(&mut self, sched: &mut dyn Scheduler, tasks: impl IntoIterator<Item = UiTask>) {
        for task in tasks {
            self.apply(sched, task);
        }
    }

    /// Blocking error; the frontend keeps the triggers disabled until acknowledged.
    pub fn alert(&mut self, message: &str) {
        self.alert = Some(s!(message));
    }

    pub fn alert_message(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn acknowledge_alert(&mut self) {
        self.alert = None;
    }

    fn create(&mut self, kind: WidgetKind) -> WidgetId {
        self.next_id += 1;
        let id = WidgetId(self.next_id);
        self.widgets.push(Widget { id, kind, phase: Phase::Created });
        id
    }

    fn fade_out(&mut self, sched: &mut dyn Scheduler, id: WidgetId) -> bool {
        let Some(w) = self.widgets.iter_mut().find(|w| w.id == id) else { return false };
        if w.phase == Phase::Dismissed {
            return false;
        }
        w.phase = Phase::Dismissed;
        sched.after(self.options.fade, UiTask::Remove(id));
        true
    }
}
