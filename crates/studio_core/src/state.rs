use std::collections::VecDeque;

use crate::view_model::{
    AppViewModel, DashboardStats, FormView, HistoryView, JobRowView, ResultView,
};
use crate::{HistoryFilter, JobHistory, Notification, ResultTab, SubmissionForm};

/// Characters of body text shown on the overview tab.
pub const TEXT_PREVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    form: SubmissionForm,
    history: JobHistory,
    filter: HistoryFilter,
    tab: ResultTab,
    notifications: VecDeque<Notification>,
    downloads: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &JobHistory {
        &self.history
    }

    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Returns whether state changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let current_id = self.history.current_id();
        let rows = self
            .history
            .filtered(&self.filter)
            .map(|job| JobRowView::from_job(job, current_id == Some(job.id())))
            .collect();

        AppViewModel {
            form: FormView {
                input: self.form.input().to_string(),
                submitting: self.form.is_submitting(),
                progress: self
                    .form
                    .is_submitting()
                    .then_some(self.form.progress()),
                url_hint: self.form.url_hint(),
                submit_enabled: !self.form.is_submitting() && self.form.url_hint() == Some(true),
            },
            stats: DashboardStats {
                total_scrapes: self.history.len(),
                success_rate_percent: self.history.success_rate_percent(),
                data_points: self.history.data_points(),
                downloads: self.downloads,
            },
            current: self
                .history
                .current()
                .map(|job| ResultView::from_job(job, TEXT_PREVIEW_CHARS)),
            active_tab: self.tab,
            history: HistoryView {
                rows,
                counts: self.history.status_counts(),
                filter: self.filter.clone(),
            },
            notifications: self.notifications.iter().cloned().collect(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn form_mut(&mut self) -> &mut SubmissionForm {
        &mut self.form
    }

    pub(crate) fn history_mut(&mut self) -> &mut JobHistory {
        &mut self.history
    }

    pub(crate) fn filter_mut(&mut self) -> &mut HistoryFilter {
        &mut self.filter
    }

    pub(crate) fn set_tab(&mut self, tab: ResultTab) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
        self.dirty = true;
    }

    pub(crate) fn dismiss_notification(&mut self) -> bool {
        self.notifications.pop_front().is_some()
    }

    pub(crate) fn record_download(&mut self) {
        self.downloads += 1;
    }
}
