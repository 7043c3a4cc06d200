use crate::{AppState, Effect, Msg, Notification, ScrapeOutcome, SubmitRejected};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            if state.form_mut().set_input(text) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SubmitClicked => match state.form_mut().begin_submit() {
            Ok(url) => {
                state.mark_dirty();
                vec![Effect::RunScrape { url }]
            }
            Err(SubmitRejected::Busy) => Vec::new(),
            Err(SubmitRejected::Invalid(err)) => {
                state.notify(Notification::rejected(err));
                Vec::new()
            }
        },
        Msg::ProgressTick => {
            if state.form_mut().advance_progress() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ScrapeResolved(outcome) => {
            let notification = match &outcome {
                ScrapeOutcome::Succeeded(_) => Notification::scrape_complete(),
                ScrapeOutcome::Failed { error, .. } => Notification::scrape_failed(error),
            };
            state.form_mut().finish(outcome.is_success());
            // Failed attempts are history too; only the input handling differs.
            state.history_mut().record_completion(outcome.into_job());
            state.notify(notification);
            Vec::new()
        }
        Msg::ScrapeAborted { .. } => {
            state.form_mut().finish(false);
            state.notify(Notification::scrape_error());
            Vec::new()
        }
        Msg::JobSelected(job_id) => {
            if state.history_mut().select_current(&job_id).is_ok() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchChanged(search) => {
            if state.filter_mut().search != search {
                state.filter_mut().search = search;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::StatusFilterChanged(status) => {
            if state.filter_mut().status != status {
                state.filter_mut().status = status;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::TabSelected(tab) => {
            if state.set_tab(tab) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ExportClicked(format) => match state.history().current().cloned() {
            Some(job) if job.is_success() => vec![Effect::Export { format, job }],
            Some(_) => {
                state.notify(Notification::export_failed("failed jobs have no data"));
                Vec::new()
            }
            None => {
                state.notify(Notification::export_failed("no result selected"));
                Vec::new()
            }
        },
        Msg::ExportFinished { format, result } => {
            match result {
                Ok(_) => {
                    state.record_download();
                    state.notify(Notification::export_complete(format));
                }
                Err(reason) => state.notify(Notification::export_failed(&reason)),
            }
            Vec::new()
        }
        Msg::NotificationDismissed => {
            if state.dismiss_notification() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DeleteClicked(_) | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
