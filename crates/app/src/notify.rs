use shared_types::{DashboardConfig, Notice, NoticeKind};
use shared_ui::{ToastOptions, Toasts};
use std::time::Duration;

/// Build toast options for a notice.
fn options_for(notice: &Notice, config: &DashboardConfig) -> ToastOptions {
    let mut options = ToastOptions::new().duration(Duration::from_secs(
        config.notifications.toast_duration_secs,
    ));
    if let Some(description) = &notice.description {
        options = options.description(description.clone());
    }
    options
}

/// Show `notice` on the toast stack.
pub fn show(toasts: Toasts, notice: &Notice, config: &DashboardConfig) {
    let options = options_for(notice, config);
    let title = notice.title.clone();
    match notice.kind {
        NoticeKind::Success => {
            toasts.success(title, options);
        }
        NoticeKind::Error => {
            toasts.error(title, options);
        }
        NoticeKind::Info => {
            toasts.info(title, options);
        }
    }
}
