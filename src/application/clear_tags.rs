//! Clear tags use case
//!
//! Fetches a note from the host, strips its hashtags, writes it back with an
//! empty tag list and tells the user how it went. Failures end up as error
//! notifications rather than errors returned to the caller.

use crate::domain::strip_hashtags_with_report;
use crate::error::Result;
use crate::infrastructure::{Messages, NoteHost, NoteId, Notification};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearTagsReport {
    pub note: NoteId,
    pub removed: Vec<String>,
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearTagsOutcome {
    Cleared(ClearTagsReport),
    /// The host had no content for the note, or fetching it failed
    Unavailable,
    /// Writing the note back or refreshing the host failed
    UpdateFailed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearTagsSummary {
    pub cleared: usize,
    pub unavailable: usize,
    pub failed: usize,
    pub removed_tags: usize,
    pub dry_run: bool,
    pub reports: Vec<ClearTagsReport>,
}

impl ClearTagsSummary {
    pub fn is_success(&self) -> bool {
        self.unavailable == 0 && self.failed == 0
    }
}

/// Service running the clear-tags action against a host
pub struct ClearTagsService<H: NoteHost> {
    host: H,
    messages: Messages,
    dry_run: bool,
}

impl<H: NoteHost> ClearTagsService<H> {
    pub fn new(host: H, messages: Messages) -> Self {
        Self {
            host,
            messages,
            dry_run: false,
        }
    }

    /// Strip and report without writing anything back to the host
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Clear the tags of a single note
    pub fn execute(&self, id: &NoteId) -> ClearTagsOutcome {
        let content = match self.host.fetch_note(id) {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::warn!(note = %id, "no content available for note");
                self.notify_error();
                return ClearTagsOutcome::Unavailable;
            }
            Err(e) => {
                tracing::error!(note = %id, error = %e, "failed to fetch note");
                self.notify_error();
                return ClearTagsOutcome::Unavailable;
            }
        };

        let result = strip_hashtags_with_report(&content);
        let report = ClearTagsReport {
            note: id.clone(),
            changed: result.content != content,
            removed: result.removed,
        };

        if let Err(e) = self.persist(id, &result.content) {
            tracing::error!(note = %id, error = %e, "failed to clear tags");
            self.notify_error();
            return ClearTagsOutcome::UpdateFailed;
        }

        tracing::info!(
            note = %id,
            removed = report.removed.len(),
            dry_run = self.dry_run,
            "tags cleared"
        );
        self.host
            .notify(&Notification::success(self.messages.get("clearTagsSuccess")));
        ClearTagsOutcome::Cleared(report)
    }

    /// Clear the tags of each note in turn
    pub fn execute_many<'a, I>(&self, ids: I) -> ClearTagsSummary
    where
        I: IntoIterator<Item = &'a NoteId>,
    {
        let mut summary = ClearTagsSummary {
            dry_run: self.dry_run,
            ..ClearTagsSummary::default()
        };

        for id in ids {
            match self.execute(id) {
                ClearTagsOutcome::Cleared(report) => {
                    summary.cleared += 1;
                    summary.removed_tags += report.removed.len();
                    summary.reports.push(report);
                }
                ClearTagsOutcome::Unavailable => summary.unavailable += 1,
                ClearTagsOutcome::UpdateFailed => summary.failed += 1,
            }
        }

        summary
    }

    fn persist(&self, id: &NoteId, content: &str) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }

        self.host.update_note(id, &[], content)?;
        self.host.refresh()
    }

    fn notify_error(&self) {
        self.host
            .notify(&Notification::error(self.messages.get("clearTagsError")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DetagError;
    use crate::infrastructure::{Locale, NotificationLevel};
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeHost {
        notes: RefCell<HashMap<NoteId, String>>,
        updates: RefCell<Vec<(NoteId, Vec<String>, String)>>,
        notifications: RefCell<Vec<Notification>>,
        refreshes: RefCell<usize>,
        fail_fetch: bool,
        fail_update: bool,
        fail_refresh: bool,
    }

    impl FakeHost {
        fn with_note(id: &str, content: &str) -> Self {
            let host = FakeHost::default();
            host.notes
                .borrow_mut()
                .insert(NoteId::from(id), content.to_string());
            host
        }
    }

    impl NoteHost for FakeHost {
        fn fetch_note(&self, id: &NoteId) -> Result<Option<String>> {
            if self.fail_fetch {
                return Err(DetagError::Host("fetch refused".to_string()));
            }
            Ok(self
                .notes
                .borrow()
                .get(id)
                .filter(|content| !content.is_empty())
                .cloned())
        }

        fn update_note(&self, id: &NoteId, tags: &[String], content: &str) -> Result<()> {
            if self.fail_update {
                return Err(DetagError::Host("update refused".to_string()));
            }
            self.updates
                .borrow_mut()
                .push((id.clone(), tags.to_vec(), content.to_string()));
            self.notes
                .borrow_mut()
                .insert(id.clone(), content.to_string());
            Ok(())
        }

        fn refresh(&self) -> Result<()> {
            if self.fail_refresh {
                return Err(DetagError::Host("refresh refused".to_string()));
            }
            *self.refreshes.borrow_mut() += 1;
            Ok(())
        }

        fn notify(&self, notification: &Notification) {
            self.notifications.borrow_mut().push(notification.clone());
        }
    }

    fn service(host: &FakeHost) -> ClearTagsService<&FakeHost> {
        ClearTagsService::new(host, Messages::new(Locale::En))
    }

    #[test]
    fn clears_tags_and_notifies_success() {
        let host = FakeHost::with_note("n1", "hello #tag world\n```\n#keep\n```");

        let outcome = service(&host).execute(&NoteId::from("n1"));

        match outcome {
            ClearTagsOutcome::Cleared(report) => {
                assert_eq!(report.removed, vec!["#tag"]);
                assert!(report.changed);
            }
            other => panic!("Expected Cleared, got {:?}", other),
        }

        let updates = host.updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].1, Vec::<String>::new());
        assert_eq!(updates[0].2, "hello  world\n```\n#keep\n```");
        assert_eq!(*host.refreshes.borrow(), 1);
        assert_eq!(
            host.notifications.borrow().as_slice(),
            &[Notification::success("Tags cleared successfully")]
        );
    }

    #[test]
    fn note_without_tags_is_still_updated() {
        let host = FakeHost::with_note("n1", "plain");

        let outcome = service(&host).execute(&NoteId::from("n1"));

        assert!(matches!(
            outcome,
            ClearTagsOutcome::Cleared(ClearTagsReport { changed: false, .. })
        ));
        assert_eq!(host.updates.borrow().len(), 1);
    }

    #[test]
    fn missing_note_reports_unavailable() {
        let host = FakeHost::default();

        let outcome = service(&host).execute(&NoteId::from("ghost"));

        assert_eq!(outcome, ClearTagsOutcome::Unavailable);
        assert!(host.updates.borrow().is_empty());
        let notifications = host.notifications.borrow();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, NotificationLevel::Error);
        assert_eq!(notifications[0].message, "Failed to clear tags");
    }

    #[test]
    fn empty_note_reports_unavailable() {
        let host = FakeHost::with_note("n1", "");
        assert_eq!(
            service(&host).execute(&NoteId::from("n1")),
            ClearTagsOutcome::Unavailable
        );
    }

    #[test]
    fn fetch_failure_reports_unavailable() {
        let host = FakeHost {
            fail_fetch: true,
            ..FakeHost::with_note("n1", "#a")
        };
        assert_eq!(
            service(&host).execute(&NoteId::from("n1")),
            ClearTagsOutcome::Unavailable
        );
    }

    #[test]
    fn update_failure_reports_error() {
        let host = FakeHost {
            fail_update: true,
            ..FakeHost::with_note("n1", "#a text")
        };

        let outcome = service(&host).execute(&NoteId::from("n1"));

        assert_eq!(outcome, ClearTagsOutcome::UpdateFailed);
        assert_eq!(*host.refreshes.borrow(), 0);
        assert_eq!(
            host.notifications.borrow().as_slice(),
            &[Notification::error("Failed to clear tags")]
        );
    }

    #[test]
    fn refresh_failure_reports_error() {
        let host = FakeHost {
            fail_refresh: true,
            ..FakeHost::with_note("n1", "#a text")
        };

        assert_eq!(
            service(&host).execute(&NoteId::from("n1")),
            ClearTagsOutcome::UpdateFailed
        );
    }

    #[test]
    fn dry_run_does_not_touch_host() {
        let host = FakeHost::with_note("n1", "#a text");

        let outcome = service(&host)
            .with_dry_run(true)
            .execute(&NoteId::from("n1"));

        assert!(matches!(outcome, ClearTagsOutcome::Cleared(_)));
        assert!(host.updates.borrow().is_empty());
        assert_eq!(*host.refreshes.borrow(), 0);
        assert_eq!(host.notes.borrow()[&NoteId::from("n1")], "#a text");
    }

    #[test]
    fn notifications_use_configured_locale() {
        let host = FakeHost::with_note("n1", "#a");

        ClearTagsService::new(&host, Messages::new(Locale::Zh)).execute(&NoteId::from("n1"));
        ClearTagsService::new(&host, Messages::new(Locale::Zh)).execute(&NoteId::from("n2"));

        let messages: Vec<String> = host
            .notifications
            .borrow()
            .iter()
            .map(|n| n.message.clone())
            .collect();
        assert_eq!(messages, vec!["标签清除成功", "清除标签失败"]);
    }

    #[test]
    fn execute_many_summarizes() {
        let host = FakeHost::with_note("a", "#x #y body");
        host.notes
            .borrow_mut()
            .insert(NoteId::from("b"), "#z".to_string());

        let ids = vec![NoteId::from("a"), NoteId::from("missing"), NoteId::from("b")];
        let summary = service(&host).execute_many(&ids);

        assert_eq!(summary.cleared, 2);
        assert_eq!(summary.unavailable, 1);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.removed_tags, 3);
        assert!(!summary.is_success());
        assert_eq!(summary.reports[1].note, NoteId::from("b"));
    }

    #[test]
    fn stripping_twice_changes_nothing() {
        let host = FakeHost::with_note("n1", "#a keep #b");
        let service = service(&host);

        service.execute(&NoteId::from("n1"));
        let second = service.execute(&NoteId::from("n1"));

        assert!(matches!(
            second,
            ClearTagsOutcome::Cleared(ClearTagsReport { changed: false, .. })
        ));
        assert_eq!(host.notes.borrow()[&NoteId::from("n1")], " keep ");
    }
}
