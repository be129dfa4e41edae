use crate::types::{Draft, DraftField, Email, EmailId, Mailbox};

/// identifies a fetch, later fetches get larger tokens
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// the visible panel, exactly one at a time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    MailboxList(Mailbox),
    EmailDetail(EmailId),
    Compose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKind {
    MailboxList,
    EmailDetail,
    Compose,
}

impl Panel {
    pub fn kind(self) -> PanelKind {
        match self {
            Panel::MailboxList(_) => PanelKind::MailboxList,
            Panel::EmailDetail(_) => PanelKind::EmailDetail,
            Panel::Compose => PanelKind::Compose,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    panel: Panel,
    emails: Vec<Email>,
    loading: bool,
    failed: bool,
    email: Option<Email>,
    draft: Draft,
    issued: u64,
    mailbox_request: Option<RequestToken>,
    email_request: Option<RequestToken>,
    /// a send or archive toggle that navigates when it completes
    action_request: Option<RequestToken>,
}

impl AppState {
    /// start on the inbox, the caller issues the first fetch via `show_mailbox`
    pub fn new() -> Self {
        Self {
            panel: Panel::MailboxList(Mailbox::Inbox),
            emails: vec![],
            loading: false,
            failed: false,
            email: None,
            draft: Draft::default(),
            issued: 0,
            mailbox_request: None,
            email_request: None,
            action_request: None,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_visible(&self, kind: PanelKind) -> bool {
        self.panel.kind() == kind
    }

    pub fn emails(&self) -> &[Email] {
        &self.emails
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// the last listing fetch failed, nothing is shown in its place
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn action_pending(&self) -> bool {
        self.action_request.is_some()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn unread_count(&self) -> usize {
        self.emails.iter().filter(|e| !e.read).count()
    }

    fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// switch to a mailbox listing, the returned token must accompany the result
    pub fn show_mailbox(&mut self, mailbox: Mailbox) -> RequestToken {
        let token = self.issue();

        self.panel = Panel::MailboxList(mailbox);
        self.emails.clear();
        self.loading = true;
        self.failed = false;
        self.mailbox_request = Some(token);
        self.email_request = None;
        self.action_request = None;

        token
    }

    /// apply a listing, returns false when it was superseded
    pub fn mailbox_loaded(&mut self, token: RequestToken, emails: Option<Vec<Email>>) -> bool {
        if self.mailbox_request != Some(token) || self.panel.kind() != PanelKind::MailboxList {
            return false;
        }

        self.mailbox_request = None;
        self.loading = false;
        self.failed = emails.is_none();
        self.emails = emails.unwrap_or_default();

        true
    }

    pub fn show_email(&mut self, id: EmailId) -> RequestToken {
        let token = self.issue();

        self.panel = Panel::EmailDetail(id);
        self.email = None;
        self.email_request = Some(token);
        self.mailbox_request = None;
        self.action_request = None;

        token
    }

    /// apply a fetched email, returns false when it was superseded
    pub fn email_loaded(&mut self, token: RequestToken, email: Email) -> bool {
        if self.email_request != Some(token) || self.panel != Panel::EmailDetail(email.id) {
            return false;
        }

        self.email_request = None;
        self.sync_cached(&email);
        self.email = Some(email);

        true
    }

    /// record a failed detail fetch, the panel stays empty
    pub fn email_failed(&mut self, token: RequestToken) -> bool {
        if self.email_request != Some(token) {
            return false;
        }

        self.email_request = None;

        true
    }

    /// switch to the compose form, optionally pre-filled
    pub fn show_compose(&mut self, prefill: Option<Draft>) {
        self.panel = Panel::Compose;
        self.draft = prefill.unwrap_or_default();
        self.mailbox_request = None;
        self.email_request = None;
        self.action_request = None;
    }

    pub fn edit_draft(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    /// start sending the draft, `None` outside the compose form or while a
    /// send is already running
    pub fn begin_send(&mut self) -> Option<(RequestToken, Draft)> {
        if self.panel != Panel::Compose || self.action_request.is_some() {
            return None;
        }

        let token = self.issue();
        self.action_request = Some(token);

        Some((token, self.draft.clone()))
    }

    /// a send finished, the sent mailbox is shown whatever the outcome unless
    /// the user navigated elsewhere in the meantime
    pub fn email_sent(&mut self, token: RequestToken) -> Option<RequestToken> {
        if self.action_request != Some(token) {
            return None;
        }

        Some(self.show_mailbox(Mailbox::Sent))
    }

    /// start flipping the archived flag of the open email
    pub fn begin_archive_toggle(&mut self) -> Option<(RequestToken, Email)> {
        if self.action_request.is_some() {
            return None;
        }

        let email = self.email.clone()?;
        let token = self.issue();
        self.action_request = Some(token);

        Some((token, email))
    }

    /// an archive toggle finished, `archived` is the new flag when it succeeded;
    /// returns to the inbox unless the user navigated elsewhere in the meantime
    pub fn archive_toggled(
        &mut self,
        token: RequestToken,
        id: EmailId,
        archived: Option<bool>,
    ) -> Option<RequestToken> {
        if let Some(archived) = archived {
            self.archived_changed(id, archived);
        }

        if self.action_request != Some(token) {
            return None;
        }

        Some(self.show_mailbox(Mailbox::Inbox))
    }

    /// record a completed flag update so later renders see it
    pub fn archived_changed(&mut self, id: EmailId, archived: bool) {
        let mut update = |email: &mut Email| {
            if email.id == id {
                email.archived = archived;
            }
        };

        self.emails.iter_mut().for_each(&mut update);
        self.email.iter_mut().for_each(update);
    }

    fn sync_cached(&mut self, email: &Email) {
        if let Some(cached) = self.emails.iter_mut().find(|e| e.id == email.id) {
            cached.read = email.read;
            cached.archived = email.archived;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(id: EmailId, read: bool) -> Email {
        Email {
            id,
            sender: format!("sender{id}@example.com"),
            subject: format!("subject {id}"),
            read,
            ..Default::default()
        }
    }

    fn visible_count(state: &AppState) -> usize {
        [PanelKind::MailboxList, PanelKind::EmailDetail, PanelKind::Compose]
            .into_iter()
            .filter(|kind| state.is_visible(*kind))
            .count()
    }

    #[test]
    fn starts_on_inbox() {
        let state = AppState::new();

        assert_eq!(state.panel(), Panel::MailboxList(Mailbox::Inbox));
        assert_eq!(visible_count(&state), 1);
    }

    #[test]
    fn listing_keeps_server_order() {
        for mailbox in Mailbox::ALL {
            let mut state = AppState::new();
            let token = state.show_mailbox(mailbox);
            let emails = vec![email(3, false), email(1, true), email(2, false)];

            assert!(state.loading());
            assert!(state.mailbox_loaded(token, Some(emails.clone())));
            assert!(!state.loading());
            assert_eq!(state.emails(), emails.as_slice());
            assert_eq!(state.unread_count(), 2);
        }
    }

    #[test]
    fn stale_listing_is_discarded() {
        let mut state = AppState::new();
        let slow = state.show_mailbox(Mailbox::Inbox);
        let fast = state.show_mailbox(Mailbox::Sent);

        assert!(slow < fast);
        assert!(state.mailbox_loaded(fast, Some(vec![email(1, true)])));
        assert!(!state.mailbox_loaded(slow, Some(vec![email(2, false), email(3, false)])));
        assert_eq!(state.panel(), Panel::MailboxList(Mailbox::Sent));
        assert_eq!(state.emails().len(), 1);
        assert_eq!(state.emails()[0].id, 1);
    }

    #[test]
    fn listing_after_navigating_away_is_discarded() {
        let mut state = AppState::new();
        let token = state.show_mailbox(Mailbox::Inbox);
        state.show_compose(None);

        assert!(!state.mailbox_loaded(token, Some(vec![email(1, false)])));
        assert!(state.emails().is_empty());
        assert_eq!(state.panel(), Panel::Compose);
    }

    #[test]
    fn failed_listing_leaves_panel_empty() {
        let mut state = AppState::new();
        let token = state.show_mailbox(Mailbox::Archive);

        assert!(state.mailbox_loaded(token, None));
        assert!(state.emails().is_empty());
        assert!(!state.loading());
        assert!(state.failed());
        assert!(state.is_visible(PanelKind::MailboxList));

        let token = state.show_mailbox(Mailbox::Archive);
        assert!(!state.failed());
        assert!(state.mailbox_loaded(token, Some(vec![])));
        assert!(!state.failed());
    }

    #[test]
    fn stale_email_is_discarded() {
        let mut state = AppState::new();
        let first = state.show_email(1);
        let second = state.show_email(2);

        assert!(!state.email_loaded(first, email(1, true)));
        assert!(state.email().is_none());
        assert!(state.email_loaded(second, email(2, true)));
        assert_eq!(state.email().map(|e| e.id), Some(2));
    }

    #[test]
    fn opened_email_updates_listing_cache() {
        let mut state = AppState::new();
        let token = state.show_mailbox(Mailbox::Inbox);
        state.mailbox_loaded(token, Some(vec![email(1, false), email(2, false)]));

        let token = state.show_email(1);
        assert!(state.email_loaded(token, email(1, true)));
        assert!(state.emails()[0].read);
        assert!(!state.emails()[1].read);
    }

    #[test]
    fn failed_email_only_clears_request() {
        let mut state = AppState::new();
        let stale = state.show_email(1);
        let token = state.show_email(1);

        assert!(!state.email_failed(stale));
        assert!(state.email_failed(token));
        assert!(state.email().is_none());
        assert_eq!(state.panel(), Panel::EmailDetail(1));
    }

    #[test]
    fn compose_resets_or_prefills() {
        let mut state = AppState::new();
        state.show_compose(None);
        state.edit_draft(DraftField::Subject, "Draft".to_string());
        assert_eq!(state.draft().subject, "Draft");

        state.show_compose(None);
        assert_eq!(state.draft(), &Draft::default());

        let mut original = email(4, true);
        original.subject = "Hello".to_string();
        state.show_compose(Some(Draft::reply(&original)));
        assert_eq!(state.draft().subject, "Re: Hello");
        assert_eq!(state.draft().recipients, "sender4@example.com");
    }

    #[test]
    fn archive_change_reaches_open_email() {
        let mut state = AppState::new();
        let token = state.show_email(5);
        state.email_loaded(token, email(5, true));

        state.archived_changed(5, true);
        assert_eq!(state.email().map(|e| e.archived), Some(true));
        assert_eq!(state.email().map(|e| e.archive_label()), Some("Unarchive"));
    }

    #[test]
    fn archive_toggle_returns_to_inbox() {
        let mut state = AppState::new();
        let token = state.show_mailbox(Mailbox::Archive);
        state.mailbox_loaded(token, Some(vec![email(8, true)]));
        let token = state.show_email(8);
        state.email_loaded(token, email(8, true));

        let (token, toggled) = state.begin_archive_toggle().unwrap();
        assert_eq!(toggled.id, 8);
        assert!(state.begin_archive_toggle().is_none());

        assert!(state.archive_toggled(token, 8, Some(false)).is_some());
        assert_eq!(state.panel(), Panel::MailboxList(Mailbox::Inbox));
        assert!(state.loading());
        assert!(!state.action_pending());
        assert_eq!(visible_count(&state), 1);
    }

    #[test]
    fn archive_toggle_without_open_email_does_nothing() {
        let mut state = AppState::new();
        state.show_email(8);

        assert!(state.begin_archive_toggle().is_none());
        assert!(!state.action_pending());
    }

    #[test]
    fn late_archive_toggle_keeps_newer_navigation() {
        let mut state = AppState::new();
        let token = state.show_email(3);
        state.email_loaded(token, email(3, true));
        let (token, _) = state.begin_archive_toggle().unwrap();

        state.show_compose(None);

        assert!(state.archive_toggled(token, 3, Some(true)).is_none());
        assert_eq!(state.panel(), Panel::Compose);
        assert_eq!(visible_count(&state), 1);
    }

    #[test]
    fn send_navigates_to_sent() {
        let mut state = AppState::new();
        state.show_compose(None);

        let (token, draft) = state.begin_send().unwrap();
        assert_eq!(draft, Draft::default());
        assert!(state.action_pending());

        assert!(state.email_sent(token).is_some());
        assert_eq!(state.panel(), Panel::MailboxList(Mailbox::Sent));
        assert!(!state.action_pending());
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut state = AppState::new();
        state.show_compose(None);
        state.edit_draft(DraftField::Subject, "Hi".to_string());

        let (token, _) = state.begin_send().unwrap();
        assert!(state.begin_send().is_none());

        state.email_sent(token);
        assert!(state.begin_send().is_none());
    }

    #[test]
    fn late_send_keeps_newer_navigation() {
        let mut state = AppState::new();
        state.show_compose(None);
        let (token, _) = state.begin_send().unwrap();

        state.show_mailbox(Mailbox::Inbox);

        assert!(state.email_sent(token).is_none());
        assert_eq!(state.panel(), Panel::MailboxList(Mailbox::Inbox));
    }

    #[test]
    fn exactly_one_panel_after_every_transition() {
        let mut state = AppState::new();

        state.show_mailbox(Mailbox::Sent);
        assert_eq!(visible_count(&state), 1);
        assert!(state.is_visible(PanelKind::MailboxList));

        state.show_email(1);
        assert_eq!(visible_count(&state), 1);
        assert!(state.is_visible(PanelKind::EmailDetail));

        state.show_compose(None);
        assert_eq!(visible_count(&state), 1);
        assert!(state.is_visible(PanelKind::Compose));

        state.show_mailbox(Mailbox::Inbox);
        assert_eq!(visible_count(&state), 1);
        assert!(state.is_visible(PanelKind::MailboxList));
    }
}
