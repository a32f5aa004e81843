//! Application state management
//!
//! Global state accessible via Dioxus context providers. The original
//! design's fire-and-forget broadcast events (`show-toast`, `show-error`,
//! `clear-previews`, ...) are replaced by typed signals here: one
//! single-active-message slot per notification kind, and direct methods on
//! the shared [`AttachmentSet`] signal for preview state.

use std::sync::Arc;

use dioxus::prelude::*;

use tokodoc_core::api::ApiClient;
use tokodoc_core::gate::OperationalWindow;
use tokodoc_core::models::{filter_documents, page_count, page_slice};
use tokodoc_core::reconciler::AttachmentSet;
use tokodoc_core::{Session, StoreDocument};

/// Which main surface is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    List,
    Form,
}

/// One active message per notification kind.
#[derive(Clone, Copy)]
pub struct Notices {
    /// Short-lived toast, auto-dismissed.
    pub toast: Signal<Option<String>>,
    /// Success modal message.
    pub success: Signal<Option<String>>,
    /// Error modal message.
    pub error: Signal<Option<String>>,
    /// Warning modal message (duplicate files, auto-logout).
    pub warning: Signal<Option<String>>,
}

impl Notices {
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast.set(Some(message.into()));
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.success.set(Some(message.into()));
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.warning.set(Some(message.into()));
    }

    /// Clear every kind except warnings, which stay up until acknowledged.
    pub fn clear_dismissable(&mut self) {
        self.toast.set(None);
        self.success.set(None);
        self.error.set(None);
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Active session, if signed in.
    pub session: Signal<Option<Session>>,
    /// Documents fetched for the session's branch scope.
    pub docs: Signal<Vec<StoreDocument>>,
    /// Current main surface.
    pub page: Signal<Page>,
    /// Record loaded for editing; `None` means create mode.
    pub editing_doc: Signal<Option<StoreDocument>>,
    /// Current search term over the document list.
    pub search_query: Signal<String>,
    /// 1-based page of the document table.
    pub table_page: Signal<usize>,
    /// Bumped to force a document list refetch.
    pub refresh_version: Signal<u64>,
    /// Attachment working sets for the edit form.
    pub attachments: Signal<AttachmentSet>,
    /// Whether a save request is in flight (submit stays disabled).
    pub saving: Signal<bool>,
    /// Whether the operational window currently permits login.
    pub gate_open: Signal<bool>,
    /// Lockout message shown on the login surface when the gate is shut.
    pub gate_message: Signal<Option<String>>,
    /// Whether the logout confirmation modal is open.
    pub logout_prompt: Signal<bool>,
    /// Typed notification surface.
    pub notices: Notices,
    /// Backend client; configured once at startup.
    pub api: Signal<Arc<ApiClient>>,
    /// Operational-hours configuration.
    pub window: OperationalWindow,
}

impl AppState {
    /// Documents matching the current search term.
    #[must_use]
    pub fn filtered_docs(&self) -> Vec<StoreDocument> {
        filter_documents(&(self.docs)(), &(self.search_query)())
    }

    /// The filtered slice visible on the current table page.
    #[must_use]
    pub fn visible_docs(&self) -> Vec<StoreDocument> {
        page_slice(&self.filtered_docs(), (self.table_page)()).to_vec()
    }

    /// Page count over the filtered documents.
    #[must_use]
    pub fn table_pages(&self) -> usize {
        page_count(self.filtered_docs().len())
    }

    /// Reset every transient UI surface: list cache, form, previews,
    /// dismissable notifications, open prompts.
    pub fn reset_transient(&mut self) {
        self.docs.set(Vec::new());
        self.page.set(Page::List);
        self.editing_doc.set(None);
        self.search_query.set(String::new());
        self.table_page.set(1);
        self.attachments.write().clear();
        self.saving.set(false);
        self.logout_prompt.set(false);
        self.notices.clear_dismissable();
    }

    /// Terminate the session and drop all transient state.
    pub fn sign_out(&mut self) {
        self.session.set(None);
        self.reset_transient();
        self.refresh_version.set((self.refresh_version)() + 1);
    }

    /// Ask for a document list refetch.
    pub fn request_refresh(&mut self) {
        self.refresh_version.set((self.refresh_version)() + 1);
    }
}
