//! # Toast notifications: state model
//!
//! A toast is an ephemeral on-screen message. The client shows at most one
//! *container* of toasts at a time: every [`ToastStack::show`] replaces the
//! previous container wholesale, so a fresh error never stacks under a stale
//! "Loading..." banner.
//!
//! This module owns only the state. Rendering lives in the `ui` crate, which
//! wraps a [`ToastStack`] in a reactive signal and implements [`Notifier`] for
//! it. Controller code talks to the [`Notifier`] trait, so it runs unchanged
//! against a plain `RefCell<ToastStack>` in tests.

use std::cell::RefCell;

/// Message used by [`Notifier::progress`] when none is given.
pub const DEFAULT_PROGRESS_MESSAGE: &str = "Loading...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Progress,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn progress(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Progress,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// The single active group of toasts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastContainer {
    /// Increases with every `show`, so delayed dismissals can tell whether
    /// the container they were scheduled for is still the current one.
    pub id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastContainer {
    /// Whether every toast in the container is an error.
    pub fn is_error_only(&self) -> bool {
        !self.toasts.is_empty() && self.toasts.iter().all(|t| t.kind == ToastKind::Error)
    }
}

/// Zero or one active toast container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    container: Option<ToastContainer>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active container with one holding `toasts`, in order.
    pub fn show(&mut self, toasts: Vec<Toast>) {
        self.destroy();
        self.next_id += 1;
        self.container = Some(ToastContainer {
            id: self.next_id,
            toasts,
        });
    }

    /// Remove the active container, if any.
    pub fn destroy(&mut self) {
        self.container = None;
    }

    /// Remove the active container only if it is still the one with `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.container.as_ref().is_some_and(|c| c.id == id) {
            self.destroy();
        }
    }

    pub fn container(&self) -> Option<&ToastContainer> {
        self.container.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_none()
    }
}

/// Something that can display toasts.
///
/// Methods take `&self` so several callbacks of one request can hold the same
/// notifier at once; implementations use interior mutability.
pub trait Notifier {
    fn show(&self, toasts: Vec<Toast>);

    fn destroy(&self);

    fn progress(&self, message: &str) {
        self.show(vec![Toast::progress(message)]);
    }

    fn error(&self, message: &str) {
        self.show(vec![Toast::error(message)]);
    }
}

impl Notifier for RefCell<ToastStack> {
    fn show(&self, toasts: Vec<Toast>) {
        self.borrow_mut().show(toasts);
    }

    fn destroy(&self) {
        self.borrow_mut().destroy();
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn show(&self, toasts: Vec<Toast>) {
        (**self).show(toasts)
    }

    fn destroy(&self) {
        (**self).destroy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_twice_keeps_only_second_set() {
        let mut stack = ToastStack::new();
        stack.show(vec![Toast::progress("Loading...")]);
        stack.show(vec![Toast::error("first"), Toast::error("second")]);

        let container = stack.container().unwrap();
        assert_eq!(container.toasts.len(), 2);
        assert_eq!(container.toasts[0].message, "first");
        assert_eq!(container.toasts[1].message, "second");
        assert!(container.is_error_only());
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut stack = ToastStack::new();
        stack.destroy();
        assert!(stack.is_empty());

        stack.show(vec![Toast::error("oops")]);
        stack.destroy();
        stack.destroy();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_dismiss_ignores_stale_container() {
        let mut stack = ToastStack::new();
        stack.show(vec![Toast::error("old")]);
        let old_id = stack.container().unwrap().id;
        stack.show(vec![Toast::error("new")]);

        stack.dismiss(old_id);
        assert_eq!(stack.container().unwrap().toasts[0].message, "new");

        let new_id = stack.container().unwrap().id;
        stack.dismiss(new_id);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_notifier_convenience_methods() {
        let stack = RefCell::new(ToastStack::new());
        stack.progress(DEFAULT_PROGRESS_MESSAGE);
        {
            let s = stack.borrow();
            let c = s.container().unwrap();
            assert_eq!(c.toasts, vec![Toast::progress("Loading...")]);
            assert!(!c.is_error_only());
        }

        stack.error("Something broke");
        let s = stack.borrow();
        assert_eq!(s.container().unwrap().toasts, vec![Toast::error("Something broke")]);
    }
}
