// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

//! A guard that runs a closing action exactly once,
//! either when asked to or when it goes out of scope.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::error::Error;

type CloseAction<'a, T, E> = Box<dyn FnOnce(&mut T) -> Result<(), E> + 'a>;

/// Mutable access to a target that has something left open,
/// e.g. a [`DocumentWriter`](crate::writer::DocumentWriter) with an open tag.
///
/// The closing action runs on the first call to [`Closer::close`],
/// or when the guard is dropped if that never happened.
/// Any further call to `close` does nothing.
///
/// While the guard lives, the target is reachable only through it
/// (it dereferences to the target),
/// so nested guards are necessarily closed before their parent.
#[must_use = "dropping the closer immediately closes what was just opened"]
pub struct Closer<'a, T: ?Sized, E: fmt::Display = Error> {
    target: &'a mut T,
    action: Option<CloseAction<'a, T, E>>,
}

impl<'a, T: ?Sized, E: fmt::Display> Closer<'a, T, E> {
    pub fn new(target: &'a mut T, action: impl FnOnce(&mut T) -> Result<(), E> + 'a) -> Self {
        Self {
            target,
            action: Some(Box::new(action)),
        }
    }

    /// Runs the closing action, unless that already happened.
    ///
    /// # Errors
    ///
    /// Whatever the closing action returns on its first (and only) run.
    pub fn close(&mut self) -> Result<(), E> {
        match self.action.take() {
            Some(action) => action(&mut *self.target),
            None => Ok(()),
        }
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.action.is_none()
    }
}

impl<T: ?Sized, E: fmt::Display> Deref for Closer<'_, T, E> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: ?Sized, E: fmt::Display> DerefMut for Closer<'_, T, E> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.target
    }
}

impl<T: ?Sized, E: fmt::Display> Drop for Closer<'_, T, E> {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::warn!("Failed to close on scope exit: {err}");
        }
    }
}
