// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout-gated scroll control: requests submitted before the first layout
//! are buffered, and gesture sessions can supersede one another.

use alloc::collections::VecDeque;

use crate::ScrollState;

/// A scroll request a host can submit before layout has happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollRequest {
    /// Scroll by a relative delta, in the gesture sign convention.
    By(f64),
    /// Scroll so this offset from the content start becomes the viewport
    /// top, clamped to the reachable range.
    To(f64),
}

/// Handle for one gesture session. Starting a new session invalidates all
/// earlier handles.
#[derive(Debug, PartialEq, Eq)]
pub struct ScrollSession {
    generation: u64,
}

/// Owns a [`ScrollState`] and gates access to it on layout.
///
/// Scroll extents only exist once the table has been laid out; requests
/// arriving before then cannot be resolved against real geometry. The
/// controller buffers them in arrival order and replays them on the first
/// [`notify_layout`](Self::notify_layout). Gesture sessions give flings a
/// cancellation point: a new gesture supersedes the previous one, and
/// deltas from a superseded session are ignored.
#[derive(Debug, Default)]
pub struct ScrollController {
    state: ScrollState,
    ready: bool,
    buffered: VecDeque<ScrollRequest>,
    active_session: u64,
}

impl ScrollController {
    /// Creates a controller with no layout yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying scroll state.
    #[must_use]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Current whole-pixel offset from the content start.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.offset()
    }

    /// Returns `true` once a layout has established the scroll extents.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Records the extents from a layout pass.
    ///
    /// The first call opens the gate and replays buffered requests in the
    /// order they arrived. Later calls just update the extents, re-clamping
    /// the offset if the content shrank.
    pub fn notify_layout(&mut self, total_size: f64, viewport_size: f64) {
        self.state.set_extents(total_size, viewport_size);
        if !self.ready {
            self.ready = true;
            while let Some(request) = self.buffered.pop_front() {
                let _ = self.apply(request);
            }
        }
    }

    /// Submits a request, applying it immediately when layout is ready.
    ///
    /// Returns the consumed distance, or `None` if the request was buffered
    /// for the first layout.
    pub fn submit(&mut self, request: ScrollRequest) -> Option<f64> {
        if self.ready {
            Some(self.apply(request))
        } else {
            self.buffered.push_back(request);
            None
        }
    }

    /// Starts a new gesture session, superseding any earlier one.
    pub fn begin_session(&mut self) -> ScrollSession {
        self.active_session += 1;
        ScrollSession {
            generation: self.active_session,
        }
    }

    /// Applies a gesture delta for `session`.
    ///
    /// Returns the consumed distance, or `None` when the session has been
    /// superseded or the delta was buffered for the first layout.
    pub fn scroll(&mut self, session: &ScrollSession, delta: f64) -> Option<f64> {
        if session.generation != self.active_session {
            return None;
        }
        self.submit(ScrollRequest::By(delta))
    }

    fn apply(&mut self, request: ScrollRequest) -> f64 {
        match request {
            ScrollRequest::By(delta) => self.state.on_scroll(delta),
            ScrollRequest::To(target) => self.state.scroll_to(target),
        }
    }
}
