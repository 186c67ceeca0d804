// src/state/header.rs
//
// Navigation header: {transparent, opaque} x {menu closed, menu open}.

/// The header turns opaque once the page has scrolled past this many pixels.
pub const SCROLL_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl HeaderState {
    /// Recompute opacity for a scroll offset. Returns true only when the
    /// opaque/transparent flag actually flips.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }
}

/// Whatever owns the page's background scrolling.
pub trait ScrollSurface {
    fn pin(&mut self);
    fn release(&mut self);
}

/// Holds the background scroll pinned for as long as it lives.
pub struct ScrollLock<'a, S: ScrollSurface> {
    surface: Option<&'a mut S>,
}

impl<'a, S: ScrollSurface> ScrollLock<'a, S> {
    pub fn acquire(surface: &'a mut S) -> Self {
        surface.pin();
        ScrollLock {
            surface: Some(surface),
        }
    }

    /// Release the lock and hand the surface back.
    pub fn into_surface(mut self) -> Option<&'a mut S> {
        let surface = self.surface.take()?;
        surface.release();
        Some(surface)
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<'_, S> {
    fn drop(&mut self) {
        if let Some(surface) = self.surface.take() {
            surface.release();
        }
    }
}

/// A mounted header. Opening the menu takes the scroll lock; closing the
/// menu or dropping the header gives it back.
pub struct NavHeader<'a, S: ScrollSurface> {
    state: HeaderState,
    surface: Option<&'a mut S>,
    lock: Option<ScrollLock<'a, S>>,
}

impl<'a, S: ScrollSurface> NavHeader<'a, S> {
    pub fn mount(surface: &'a mut S) -> Self {
        NavHeader {
            state: HeaderState::default(),
            surface: Some(surface),
            lock: None,
        }
    }

    /// Re-mount a header whose state was carried by the client.
    pub fn restore(state: HeaderState, surface: &'a mut S) -> Self {
        let mut header = NavHeader::mount(surface);
        header.state.scrolled = state.scrolled;
        if state.menu_open {
            header.open_menu();
        }
        header
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    pub fn scroll_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn on_scroll(&mut self, offset: u32) -> bool {
        self.state.on_scroll(offset)
    }

    pub fn toggle_menu(&mut self) {
        if self.state.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// A navigation link was followed. Closes the menu if it was open.
    pub fn activate_link(&mut self) -> bool {
        if !self.state.menu_open {
            return false;
        }
        self.close_menu();
        true
    }

    fn open_menu(&mut self) {
        if let Some(surface) = self.surface.take() {
            self.lock = Some(ScrollLock::acquire(surface));
        }
        self.state.menu_open = true;
    }

    fn close_menu(&mut self) {
        if let Some(lock) = self.lock.take() {
            self.surface = lock.into_surface();
        }
        self.state.menu_open = false;
    }
}

/// Events the header fragment endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEvent {
    Scroll(u32),
    ToggleMenu,
    FollowLink,
}

/// The body of the page being rendered on the server.
#[derive(Debug, Default)]
pub struct PageBody {
    pub overflow_pinned: bool,
}

impl ScrollSurface for PageBody {
    fn pin(&mut self) {
        self.overflow_pinned = true;
    }

    fn release(&mut self) {
        self.overflow_pinned = false;
    }
}

/// Result of applying an event: the state to render and whether the
/// rendered header must carry the body scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderUpdate {
    pub state: HeaderState,
    pub scroll_locked: bool,
}

/// Apply one client event to a carried header state.
/// Returns `None` when nothing changed and no re-render is due.
pub fn apply(state: HeaderState, event: HeaderEvent) -> Option<HeaderUpdate> {
    let mut body = PageBody::default();
    let mut header = NavHeader::restore(state, &mut body);

    let changed = match event {
        HeaderEvent::Scroll(offset) => header.on_scroll(offset),
        HeaderEvent::ToggleMenu => {
            header.toggle_menu();
            true
        }
        HeaderEvent::FollowLink => header.activate_link(),
    };

    let update = changed.then(|| HeaderUpdate {
        state: header.state(),
        scroll_locked: header.scroll_locked(),
    });
    drop(header);
    debug_assert!(!body.overflow_pinned);
    update
}
