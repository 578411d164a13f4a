use std::fmt;
use std::sync::{Arc, Weak};

use crate::coords::Viewport;

use super::{Canvas, RenderConfig, RenderError};

/// Host view a scene is painted for.
///
/// Hosts own views as `Arc<View>`. Render contexts only observe them, so dropping
/// the last `Arc` tears the view down even while a context still exists.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub label: String,
    pub viewport: Viewport,
}

impl View {
    pub fn new(label: impl Into<String>, viewport: Viewport) -> Self {
        Self { label: label.into(), viewport }
    }

    /// Convenience for hosts that hand the view straight to a context.
    pub fn shared(label: impl Into<String>, viewport: Viewport) -> Arc<Self> {
        Arc::new(Self::new(label, viewport))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PassState {
    /// No surface bound.
    Idle,
    /// A surface is bound and the node walk may draw into it.
    Painting,
}

/// Binding between a paint pass and the surface it draws into.
///
/// - Bound to exactly one [`View`] for its whole life, through a `Weak` handle.
/// - `Idle -> Painting -> Idle`: a surface is only held between
///   [`begin_pass`](Self::begin_pass) and [`end_pass`](Self::end_pass).
/// - Single writer. A concurrent pass needs its own context.
pub struct RenderContext<'s> {
    view: Weak<View>,
    surface: Option<&'s mut dyn Canvas>,
    config: RenderConfig,
    passes: u64,
}

impl<'s> RenderContext<'s> {
    pub fn new(view: &Arc<View>) -> Self {
        Self::with_config(view, RenderConfig::default())
    }

    pub fn with_config(view: &Arc<View>, config: RenderConfig) -> Self {
        Self { view: Arc::downgrade(view), surface: None, config, passes: 0 }
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> PassState {
        if self.surface.is_some() { PassState::Painting } else { PassState::Idle }
    }

    /// Number of passes started on this context.
    #[inline]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    #[inline]
    pub fn is_view_alive(&self) -> bool {
        self.view.strong_count() > 0
    }

    /// The bound view, if it still exists.
    #[inline]
    pub fn view(&self) -> Option<Arc<View>> {
        self.view.upgrade()
    }

    /// Binds `surface` and enters `Painting`.
    ///
    /// Starting a pass on a context whose view is gone is allowed; the pass simply
    /// has no surface available.
    pub fn begin_pass(&mut self, surface: &'s mut dyn Canvas) -> Result<(), RenderError> {
        if self.surface.is_some() {
            return Err(RenderError::AlreadyPainting);
        }

        self.passes += 1;
        self.surface = Some(surface);
        log::debug!("paint pass {} started (view alive: {})", self.passes, self.is_view_alive());
        Ok(())
    }

    /// Releases the surface and returns to `Idle`. Returns `false` if no pass was active.
    pub fn end_pass(&mut self) -> bool {
        let was_painting = self.surface.take().is_some();
        if was_painting {
            log::debug!("paint pass {} ended", self.passes);
        }
        was_painting
    }

    /// Runs `f` inside a pass over `surface`, ending the pass afterwards.
    pub fn with_pass<R>(
        &mut self,
        surface: &'s mut dyn Canvas,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Result<R, RenderError> {
        self.begin_pass(surface)?;
        let out = f(self);
        self.end_pass();
        Ok(out)
    }

    /// The surface to draw into, or `None` when no pass is active or the view is gone.
    ///
    /// Callers check this before every draw call and skip drawing on `None`.
    pub fn current_surface(&mut self) -> Option<&mut (dyn Canvas + 's)> {
        if !self.is_view_alive() {
            return None;
        }
        self.surface.as_deref_mut()
    }
}

impl fmt::Debug for RenderContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("view_alive", &self.is_view_alive())
            .field("state", &self.state())
            .field("passes", &self.passes)
            .field("config", &self.config)
            .finish()
    }
}
