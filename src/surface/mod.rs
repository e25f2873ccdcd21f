// SPDX-License-Identifier: MPL-2.0
//! The view surface: the capability boundary between the engine and
//! whatever renders the page.
//!
//! The engine never touches a document directly. Everything it needs
//! (querying elements, reading markup attributes, toggling class markers,
//! writing text and inline styles, scrolling) goes through the [`Surface`]
//! trait. Threshold math and visibility arithmetic stay on this side of the
//! boundary so they are testable without a rendering host.
//!
//! [`memory::MemorySurface`] is the reference host, used by the unit tests,
//! the integration suite, and the demo binary.

pub mod memory;

/// Opaque handle to a surface element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

/// Element taxonomy, just enough to pick placeholder vs text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    Input,
    TextArea,
    #[default]
    Other,
}

impl ElementKind {
    /// Input-like controls receive localized text as a placeholder rather
    /// than as content.
    pub fn is_input_like(self) -> bool {
        matches!(self, ElementKind::Input | ElementKind::TextArea)
    }
}

/// Element bounds in document coordinates (y grows downward from the top of
/// the page, independent of the current scroll position).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Current viewport: vertical scroll offset plus window dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub scroll_offset: f64,
    pub width: f64,
    pub height: f64,
}

/// Capability interface over the rendering host.
///
/// All operations are infallible from the engine's point of view: a query
/// that matches nothing returns an empty result, and mutations on a vanished
/// node are ignored by the host. This is what lets every feature degrade to
/// a no-op when its markup is absent.
pub trait Surface {
    /// The location path of the current page, e.g. `/pages/about.html`.
    fn location_path(&self) -> String;

    fn viewport(&self) -> Viewport;

    /// Looks up a single element by its unique id attribute.
    fn query_id(&self, id: &str) -> Option<NodeId>;

    /// All elements carrying `class`, in document order.
    fn query_class(&self, class: &str) -> Vec<NodeId>;

    /// All elements carrying the attribute `name`, in document order.
    fn query_attr(&self, name: &str) -> Vec<NodeId>;

    fn kind(&self, node: NodeId) -> ElementKind;

    fn attr(&self, node: NodeId, name: &str) -> Option<String>;

    fn text(&self, node: NodeId) -> Option<String>;

    fn set_text(&mut self, node: NodeId, text: &str);

    fn placeholder(&self, node: NodeId) -> Option<String>;

    fn set_placeholder(&mut self, node: NodeId, text: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Bounds of the element in document coordinates, if it is laid out.
    fn rect(&self, node: NodeId) -> Option<Rect>;

    fn style(&self, node: NodeId, property: &str) -> Option<String>;

    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// The element's parent, if any.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Whether `node` is `ancestor` itself or a descendant of it.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// Scrolls the viewport so the element's top edge is in view.
    fn scroll_to(&mut self, node: NodeId);

    /// Spawns an ephemeral decoration element under `parent`. Returns `None`
    /// if the parent no longer exists.
    fn spawn_child(&mut self, parent: NodeId, class: &str) -> Option<NodeId>;

    fn remove_node(&mut self, node: NodeId);
}

/// Fraction of `rect` visible inside the viewport, with the observation
/// region's bottom edge pulled up by `bottom_margin`.
///
/// A zero-height element counts as fully visible while its top edge is
/// inside the region.
pub fn visible_fraction(rect: Rect, viewport: Viewport, bottom_margin: f64) -> f64 {
    let region_top = viewport.scroll_offset;
    let region_bottom = viewport.scroll_offset + viewport.height - bottom_margin;
    if region_bottom <= region_top {
        return 0.0;
    }
    if rect.height <= 0.0 {
        return if rect.y >= region_top && rect.y <= region_bottom {
            1.0
        } else {
            0.0
        };
    }
    let overlap = rect.bottom().min(region_bottom) - rect.y.max(region_top);
    (overlap / rect.height).clamp(0.0, 1.0)
}

/// Whether the element lies entirely inside the current viewport.
pub fn is_in_viewport(rect: Rect, viewport: Viewport) -> bool {
    rect.y >= viewport.scroll_offset
        && rect.x >= 0.0
        && rect.bottom() <= viewport.scroll_offset + viewport.height
        && rect.right() <= viewport.width
}
