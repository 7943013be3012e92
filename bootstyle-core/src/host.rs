// SPDX-License-Identifier: LGPL-3.0-only

//! # Host Style System
//!
//! The narrow interface the engine drives to declare styles in a toolkit.
//!
//! The engine never reads widget geometry or paints pixels. It only declares
//! styles through [StyleSystem]: scalar options ([StyleSystem::configure]),
//! state maps ([StyleSystem::map]), layout trees ([StyleSystem::layout]),
//! image elements ([StyleSystem::element_create]) and the bitmaps they use
//! ([StyleSystem::create_image]).
//!
//! [RecordingStyleSystem] implements the trait in memory. It backs the tests
//! and can export a compiled style sheet as JSON.
//!
//! [StagedStyleSystem] buffers the declarations of one build so that a failed
//! build leaves the host as it was.

use std::fmt::{self, Display, Formatter};

use bootstyle_theme::typography::FontSpec;
use bootstyle_theme::HexColor;
use image::RgbaImage;
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::state::StateSpec;

/// Errors reported by a host style system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// An element with this name already exists.
    #[error("Element '{0}' already exists")]
    DuplicateElement(String),
    /// A layout refers to an element that was never created.
    #[error("Layout for '{style}' refers to unknown element '{element}'")]
    UnknownElement {
        /// Style whose layout was rejected.
        style: String,
        /// The missing element.
        element: String,
    },
    /// An element refers to a bitmap the host does not hold.
    #[error("Unknown image {0}")]
    UnknownImage(BitmapHandle),
    /// Any other toolkit-side failure.
    #[error("{0}")]
    Rejected(String),
}

/// Opaque reference to a bitmap owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BitmapHandle(u32);

impl BitmapHandle {
    /// Wrap a host-assigned id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The host-assigned id.
    pub fn id(self) -> u32 {
        self.0
    }
}

impl Display for BitmapHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "bootstyle-img-{}", self.0)
    }
}

/// A value for a style option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Keyword or free text, e.g. an anchor or relief.
    Str(String),
    /// Integer, e.g. a border width.
    Int(i64),
    /// Flag.
    Bool(bool),
    /// Color.
    Color(HexColor),
    /// Bitmap.
    Image(BitmapHandle),
    /// Font.
    Font(FontSpec),
    /// One, two or four pixel amounts.
    Padding(Vec<u32>),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Int(value)
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Int(i64::from(value))
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Bool(value)
    }
}

impl From<HexColor> for StyleValue {
    fn from(value: HexColor) -> Self {
        StyleValue::Color(value)
    }
}

impl From<BitmapHandle> for StyleValue {
    fn from(value: BitmapHandle) -> Self {
        StyleValue::Image(value)
    }
}

impl From<FontSpec> for StyleValue {
    fn from(value: FontSpec) -> Self {
        StyleValue::Font(value)
    }
}

impl From<&FontSpec> for StyleValue {
    fn from(value: &FontSpec) -> Self {
        StyleValue::Font(value.clone())
    }
}

impl From<Vec<u32>> for StyleValue {
    fn from(value: Vec<u32>) -> Self {
        StyleValue::Padding(value)
    }
}

/// Scalar options for one style.
pub type StyleConfig = IndexMap<String, StyleValue>;

/// One node of a style layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutNode {
    /// Element name.
    pub element: String,
    /// Packing side (`left`, `right`, `top`, `bottom`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    /// Sticky edges, e.g. `nsew`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<String>,
    /// Whether the node takes extra space.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub expand: bool,
    /// Nested elements.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// A node for `element`.
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            side: None,
            sticky: None,
            expand: false,
            children: Vec::new(),
        }
    }

    /// Set the packing side.
    pub fn side(mut self, side: &str) -> Self {
        self.side = Some(side.to_string());
        self
    }

    /// Set the sticky edges.
    pub fn sticky(mut self, sticky: &str) -> Self {
        self.sticky = Some(sticky.to_string());
        self
    }

    /// Let the node expand.
    pub fn expand(mut self) -> Self {
        self.expand = true;
        self
    }

    /// Set the nested elements.
    pub fn children(mut self, children: impl IntoIterator<Item = LayoutNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Every element name in the subtree, depth-first.
    pub fn elements(&self) -> Vec<&str> {
        let mut names = vec![self.element.as_str()];
        for child in &self.children {
            names.extend(child.elements());
        }
        names
    }
}

/// An image-based element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageElement {
    /// Bitmap per state, most-specific-first, ending with `normal`.
    pub states: StateSpec<BitmapHandle>,
    /// Nine-slice border in pixels (one, two or four values).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub border: Vec<u32>,
    /// Inner padding in pixels.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub padding: Vec<u32>,
    /// Sticky edges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky: Option<String>,
    /// Fixed size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<(u32, u32)>,
}

impl ImageElement {
    /// An element drawing `states`.
    pub fn new(states: StateSpec<BitmapHandle>) -> Self {
        Self {
            states,
            border: Vec::new(),
            padding: Vec::new(),
            sticky: None,
            size: None,
        }
    }

    /// Set the nine-slice border.
    pub fn border(mut self, border: impl Into<Vec<u32>>) -> Self {
        self.border = border.into();
        self
    }

    /// Set the inner padding.
    pub fn padding(mut self, padding: impl Into<Vec<u32>>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the sticky edges.
    pub fn sticky(mut self, sticky: &str) -> Self {
        self.sticky = Some(sticky.to_string());
        self
    }

    /// Fix the element size.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }
}

/// How an element is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementSpec {
    /// Drawn from bitmaps.
    Image(ImageElement),
    /// Copied from another toolkit theme.
    From {
        /// Source theme, e.g. `clam`.
        theme: String,
        /// Element to copy; the new element's own name when unset.
        #[serde(skip_serializing_if = "Option::is_none")]
        element: Option<String>,
    },
}

/// The toolkit style database the engine writes into.
pub trait StyleSystem {
    /// Merge scalar options into `style`.
    fn configure(&mut self, style: &str, options: &StyleConfig) -> Result<(), HostError>;

    /// Set the state map of one option of `style`.
    fn map(&mut self, style: &str, option: &str, states: &StateSpec<StyleValue>) -> Result<(), HostError>;

    /// Set the layout tree of `style`.
    fn layout(&mut self, style: &str, layout: &[LayoutNode]) -> Result<(), HostError>;

    /// Create a named element.
    fn element_create(&mut self, name: &str, spec: &ElementSpec) -> Result<(), HostError>;

    /// Hand a bitmap to the host.
    fn create_image(&mut self, image: RgbaImage) -> Result<BitmapHandle, HostError>;

    /// Drop a bitmap no element refers to.
    fn release_image(&mut self, handle: BitmapHandle) -> Result<(), HostError>;

    /// Pixels per point as reported by the toolkit.
    fn scaling(&self) -> f64;

    /// Drop every style, element and bitmap.
    fn reset(&mut self) -> Result<(), HostError>;
}

/// Everything declared for one style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordedStyle {
    /// Merged scalar options.
    pub config: StyleConfig,
    /// State map per option.
    pub maps: IndexMap<String, StateSpec<StyleValue>>,
    /// Layout tree, if one was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Vec<LayoutNode>>,
}

/// A call received by a [RecordingStyleSystem].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    /// [StyleSystem::configure]
    Configure(String),
    /// [StyleSystem::map]
    Map {
        /// Style name.
        style: String,
        /// Option name.
        option: String,
    },
    /// [StyleSystem::layout]
    Layout(String),
    /// [StyleSystem::element_create]
    ElementCreate(String),
    /// [StyleSystem::create_image]
    CreateImage(BitmapHandle),
    /// [StyleSystem::release_image]
    ReleaseImage(BitmapHandle),
    /// [StyleSystem::reset]
    Reset,
}

/// In-memory [StyleSystem] that records every declaration.
///
/// Layouts must only refer to elements created before them or to elements the
/// toolkit provides itself (names without a style prefix, e.g. `Button.label`).
#[derive(Debug, Clone)]
pub struct RecordingStyleSystem {
    scaling: f64,
    styles: IndexMap<String, RecordedStyle>,
    elements: IndexMap<String, ElementSpec>,
    images: IndexMap<BitmapHandle, RgbaImage>,
    calls: Vec<HostCall>,
    next_image: u32,
}

#[derive(Serialize)]
struct StyleSheet<'a> {
    scaling: f64,
    styles: &'a IndexMap<String, RecordedStyle>,
    elements: &'a IndexMap<String, ElementSpec>,
    images: IndexMap<String, (u32, u32)>,
}

impl RecordingStyleSystem {
    /// Create a host reporting `scaling` pixels per point.
    pub fn new(scaling: f64) -> Self {
        Self {
            scaling,
            styles: IndexMap::new(),
            elements: IndexMap::new(),
            images: IndexMap::new(),
            calls: Vec::new(),
            next_image: 0,
        }
    }

    /// Everything declared for `style`.
    pub fn style(&self, style: &str) -> Option<&RecordedStyle> {
        self.styles.get(style)
    }

    /// Names of every declared style.
    pub fn style_names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// A created element.
    pub fn element(&self, name: &str) -> Option<&ElementSpec> {
        self.elements.get(name)
    }

    /// Names of every created element.
    pub fn element_names(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// A bitmap held by the host.
    pub fn image(&self, handle: BitmapHandle) -> Option<&RgbaImage> {
        self.images.get(&handle)
    }

    /// Number of bitmaps currently held.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Calls received, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Forget the call log, keeping the declared state.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Export the declared style sheet as JSON. Bitmaps are listed by size.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let sheet = StyleSheet {
            scaling: self.scaling,
            styles: &self.styles,
            elements: &self.elements,
            images: self
                .images
                .iter()
                .map(|(handle, image)| (handle.to_string(), image.dimensions()))
                .collect(),
        };
        serde_json::to_string_pretty(&sheet)
    }

    fn has_element(&self, name: &str) -> bool {
        self.elements.contains_key(name) || !name.contains('.') || is_toolkit_element(name)
    }
}

/// Elements such as `Button.label` or `Treeitem.indicator` that every toolkit theme provides.
fn is_toolkit_element(name: &str) -> bool {
    name.split('.').count() == 2
        && name
            .split('.')
            .next()
            .is_some_and(|class| class.chars().next().is_some_and(char::is_uppercase))
}

impl Default for RecordingStyleSystem {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl StyleSystem for RecordingStyleSystem {
    fn configure(&mut self, style: &str, options: &StyleConfig) -> Result<(), HostError> {
        let entry = self.styles.entry(style.to_string()).or_default();
        for (name, value) in options {
            entry.config.insert(name.clone(), value.clone());
        }
        self.calls.push(HostCall::Configure(style.to_string()));
        Ok(())
    }

    fn map(&mut self, style: &str, option: &str, states: &StateSpec<StyleValue>) -> Result<(), HostError> {
        self.styles
            .entry(style.to_string())
            .or_default()
            .maps
            .insert(option.to_string(), states.clone());
        self.calls.push(HostCall::Map {
            style: style.to_string(),
            option: option.to_string(),
        });
        Ok(())
    }

    fn layout(&mut self, style: &str, layout: &[LayoutNode]) -> Result<(), HostError> {
        for node in layout {
            if let Some(missing) = node.elements().into_iter().find(|name| !self.has_element(name)) {
                return Err(HostError::UnknownElement {
                    style: style.to_string(),
                    element: missing.to_string(),
                });
            }
        }
        self.styles.entry(style.to_string()).or_default().layout = Some(layout.to_vec());
        self.calls.push(HostCall::Layout(style.to_string()));
        Ok(())
    }

    fn element_create(&mut self, name: &str, spec: &ElementSpec) -> Result<(), HostError> {
        if self.elements.contains_key(name) {
            return Err(HostError::DuplicateElement(name.to_string()));
        }
        if let ElementSpec::Image(element) = spec {
            if let Some((_, handle)) = element.states.iter().find(|(_, h)| !self.images.contains_key(*h)) {
                return Err(HostError::UnknownImage(*handle));
            }
        }
        self.elements.insert(name.to_string(), spec.clone());
        self.calls.push(HostCall::ElementCreate(name.to_string()));
        Ok(())
    }

    fn create_image(&mut self, image: RgbaImage) -> Result<BitmapHandle, HostError> {
        let handle = BitmapHandle::new(self.next_image);
        self.next_image += 1;
        self.images.insert(handle, image);
        self.calls.push(HostCall::CreateImage(handle));
        Ok(handle)
    }

    fn release_image(&mut self, handle: BitmapHandle) -> Result<(), HostError> {
        self.images.shift_remove(&handle).ok_or(HostError::UnknownImage(handle))?;
        self.calls.push(HostCall::ReleaseImage(handle));
        Ok(())
    }

    fn scaling(&self) -> f64 {
        self.scaling
    }

    fn reset(&mut self) -> Result<(), HostError> {
        self.styles.clear();
        self.elements.clear();
        self.images.clear();
        self.calls.push(HostCall::Reset);
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Declaration {
    Configure(String, StyleConfig),
    Map(String, String, StateSpec<StyleValue>),
    Layout(String, Vec<LayoutNode>),
    Element(String, ElementSpec),
}

/// A [StyleSystem] that holds declarations back until [commit](Self::commit).
///
/// Bitmaps go to the underlying host right away so that their handles are
/// real; [discard](Self::discard) releases them again. Nothing else reaches
/// the host unless the whole batch is committed.
pub struct StagedStyleSystem<'h, S: StyleSystem + ?Sized> {
    host: &'h mut S,
    declarations: Vec<Declaration>,
    elements: Vec<String>,
    images: Vec<BitmapHandle>,
}

impl<'h, S: StyleSystem + ?Sized> StagedStyleSystem<'h, S> {
    /// Stage declarations on top of `host`.
    pub fn new(host: &'h mut S) -> Self {
        Self {
            host,
            declarations: Vec::new(),
            elements: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Whether nothing has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.images.is_empty()
    }

    /// Send every staged declaration to the host, in the order it was made.
    pub fn commit(self) -> Result<(), HostError> {
        for declaration in self.declarations {
            match declaration {
                Declaration::Configure(style, options) => self.host.configure(&style, &options)?,
                Declaration::Map(style, option, states) => self.host.map(&style, &option, &states)?,
                Declaration::Layout(style, layout) => self.host.layout(&style, &layout)?,
                Declaration::Element(name, spec) => self.host.element_create(&name, &spec)?,
            }
        }
        Ok(())
    }

    /// Drop the staged declarations and release the bitmaps created meanwhile.
    pub fn discard(self) -> Result<(), HostError> {
        for handle in self.images {
            self.host.release_image(handle)?;
        }
        Ok(())
    }
}

impl<S: StyleSystem + ?Sized> StyleSystem for StagedStyleSystem<'_, S> {
    fn configure(&mut self, style: &str, options: &StyleConfig) -> Result<(), HostError> {
        self.declarations
            .push(Declaration::Configure(style.to_string(), options.clone()));
        Ok(())
    }

    fn map(&mut self, style: &str, option: &str, states: &StateSpec<StyleValue>) -> Result<(), HostError> {
        self.declarations
            .push(Declaration::Map(style.to_string(), option.to_string(), states.clone()));
        Ok(())
    }

    fn layout(&mut self, style: &str, layout: &[LayoutNode]) -> Result<(), HostError> {
        self.declarations
            .push(Declaration::Layout(style.to_string(), layout.to_vec()));
        Ok(())
    }

    fn element_create(&mut self, name: &str, spec: &ElementSpec) -> Result<(), HostError> {
        if self.elements.iter().any(|staged| staged == name) {
            return Err(HostError::DuplicateElement(name.to_string()));
        }
        self.elements.push(name.to_string());
        self.declarations
            .push(Declaration::Element(name.to_string(), spec.clone()));
        Ok(())
    }

    fn create_image(&mut self, image: RgbaImage) -> Result<BitmapHandle, HostError> {
        let handle = self.host.create_image(image)?;
        self.images.push(handle);
        Ok(handle)
    }

    fn release_image(&mut self, handle: BitmapHandle) -> Result<(), HostError> {
        self.images.retain(|staged| *staged != handle);
        self.host.release_image(handle)
    }

    fn scaling(&self) -> f64 {
        self.host.scaling()
    }

    fn reset(&mut self) -> Result<(), HostError> {
        Err(HostError::Rejected("reset while declarations are staged".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VisualState;

    fn pixel() -> RgbaImage {
        RgbaImage::new(1, 1)
    }

    #[test]
    fn records_and_merges_configuration() {
        let mut host = RecordingStyleSystem::default();
        let mut first = StyleConfig::new();
        first.insert("padding".into(), StyleValue::from(vec![4u32]));
        let mut second = StyleConfig::new();
        second.insert("anchor".into(), StyleValue::from("center"));
        host.configure("primary.TButton", &first).unwrap();
        host.configure("primary.TButton", &second).unwrap();

        let style = host.style("primary.TButton").unwrap();
        assert_eq!(style.config.len(), 2);
        assert_eq!(host.calls().len(), 2);
    }

    #[test]
    fn rejects_duplicate_elements_and_unknown_images() {
        let mut host = RecordingStyleSystem::default();
        let handle = host.create_image(pixel()).unwrap();
        let spec = ElementSpec::Image(ImageElement::new(StateSpec::new().otherwise(handle)));
        host.element_create("x.TButton.border", &spec).unwrap();
        assert_eq!(
            host.element_create("x.TButton.border", &spec),
            Err(HostError::DuplicateElement("x.TButton.border".into()))
        );

        let stale = ElementSpec::Image(ImageElement::new(
            StateSpec::new().with(VisualState::Hover, BitmapHandle::new(99)).otherwise(handle),
        ));
        assert_eq!(
            host.element_create("y.TButton.border", &stale),
            Err(HostError::UnknownImage(BitmapHandle::new(99)))
        );
    }

    #[test]
    fn layout_requires_known_elements() {
        let mut host = RecordingStyleSystem::default();
        let tree = [LayoutNode::new("x.TButton.border").children([LayoutNode::new("Button.label")])];
        assert!(matches!(host.layout("x.TButton", &tree), Err(HostError::UnknownElement { .. })));

        let handle = host.create_image(pixel()).unwrap();
        let spec = ElementSpec::Image(ImageElement::new(StateSpec::new().otherwise(handle)));
        host.element_create("x.TButton.border", &spec).unwrap();
        host.layout("x.TButton", &tree).unwrap();
    }

    #[test]
    fn reset_drops_everything() {
        let mut host = RecordingStyleSystem::new(2.0);
        host.create_image(pixel()).unwrap();
        host.configure("TFrame", &StyleConfig::new()).unwrap();
        host.reset().unwrap();
        assert_eq!(host.image_count(), 0);
        assert!(host.style("TFrame").is_none());
        assert_eq!(host.calls().last(), Some(&HostCall::Reset));
        assert!(host.to_json().unwrap().contains("\"scaling\": 2.0"));
    }

    #[test]
    fn staged_declarations_wait_for_commit() {
        let mut host = RecordingStyleSystem::default();
        let mut staged = StagedStyleSystem::new(&mut host);
        assert!(staged.is_empty());
        let handle = staged.create_image(pixel()).unwrap();
        let spec = ElementSpec::Image(ImageElement::new(StateSpec::new().otherwise(handle)));
        staged.element_create("x.TButton.border", &spec).unwrap();
        assert_eq!(
            staged.element_create("x.TButton.border", &spec),
            Err(HostError::DuplicateElement("x.TButton.border".into()))
        );
        staged
            .layout("x.TButton", &[LayoutNode::new("x.TButton.border")])
            .unwrap();
        assert!(!staged.is_empty());
        staged.commit().unwrap();

        assert!(host.element("x.TButton.border").is_some());
        assert!(host.style("x.TButton").unwrap().layout.is_some());
        assert_eq!(
            host.calls(),
            &[
                HostCall::CreateImage(handle),
                HostCall::ElementCreate("x.TButton.border".into()),
                HostCall::Layout("x.TButton".into()),
            ]
        );
    }

    #[test]
    fn discarded_declarations_leave_no_trace() {
        let mut host = RecordingStyleSystem::default();
        let mut staged = StagedStyleSystem::new(&mut host);
        let handle = staged.create_image(pixel()).unwrap();
        let spec = ElementSpec::Image(ImageElement::new(StateSpec::new().otherwise(handle)));
        staged.element_create("x.TButton.border", &spec).unwrap();
        staged.configure("x.TButton", &StyleConfig::new()).unwrap();
        assert!(staged.reset().is_err());
        staged.discard().unwrap();

        assert_eq!(host.image_count(), 0);
        assert!(host.element("x.TButton.border").is_none());
        assert!(host.style("x.TButton").is_none());
        assert_eq!(host.calls().last(), Some(&HostCall::ReleaseImage(handle)));
    }
}
