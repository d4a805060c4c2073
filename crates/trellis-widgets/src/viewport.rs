// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Viewport: a panning window onto a single child

use log::{trace, warn};
use trellis::cast::{Conv, ConvFloat};
use trellis::geom::{Coord, Offset, Rect, Size};

use crate::tree::{Children, Container, Placed};
use crate::{Error, Result, Slot, Tree, WidgetId, WidgetKind};

/// A container showing part of its child
///
/// The viewport claims no space. Its child is given its minimum size at the
/// origin of *child space*, independent of where the viewport is.
///
/// The *panning vector* is the offset from the child's bottom-left corner to
/// the child-space point shown at the viewport's bottom-left corner. It is
/// clamped whenever set, so that the view stays within the child:
/// `pan.x ∈ [child.left, child.right - viewport.width]` and likewise for `y`.
/// Where the child is smaller than the viewport the range is empty and that
/// axis is locked to the child's origin. Before both viewport and child have
/// been laid out, the vector is stored as given and clamped on the next
/// resize.
#[derive(Clone, Debug)]
pub struct Viewport {
    slot: Slot,
    pan: Offset,
    deferred_center: Option<Coord>,
    sensitivity: f32,
    // sub-pixel remainder of panning motion
    residual: (f32, f32),
}

fn clamp_pan(pan: Offset, rect: Rect, child: Rect) -> Offset {
    fn axis(v: i32, lo: i32, hi: i32) -> i32 {
        if hi < lo { lo } else { v.clamp(lo, hi) }
    }

    Offset(
        axis(pan.0, child.left(), child.right() - rect.width()),
        axis(pan.1, child.bottom(), child.top() - rect.height()),
    )
}

impl Viewport {
    /// The child, if any
    #[inline]
    pub fn child(&self) -> Option<WidgetId> {
        self.slot.get()
    }

    /// The panning vector
    #[inline]
    pub fn panning_vector(&self) -> Offset {
        self.pan
    }

    /// A center of view waiting for the viewport to be laid out
    #[inline]
    pub fn deferred_center_of_view(&self) -> Option<Coord> {
        self.deferred_center
    }

    /// Panning speed: pixels per second per unit of direction
    #[inline]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    fn set_pan(&mut self, pan: Offset, rect: Option<Rect>, child: Option<Rect>) {
        self.pan = match (rect, child) {
            (Some(rect), Some(child)) => clamp_pan(pan, rect, child),
            _ => pan,
        };
    }

    fn center_on(&mut self, point: Coord, rect: Rect, child: Option<Rect>) {
        let view_center = rect.center() - rect.bottom_left();
        self.set_pan(Offset::conv(point) - view_center, Some(rect), child);
    }

    /// Apply any deferred center of view, then clamp
    fn settle(&mut self, rect: Rect, child: Option<Rect>) {
        match self.deferred_center.take() {
            Some(point) => self.center_on(point, rect, child),
            None => self.set_pan(self.pan, Some(rect), child),
        }
    }
}

impl Container for Viewport {
    fn children(&self) -> Children {
        self.slot.get().into_iter().collect()
    }

    fn remove_child(&mut self, child: WidgetId) -> bool {
        self.slot.remove(child)
    }

    fn min_size(&self, _: &dyn Fn(WidgetId) -> Size) -> Size {
        Size::ZERO
    }

    fn child_rects(&self, _: Rect, min_of: &dyn Fn(WidgetId) -> Size) -> Placed {
        self.slot
            .get()
            .map(|child| (child, Rect::from_size(min_of(child))))
            .into_iter()
            .collect()
    }
}

/// Read access to a [`Viewport`], with its current geometry
///
/// Coordinate transforms require the viewport to have been laid out.
pub struct ViewportRef<'a> {
    id: WidgetId,
    data: &'a Viewport,
    rect: Option<Rect>,
    child_rect: Option<Rect>,
}

impl<'a> ViewportRef<'a> {
    /// Access viewport data
    #[inline]
    pub fn data(&self) -> &'a Viewport {
        self.data
    }

    /// The panning vector
    #[inline]
    pub fn panning_vector(&self) -> Offset {
        self.data.pan
    }

    fn rect(&self) -> Result<Rect> {
        self.rect.ok_or(Error::NotLaidOut(self.id))
    }

    fn child_origin(&self) -> Coord {
        self.child_rect.map(|r| r.bottom_left()).unwrap_or_default()
    }

    /// Map a screen coordinate into child space
    pub fn child_coords(&self, screen: Coord) -> Result<Coord> {
        let offset = screen - self.rect()?.bottom_left();
        Ok(self.child_origin() + offset + self.data.pan)
    }

    /// Map a child-space coordinate onto the screen
    pub fn screen_coords(&self, child: Coord) -> Result<Coord> {
        let offset = child - self.child_origin();
        Ok(self.rect()?.bottom_left() + offset - self.data.pan)
    }

    /// The child-space rect currently visible
    pub fn visible_area(&self) -> Result<Rect> {
        let rect = self.rect()?;
        Ok(Rect::new(self.child_coords(rect.bottom_left())?, rect.size))
    }
}

/// Mutable access to a [`Viewport`]
pub struct ViewportMut<'a> {
    tree: &'a mut Tree,
    id: WidgetId,
}

impl Tree {
    /// Add an empty [`Viewport`]
    ///
    /// Sensitivity is taken from the tree's configuration.
    pub fn add_viewport(&mut self) -> WidgetId {
        let viewport = Viewport {
            slot: Slot::default(),
            pan: Offset::ZERO,
            deferred_center: None,
            sensitivity: self.config().sensitivity,
            residual: (0.0, 0.0),
        };
        self.insert_node(WidgetKind::Viewport(viewport))
    }

    /// Rects of a viewport and of its child
    fn viewport_geometry(&self, id: WidgetId) -> Result<(Option<Rect>, Option<Rect>)> {
        let node = self.node(id)?;
        let child = node.kind.as_viewport().and_then(|vp| vp.child());
        let child_rect = child.and_then(|c| self.node(c).ok()).and_then(|n| n.rect);
        Ok((node.rect, child_rect))
    }

    /// Access a [`Viewport`]
    pub fn viewport(&self, id: WidgetId) -> Result<ViewportRef<'_>> {
        let data = self.data(id, "Viewport", WidgetKind::as_viewport)?;
        let (rect, child_rect) = self.viewport_geometry(id)?;
        Ok(ViewportRef {
            id,
            data,
            rect,
            child_rect,
        })
    }

    /// Mutably access a [`Viewport`]
    pub fn viewport_mut(&mut self, id: WidgetId) -> Result<ViewportMut<'_>> {
        self.data_mut(id, "Viewport", WidgetKind::as_viewport_mut)?;
        Ok(ViewportMut { tree: self, id })
    }

    /// Finish resizing a viewport (after its child)
    pub(crate) fn settle_viewport(&mut self, id: WidgetId) {
        let Ok((Some(rect), child_rect)) = self.viewport_geometry(id) else {
            return;
        };
        if let Ok(viewport) = self.data_mut(id, "Viewport", WidgetKind::as_viewport_mut) {
            viewport.settle(rect, child_rect);
            trace!("Tree: viewport {id:?} pan={:?}", viewport.pan);
        }
    }
}

impl<'a> ViewportMut<'a> {
    /// The viewport's identifier
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    fn data(&mut self) -> Result<&mut Viewport> {
        self.tree.data_mut(self.id, "Viewport", WidgetKind::as_viewport_mut)
    }

    /// Set the child, replacing (detaching) any existing child, and update
    /// layout
    ///
    /// If `child` has another parent it is detached first.
    pub fn set_child(&mut self, child: WidgetId) -> Result<()> {
        let id = self.id;
        self.tree.check_attach(child, id)?;
        let old_parent = self.tree.unlink(child);
        if let Some(previous) = self.data()?.slot.get() {
            self.tree.unlink(previous);
        }

        self.data()?.slot.set(child);
        self.tree.link(child, id);
        self.tree.commit(old_parent.into_iter().chain([id]));
        Ok(())
    }

    /// Detach the child, if any, returning it
    pub fn clear(&mut self) -> Result<Option<WidgetId>> {
        let child = self.data()?.slot.get();
        if let Some(child) = child {
            self.tree.unlink(child);
            self.tree.commit([self.id]);
        }
        Ok(child)
    }

    /// Set the panning vector (clamped)
    pub fn set_panning_vector(&mut self, pan: Offset) -> Result<()> {
        let (rect, child_rect) = self.tree.viewport_geometry(self.id)?;
        self.data()?.set_pan(pan, rect, child_rect);
        Ok(())
    }

    /// Pan so that the child-space point `point` is at the center of view
    ///
    /// If the viewport has not been laid out yet, this happens on the next
    /// resize.
    pub fn set_center_of_view(&mut self, point: Coord) -> Result<()> {
        let (rect, child_rect) = self.tree.viewport_geometry(self.id)?;
        let viewport = self.data()?;
        match rect {
            Some(rect) => {
                viewport.deferred_center = None;
                viewport.center_on(point, rect, child_rect);
            }
            None => viewport.deferred_center = Some(point),
        }
        Ok(())
    }

    /// Pan in `direction` for `dt` seconds
    ///
    /// Motion is `direction × sensitivity × dt` pixels; fractional pixels
    /// carry over to the next call.
    pub fn pan(&mut self, direction: (f32, f32), dt: f32) -> Result<()> {
        let (rect, child_rect) = self.tree.viewport_geometry(self.id)?;
        let viewport = self.data()?;
        let scale = viewport.sensitivity * dt;
        let dx = viewport.residual.0 + direction.0 * scale;
        let dy = viewport.residual.1 + direction.1 * scale;
        let step = match (i32::try_conv_trunc(dx), i32::try_conv_trunc(dy)) {
            (Ok(x), Ok(y)) => Offset(x, y),
            _ => {
                warn!("ViewportMut::pan: ignoring motion ({dx}, {dy})");
                return Ok(());
            }
        };
        viewport.residual = (dx.fract(), dy.fract());
        viewport.set_pan(viewport.pan + step, rect, child_rect);
        Ok(())
    }

    /// Set panning speed
    pub fn set_sensitivity(&mut self, sensitivity: f32) -> Result<()> {
        self.data()?.sensitivity = sensitivity;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn setup(child: Size, rect: Rect) -> (Tree, WidgetId, WidgetId) {
        let mut tree = Tree::new();
        let viewport = tree.add_viewport();
        let spacer = tree.add_spacer(child);
        tree.viewport_mut(viewport).unwrap().set_child(spacer).unwrap();
        tree.set_root(viewport).unwrap();
        tree.resize_root(rect).unwrap();
        (tree, viewport, spacer)
    }

    #[test]
    fn claims_nothing() {
        let (mut tree, viewport, spacer) = setup(Size(500, 300), Rect::from_size(Size(100, 100)));
        assert_eq!(tree.claim(viewport), Ok(Size::ZERO));
        assert_eq!(tree.rect(spacer), Ok(Some(Rect::from_size(Size(500, 300)))));
    }

    #[test]
    fn clamp() {
        let (mut tree, viewport, _) = setup(Size(500, 500), Rect::from_size(Size(100, 100)));
        let mut vp = tree.viewport_mut(viewport).unwrap();
        vp.set_panning_vector(Offset(1000, 1000)).unwrap();
        assert_eq!(tree.viewport(viewport).unwrap().panning_vector(), Offset(400, 400));

        let mut vp = tree.viewport_mut(viewport).unwrap();
        vp.set_panning_vector(Offset(-1000, 50)).unwrap();
        assert_eq!(tree.viewport(viewport).unwrap().panning_vector(), Offset(0, 50));
    }

    #[test]
    fn small_child_locks_to_origin() {
        let (mut tree, viewport, _) = setup(Size(50, 200), Rect::from_size(Size(100, 100)));
        let mut vp = tree.viewport_mut(viewport).unwrap();
        vp.set_panning_vector(Offset(30, 30)).unwrap();
        assert_eq!(tree.viewport(viewport).unwrap().panning_vector(), Offset(0, 30));
    }

    #[test]
    fn unclamped_until_laid_out() {
        let mut tree = Tree::new();
        let viewport = tree.add_viewport();
        let spacer = tree.add_spacer(Size(500, 500));
        let mut vp = tree.viewport_mut(viewport).unwrap();
        vp.set_child(spacer).unwrap();
        vp.set_panning_vector(Offset(1000, -5)).unwrap();
        assert_eq!(tree.viewport(viewport).unwrap().panning_vector(), Offset(1000, -5));

        tree.resize(viewport, Rect::from_size(Size(100, 100))).unwrap();
        assert_eq!(tree.viewport(viewport).unwrap().panning_vector(), Offset(400, 0));
    }

    #[test]
    fn deferred_center() {
        let mut tree = Tree::new();
        let viewport = tree.add_viewport();
        let spacer = tree.add_spacer(Size(500, 500));
        let mut vp = tree.viewport_mut(viewport).unwrap();
        vp.set_child(spacer).unwrap();
        vp.set_center_of_view(Coord(250, 250)).unwrap();
        let view = tree.viewport(viewport).unwrap();
        assert_eq!(view.data().deferred_center_of_view(), Some(Coord(250, 250)));
        assert_eq!(view.panning_vector(), Offset::ZERO);

        tree.resize(viewport, Rect::from_dimensions(10, 20, 100, 100)).unwrap();
        let view = tree.viewport(viewport).unwrap();
        assert_eq!(view.data().deferred_center_of_view(), None);
        assert_eq!(view.panning_vector(), Offset(200, 200));
    }

    #[test]
    fn coordinate_transforms() {
        let (mut tree, viewport, _) =
            setup(Size(500, 500), Rect::from_dimensions(10, 20, 100, 100));
        tree.viewport_mut(viewport)
            .unwrap()
            .set_center_of_view(Coord(250, 250))
            .unwrap();

        let view = tree.viewport(viewport).unwrap();
        assert_eq!(view.child_coords(Coord(10, 20)), Ok(Coord(200, 200)));
        assert_eq!(view.child_coords(Coord(60, 70)), Ok(Coord(250, 250)));
        assert_eq!(view.screen_coords(Coord(250, 250)), Ok(Coord(60, 70)));
        assert_eq!(
            view.visible_area(),
            Ok(Rect::from_dimensions(200, 200, 100, 100))
        );
    }

    #[test]
    fn transforms_need_layout() {
        let mut tree = Tree::new();
        let viewport = tree.add_viewport();
        assert_eq!(
            tree.viewport(viewport).unwrap().child_coords(Coord::ZERO),
            Err(Error::NotLaidOut(viewport))
        );
    }

    #[test]
    fn pan_scaled_by_sensitivity() {
        let (mut tree, viewport, _) = setup(Size(500, 500), Rect::from_size(Size(100, 100)));
        let mut vp = tree.viewport_mut(viewport).unwrap();
        vp.pan((1.0, 0.0), 2.0).unwrap();
        assert_eq!(tree.viewport(viewport).unwrap().panning_vector(), Offset(6, 0));

        let mut vp = tree.viewport_mut(viewport).unwrap();
        vp.set_sensitivity(1.0).unwrap();
        vp.pan((0.0, 0.5), 1.5).unwrap();
        assert_eq!(tree.viewport(viewport).unwrap().panning_vector(), Offset(6, 0));
        let mut vp = tree.viewport_mut(viewport).unwrap();
        vp.pan((0.0, 0.5), 1.5).unwrap();
        assert_eq!(tree.viewport(viewport).unwrap().panning_vector(), Offset(6, 1));
    }
}
