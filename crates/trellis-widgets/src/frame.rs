// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Frame: a bin with edge decorations

use std::fmt;
use std::str::FromStr;
use trellis::ConfigError;
use trellis::geom::{Rect, Size};

use crate::tree::{Children, Container, Placed};
use crate::{Bin, Padding, Result, Tree, WidgetId, WidgetKind};

/// Side of a frame along which the edge image is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    fn key(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Edge {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        Ok(match s {
            "top" => Edge::Top,
            "bottom" => Edge::Bottom,
            "left" => Edge::Left,
            "right" => Edge::Right,
            _ => return Err(ConfigError::UnknownEdge(s.to_string())),
        })
    }
}

/// Corner of a frame at which the corner image is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn key(self) -> &'static str {
        match self {
            Corner::TopLeft => "top left",
            Corner::TopRight => "top right",
            Corner::BottomLeft => "bottom left",
            Corner::BottomRight => "bottom right",
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Corner {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        Ok(match s {
            "top left" => Corner::TopLeft,
            "top right" => Corner::TopRight,
            "bottom left" => Corner::BottomLeft,
            "bottom right" => Corner::BottomRight,
            _ => return Err(ConfigError::UnknownCorner(s.to_string())),
        })
    }
}

/// Decoration descriptor: image size and orientation
///
/// Images themselves belong to the renderer; layout only needs their size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoration<O> {
    pub image: Size,
    pub orientation: O,
}

/// A [`Bin`] with edge and corner decorations
///
/// Layout is that of the bin. Setting the edge may also set the padding so
/// that the child does not cover the decoration.
#[derive(Clone, Debug)]
pub struct Frame {
    pub(crate) bin: Bin,
    edge: Option<Decoration<Edge>>,
    corner: Option<Decoration<Corner>>,
}

impl Frame {
    /// Access the bin part
    #[inline]
    pub fn bin(&self) -> &Bin {
        &self.bin
    }

    /// The edge decoration
    #[inline]
    pub fn edge(&self) -> Option<Decoration<Edge>> {
        self.edge
    }

    /// The corner decoration
    #[inline]
    pub fn corner(&self) -> Option<Decoration<Corner>> {
        self.corner
    }
}

impl Container for Frame {
    fn children(&self) -> Children {
        self.bin.children()
    }

    fn remove_child(&mut self, child: WidgetId) -> bool {
        self.bin.remove_child(child)
    }

    fn min_size(&self, min_of: &dyn Fn(WidgetId) -> Size) -> Size {
        self.bin.min_size(min_of)
    }

    fn child_rects(&self, rect: Rect, min_of: &dyn Fn(WidgetId) -> Size) -> Placed {
        self.bin.child_rects(rect, min_of)
    }
}

/// Mutable access to the decorations of a [`Frame`]
///
/// For the child, use [`Tree::bin_mut`].
pub struct FrameMut<'a> {
    tree: &'a mut Tree,
    id: WidgetId,
}

impl Tree {
    /// Add an empty [`Frame`] without decorations
    pub fn add_frame(&mut self) -> WidgetId {
        let frame = Frame {
            bin: Bin::new(self.config().padding, self.config().placement),
            edge: None,
            corner: None,
        };
        self.insert_node(WidgetKind::Frame(frame))
    }

    /// Access a [`Frame`]
    pub fn frame(&self, id: WidgetId) -> Result<&Frame> {
        self.data(id, "Frame", WidgetKind::as_frame)
    }

    /// Mutably access a [`Frame`]
    pub fn frame_mut(&mut self, id: WidgetId) -> Result<FrameMut<'_>> {
        self.data_mut(id, "Frame", WidgetKind::as_frame_mut)?;
        Ok(FrameMut { tree: self, id })
    }
}

impl<'a> FrameMut<'a> {
    fn data(&mut self) -> Result<&mut Frame> {
        self.tree.data_mut(self.id, "Frame", WidgetKind::as_frame_mut)
    }

    /// Set the edge decoration
    ///
    /// `orientation` is one of `top`, `bottom`, `left` or `right`. With
    /// `autopad`, padding becomes the image height for `top` / `bottom`
    /// edges and the image width for `left` / `right` edges.
    pub fn set_edge(&mut self, image: Size, orientation: &str, autopad: bool) -> Result<()> {
        let orientation: Edge = orientation.parse()?;
        let frame = self.data()?;
        frame.edge = Some(Decoration { image, orientation });
        if autopad {
            frame.bin.padding = Padding::new(match orientation {
                Edge::Top | Edge::Bottom => image.height(),
                Edge::Left | Edge::Right => image.width(),
            });
        }
        self.tree.commit([self.id]);
        Ok(())
    }

    /// Set the corner decoration
    ///
    /// `orientation` is one of `top left`, `top right`, `bottom left` or
    /// `bottom right`. Fails unless the edge has been set.
    pub fn set_corner(&mut self, image: Size, orientation: &str) -> Result<()> {
        let frame = self.data()?;
        if frame.edge.is_none() {
            return Err(ConfigError::CornerBeforeEdge.into());
        }
        let orientation: Corner = orientation.parse()?;
        frame.corner = Some(Decoration { image, orientation });
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn parse_orientations() {
        assert_eq!("left".parse::<Edge>(), Ok(Edge::Left));
        assert_eq!(
            "middle".parse::<Edge>(),
            Err(ConfigError::UnknownEdge("middle".into()))
        );
        assert_eq!("bottom right".parse::<Corner>(), Ok(Corner::BottomRight));
        assert_eq!(
            "top_left".parse::<Corner>(),
            Err(ConfigError::UnknownCorner("top_left".into()))
        );
        assert_eq!(Corner::TopLeft.to_string(), "top left");
    }

    #[test]
    fn autopad_follows_orientation() {
        let mut tree = Tree::new();
        let frame = tree.add_frame();
        let image = Size(6, 2);

        tree.frame_mut(frame).unwrap().set_edge(image, "top", true).unwrap();
        assert_eq!(tree.padding(frame), Ok(2));
        tree.frame_mut(frame).unwrap().set_edge(image, "right", true).unwrap();
        assert_eq!(tree.padding(frame), Ok(6));
        tree.frame_mut(frame).unwrap().set_edge(image, "bottom", false).unwrap();
        assert_eq!(tree.padding(frame), Ok(6));
        assert_eq!(
            tree.frame(frame).unwrap().edge(),
            Some(Decoration {
                image,
                orientation: Edge::Bottom
            })
        );
        assert_eq!(tree.claim(frame), Ok(Size(12, 12)));
    }

    #[test]
    fn corner_needs_edge() {
        let mut tree = Tree::new();
        let frame = tree.add_frame();
        assert_eq!(
            tree.frame_mut(frame).unwrap().set_corner(Size(2, 2), "top left"),
            Err(Error::Config(ConfigError::CornerBeforeEdge))
        );
        assert_eq!(
            tree.frame_mut(frame).unwrap().set_edge(Size(2, 2), "diagonal", true),
            Err(Error::Config(ConfigError::UnknownEdge("diagonal".into())))
        );
        assert_eq!(tree.frame(frame).unwrap().edge(), None);

        tree.frame_mut(frame).unwrap().set_edge(Size(2, 2), "left", true).unwrap();
        tree.frame_mut(frame).unwrap().set_corner(Size(2, 2), "top left").unwrap();
        assert_eq!(
            tree.frame(frame).unwrap().corner().map(|c| c.orientation),
            Some(Corner::TopLeft)
        );
    }

    #[test]
    fn child_via_bin() {
        let mut tree = Tree::new();
        let frame = tree.add_frame();
        let spacer = tree.add_spacer(Size(10, 4));
        tree.frame_mut(frame).unwrap().set_edge(Size(3, 3), "left", true).unwrap();
        tree.bin_mut(frame).unwrap().add(spacer, None).unwrap();
        tree.resize(frame, Rect::from_size(Size(30, 20))).unwrap();
        assert_eq!(tree.rect(spacer), Ok(Some(Rect::from_dimensions(3, 3, 24, 14))));
    }
}
