//! Sprite descriptors: a named, fixed-size, ordered stack of layers.
//!
//! Layers are painted in the order they were pushed, so a later layer
//! always covers an earlier one where they overlap.

use super::Shape;

/// One entry in a composition's layer stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub shape: Shape,

    /// True when the layer's position or colour came from the entropy source.
    pub jittered: bool,
}

/// Everything needed to paint one sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Sprite name, also the output file stem.
    pub name: String,

    /// Width and height of the square canvas.
    pub size: u32,

    layers: Vec<Layer>,
}

impl Composition {
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            name: name.into(),
            size,
            layers: Vec::new(),
        }
    }

    /// Push a layer on top of the stack.
    pub fn push(&mut self, shape: Shape) -> &mut Self {
        self.layers.push(Layer {
            shape,
            jittered: false,
        });
        self
    }

    /// Push a decorative layer whose geometry or colour was randomized.
    pub fn push_jittered(&mut self, shape: Shape) -> &mut Self {
        self.layers.push(Layer {
            shape,
            jittered: true,
        });
        self
    }

    /// Push several fixed layers in order.
    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) -> &mut Self {
        for shape in shapes {
            self.push(shape);
        }
        self
    }

    /// Layers from bottom to top.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layers that do not depend on the entropy source.
    pub fn fixed_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|l| !l.jittered)
    }

    /// Layers that do depend on the entropy source.
    pub fn jittered_layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(|l| l.jittered)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
