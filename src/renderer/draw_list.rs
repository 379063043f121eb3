//! Recording renderer
//!
//! Collects draw commands instead of rasterizing them. Used by the native
//! build and by tests to inspect what a frame would draw.

use std::collections::HashSet;

use super::{DrawCommand, ImageHandle, Renderer};

/// Renderer that records every command it receives
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Images reported as loaded; `None` means every image is ready
    ready: Option<HashSet<ImageHandle>>,
}

impl DrawList {
    /// All images ready
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the given images ready
    pub fn with_ready_images(images: impl IntoIterator<Item = ImageHandle>) -> Self {
        Self {
            commands: Vec::new(),
            ready: Some(images.into_iter().collect()),
        }
    }

    /// Mark an image as finished loading
    pub fn mark_ready(&mut self, image: ImageHandle) {
        if let Some(ready) = self.ready.as_mut() {
            ready.insert(image);
        }
    }

    /// Drop recorded commands, keeping image readiness
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Renderer for DrawList {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn image_ready(&self, image: ImageHandle) -> bool {
        self.ready.as_ref().is_none_or(|ready| ready.contains(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{BACKGROUND_IMAGE, colors};

    #[test]
    fn test_records_commands() {
        let mut list = DrawList::new();
        assert!(list.is_empty());
        list.draw(DrawCommand::Clear {
            color: colors::CLEAR,
        });
        list.draw(DrawCommand::PopTransform);
        assert_eq!(list.len(), 2);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_image_readiness() {
        assert!(DrawList::new().image_ready(BACKGROUND_IMAGE));

        let mut list = DrawList::with_ready_images([]);
        assert!(!list.image_ready(BACKGROUND_IMAGE));
        list.mark_ready(BACKGROUND_IMAGE);
        assert!(list.image_ready(BACKGROUND_IMAGE));
    }
}
