//! Reflection render-list hand-off.

use std::cell::RefCell;
use std::rc::Rc;

/// A reflective render target accepting a replacement list of meshes to
/// include in its reflection.
pub trait ReflectionTarget {
    fn set_render_list(&mut self, ids: Vec<String>);
}

impl<T: ReflectionTarget> ReflectionTarget for Rc<RefCell<T>> {
    fn set_render_list(&mut self, ids: Vec<String>) {
        self.borrow_mut().set_render_list(ids);
    }
}

/// Stores the current render list for the engine to consume.
#[derive(Debug, Default)]
pub struct ReflectionProbe {
    render_list: Vec<String>,
}

impl ReflectionProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_list(&self) -> &[String] {
        &self.render_list
    }
}

impl ReflectionTarget for ReflectionProbe {
    fn set_render_list(&mut self, ids: Vec<String>) {
        self.render_list = ids;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hand_off_replaces_list() {
        let mut probe = ReflectionProbe::new();
        probe.set_render_list(vec!["a".to_string(), "b".to_string()]);
        probe.set_render_list(vec!["c".to_string()]);
        assert_eq!(probe.render_list(), ["c".to_string()]);
    }
}
