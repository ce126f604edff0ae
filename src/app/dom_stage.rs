use std::collections::HashMap;

use leptos::prelude::window;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::motion::{props::STYLE_PROPERTIES, Layout, Stage, Target, VisualProps, ROOT_ROLE};

/// [`Stage`] over a mounted section element.
///
/// Roles resolve to descendants carrying a matching `data-motion`
/// attribute, in document order. The section itself is [`ROOT_ROLE`].
pub struct DomStage {
    root: HtmlElement,
    baselines: HashMap<Target, Vec<(&'static str, String)>>,
}

impl DomStage {
    pub fn new(root: HtmlElement) -> Self {
        Self {
            root,
            baselines: HashMap::new(),
        }
    }

    fn elements(&self, role: &str) -> Vec<HtmlElement> {
        if role == ROOT_ROLE {
            return vec![self.root.clone()];
        }
        let Ok(nodes) = self
            .root
            .query_selector_all(&format!("[data-motion=\"{role}\"]"))
        else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn element(&self, target: Target) -> Option<HtmlElement> {
        self.elements(target.role).into_iter().nth(target.index)
    }
}

impl Stage for DomStage {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or(0.0)
    }

    fn count(&self, role: &str) -> usize {
        self.elements(role).len()
    }

    fn layout(&self, target: Target) -> Option<Layout> {
        let el = self.element(target)?;
        let rect = el.get_bounding_client_rect();
        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        Some(Layout {
            element_top: rect.top() + self.scroll_offset(),
            element_height: rect.height(),
            viewport_height,
        })
    }

    fn write(&mut self, target: Target, props: &VisualProps) {
        let Some(el) = self.element(target) else {
            return;
        };
        let style = el.style();
        self.baselines.entry(target).or_insert_with(|| {
            STYLE_PROPERTIES
                .iter()
                .map(|prop| (*prop, style.get_property_value(prop).unwrap_or_default()))
                .collect()
        });
        for (prop, value) in props.css() {
            if let Err(e) = style.set_property(prop, &value) {
                log::warn!("couldn't set {prop} on {}[{}]: {e:?}", target.role, target.index);
            }
        }
    }

    fn restore(&mut self, target: Target) {
        let Some(baseline) = self.baselines.remove(&target) else {
            return;
        };
        let Some(el) = self.element(target) else {
            return;
        };
        let style = el.style();
        for (prop, value) in baseline {
            let restored = if value.is_empty() {
                style.remove_property(prop).map(|_| ())
            } else {
                style.set_property(prop, &value)
            };
            if let Err(e) = restored {
                log::warn!(
                    "couldn't restore {prop} on {}[{}]: {e:?}",
                    target.role,
                    target.index
                );
            }
        }
    }
}
