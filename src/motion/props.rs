/// Inline style properties the engine may write. Teardown restores each of
/// these to whatever the element carried before the first write.
pub const STYLE_PROPERTIES: [&str; 6] = [
    "transform",
    "transform-origin",
    "opacity",
    "filter",
    "clip-path",
    "perspective",
];

/// A sparse set of visual (non-layout) properties.
///
/// Unset fields are left alone when rendering or merging. Lengths are in
/// pixels, angles in degrees, `clip_right` is a percentage inset from the
/// right edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VisualProps {
    pub opacity: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub rotate: Option<f64>,
    pub rotate_x: Option<f64>,
    pub rotate_y: Option<f64>,
    pub blur: Option<f64>,
    pub clip_right: Option<f64>,
    pub perspective: Option<f64>,
    pub transform_origin: Option<&'static str>,
}

macro_rules! setters {
    ($($field:ident),*) => {
        $(
            pub fn $field(mut self, value: f64) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

macro_rules! each_numeric {
    ($mac:ident, $($args:tt)*) => {
        $mac!($($args)*; opacity, x, y, scale, scale_x, scale_y, rotate, rotate_x, rotate_y, blur, clip_right, perspective)
    };
}

macro_rules! lerp_fields {
    ($out:ident, $from:ident, $to:ident, $t:ident; $($field:ident),*) => {
        $(
            $out.$field = match ($from.$field, $to.$field) {
                (Some(a), Some(b)) => Some(a + (b - a) * $t),
                (a, b) => b.or(a),
            };
        )*
    };
}

macro_rules! merge_fields {
    ($dst:ident, $src:ident; $($field:ident),*) => {
        $(
            if $src.$field.is_some() {
                $dst.$field = $src.$field;
            }
        )*
    };
}

impl VisualProps {
    pub fn new() -> Self {
        Self::default()
    }

    setters!(
        opacity,
        x,
        y,
        scale,
        scale_x,
        scale_y,
        rotate,
        rotate_x,
        rotate_y,
        blur,
        clip_right,
        perspective
    );

    pub fn origin(mut self, origin: &'static str) -> Self {
        self.transform_origin = Some(origin);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Interpolate every field set on either side. Fields set on only one
    /// side are held at that value.
    pub fn lerp(from: &Self, to: &Self, t: f64) -> Self {
        let mut out = Self {
            transform_origin: to.transform_origin.or(from.transform_origin),
            ..Self::default()
        };
        each_numeric!(lerp_fields, out, from, to, t);
        out
    }

    /// Overwrite the fields `other` sets, keeping the rest.
    pub fn merge(&mut self, other: &Self) {
        let dst = self;
        each_numeric!(merge_fields, dst, other);
        if other.transform_origin.is_some() {
            dst.transform_origin = other.transform_origin;
        }
    }

    fn has_transform(&self) -> bool {
        self.x.is_some()
            || self.y.is_some()
            || self.scale.is_some()
            || self.scale_x.is_some()
            || self.scale_y.is_some()
            || self.rotate.is_some()
            || self.rotate_x.is_some()
            || self.rotate_y.is_some()
    }

    fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            parts.push(format!(
                "translate3d({}px, {}px, 0px)",
                num(self.x.unwrap_or(0.0)),
                num(self.y.unwrap_or(0.0))
            ));
        }
        if let Some(r) = self.rotate {
            parts.push(format!("rotate({}deg)", num(r)));
        }
        if let Some(r) = self.rotate_y {
            parts.push(format!("rotateY({}deg)", num(r)));
        }
        if let Some(r) = self.rotate_x {
            parts.push(format!("rotateX({}deg)", num(r)));
        }
        if self.scale.is_some() || self.scale_x.is_some() || self.scale_y.is_some() {
            let s = self.scale.unwrap_or(1.0);
            parts.push(format!(
                "scale({}, {})",
                num(s * self.scale_x.unwrap_or(1.0)),
                num(s * self.scale_y.unwrap_or(1.0))
            ));
        }
        parts.join(" ")
    }

    /// Render to `(property, value)` pairs for an element's inline style.
    pub fn css(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if self.has_transform() {
            out.push(("transform", self.transform()));
        }
        if let Some(origin) = self.transform_origin {
            out.push(("transform-origin", origin.to_string()));
        }
        if let Some(o) = self.opacity {
            out.push(("opacity", num(o)));
        }
        if let Some(b) = self.blur {
            out.push(("filter", format!("blur({}px)", num(b))));
        }
        if let Some(c) = self.clip_right {
            out.push(("clip-path", format!("inset(0px {}% 0px 0px)", num(c))));
        }
        if let Some(p) = self.perspective {
            out.push(("perspective", format!("{}px", num(p))));
        }
        out
    }
}

fn num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    // avoid "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_shared_and_one_sided() {
        let from = VisualProps::new().opacity(0.0).y(80.0).scale(0.5);
        let to = VisualProps::new().opacity(1.0).y(0.0).rotate(10.0);
        let mid = VisualProps::lerp(&from, &to, 0.5);
        assert_eq!(mid.opacity, Some(0.5));
        assert_eq!(mid.y, Some(40.0));
        // one-sided fields hold their value
        assert_eq!(mid.scale, Some(0.5));
        assert_eq!(mid.rotate, Some(10.0));
        assert_eq!(mid.x, None);
    }

    #[test]
    fn test_merge_keeps_unset() {
        let mut base = VisualProps::new().y(-20.0).opacity(0.4);
        base.merge(&VisualProps::new().rotate_y(-45.0).opacity(1.0));
        assert_eq!(base.y, Some(-20.0));
        assert_eq!(base.rotate_y, Some(-45.0));
        assert_eq!(base.opacity, Some(1.0));
    }

    #[test]
    fn test_css_rendering() {
        let props = VisualProps::new()
            .x(-60.0)
            .rotate_y(12.5)
            .scale_x(0.0)
            .opacity(0.25)
            .blur(10.0)
            .clip_right(100.0)
            .origin("left center");
        let css = props.css();
        let get = |k: &str| css.iter().find(|(p, _)| *p == k).map(|(_, v)| v.clone());
        assert_eq!(
            get("transform").unwrap(),
            "translate3d(-60px, 0px, 0px) rotateY(12.5deg) scale(0, 1)"
        );
        assert_eq!(get("opacity").unwrap(), "0.25");
        assert_eq!(get("filter").unwrap(), "blur(10px)");
        assert_eq!(get("clip-path").unwrap(), "inset(0px 100% 0px 0px)");
        assert_eq!(get("transform-origin").unwrap(), "left center");
        assert!(get("perspective").is_none());

        for (prop, _) in &css {
            assert!(STYLE_PROPERTIES.contains(prop));
        }
    }

    #[test]
    fn test_empty() {
        assert!(VisualProps::new().is_empty());
        assert!(VisualProps::new().css().is_empty());
        assert!(!VisualProps::new().origin("top").is_empty());
    }
}
