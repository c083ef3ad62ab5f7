/// Pivot for rotations and scaling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Origin {
    #[default]
    Center,
    LeftCenter,
    RightCenter,
}

impl Origin {
    pub fn as_css(self) -> &'static str {
        match self {
            Origin::Center => "center center",
            Origin::LeftCenter => "left center",
            Origin::RightCenter => "right center",
        }
    }
}

/// Animatable visual state of a single element.
///
/// `Pose::REST` is the element's natural layout: fully opaque, untransformed,
/// unblurred. Tweens interpolate between two poses field by field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Pixel translation.
    pub x: f64,
    pub y: f64,
    /// Translation as a percentage of the element's own size.
    pub x_percent: f64,
    pub y_percent: f64,
    pub scale: f64,
    /// Rotation around the z axis, degrees.
    pub rotate: f64,
    /// Rotation around the vertical axis, degrees.
    pub rotate_y: f64,
    /// Gaussian blur radius in pixels.
    pub blur: f64,
    pub origin: Origin,
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        x_percent: 0.0,
        y_percent: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_y: 0.0,
        blur: 0.0,
        origin: Origin::Center,
    };

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn x_percent(mut self, x_percent: f64) -> Self {
        self.x_percent = x_percent;
        self
    }

    pub fn y_percent(mut self, y_percent: f64) -> Self {
        self.y_percent = y_percent;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    pub fn rotate_y(mut self, degrees: f64) -> Self {
        self.rotate_y = degrees;
        self
    }

    pub fn blur(mut self, radius: f64) -> Self {
        self.blur = radius;
        self
    }

    pub fn origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Interpolates every numeric field. `t` is not clamped so overshooting
    /// eases carry through. The origin snaps to `to`'s as soon as motion starts.
    pub fn lerp(from: &Pose, to: &Pose, t: f64) -> Pose {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(from.opacity, to.opacity).clamp(0.0, 1.0),
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            x_percent: mix(from.x_percent, to.x_percent),
            y_percent: mix(from.y_percent, to.y_percent),
            scale: mix(from.scale, to.scale),
            rotate: mix(from.rotate, to.rotate),
            rotate_y: mix(from.rotate_y, to.rotate_y),
            blur: mix(from.blur, to.blur).max(0.0),
            origin: if t > 0.0 { to.origin } else { from.origin },
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) translate({}%, {}%) rotateY({}deg) rotate({}deg) scale({})",
            self.x, self.y, self.x_percent, self.y_percent, self.rotate_y, self.rotate, self.scale
        )
    }

    /// Inline style properties this pose writes, as `(property, value)` pairs.
    pub fn css_properties(&self) -> [(&'static str, String); 4] {
        [
            ("opacity", format!("{}", self.opacity)),
            ("transform", self.transform_css()),
            ("transform-origin", self.origin.as_css().to_string()),
            ("filter", format!("blur({}px)", self.blur)),
        ]
    }
}

/// Properties `css_properties` may have written, for reverting.
pub const POSE_PROPERTIES: [&str; 4] = ["opacity", "transform", "transform-origin", "filter"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints() {
        let from = Pose::REST.opacity(0.0).y(80.0).blur(10.0);
        assert_eq!(Pose::lerp(&from, &Pose::REST, 0.0), from);
        assert_eq!(Pose::lerp(&from, &Pose::REST, 1.0), Pose::REST);
    }

    #[test]
    fn lerp_midpoint() {
        let to = Pose::REST.rotate_y(-110.0).x_percent(-20.0);
        let mid = Pose::lerp(&Pose::REST, &to, 0.5);
        assert_eq!(mid.rotate_y, -55.0);
        assert_eq!(mid.x_percent, -10.0);
    }

    #[test]
    fn overshoot_never_leaves_valid_opacity() {
        let from = Pose::REST.opacity(0.0);
        assert_eq!(Pose::lerp(&from, &Pose::REST, 1.2).opacity, 1.0);
        assert_eq!(Pose::lerp(&from, &Pose::REST, 1.2).y, 0.0);
    }

    #[test]
    fn origin_switches_once_motion_starts() {
        let to = Pose::REST.origin(Origin::LeftCenter);
        assert_eq!(Pose::lerp(&Pose::REST, &to, 0.0).origin, Origin::Center);
        assert_eq!(Pose::lerp(&Pose::REST, &to, 0.01).origin, Origin::LeftCenter);
    }

    #[test]
    fn transform_css_lists_every_component() {
        let css = Pose::REST.x(-50.0).scale(0.9).transform_css();
        assert_eq!(
            css,
            "translate(-50px, 0px) translate(0%, 0%) rotateY(0deg) rotate(0deg) scale(0.9)"
        );
    }
}
