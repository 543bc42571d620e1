use glam::Vec3;

/// Camera and model orientation state.
///
/// Mutated only by the command handler or direct user interaction;
/// marker code never touches it. Distances are bounded [min, max],
/// yaw and pitch are kept wrapped to [0, 360).
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    distance: f32,
    direction: Vec3,
    yaw_deg: f32,
    pitch_deg: f32,
    auto_rotate: bool,
    min_distance: f32,
    max_distance: f32,
    default_distance: f32,
    auto_rotate_speed: f32,
}

impl ViewState {
    /// Bounds are taken as given; `ViewerConfig::normalized` sorts
    /// them and clamps the default before the viewer constructs this.
    pub fn new(min_distance: f32, max_distance: f32, default_distance: f32, auto_rotate_speed: f32) -> Self {
        Self {
            distance: default_distance,
            direction: Vec3::Z,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
            auto_rotate: false,
            min_distance,
            max_distance,
            default_distance,
            auto_rotate_speed,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn camera_position(&self) -> Vec3 {
        self.direction * self.distance
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw_deg
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch_deg
    }

    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Map a 0..100 zoom percentage onto the distance bounds, inverted
    /// so 100 is closest. 0 and 100 land exactly on max and min.
    pub fn set_zoom_percent(&mut self, value: f32) {
        let v = value.clamp(0.0, 100.0);
        self.distance = self.max_distance - (self.max_distance - self.min_distance) * v / 100.0;
    }

    /// Absolute yaw in degrees, wrapped to [0, 360).
    pub fn set_yaw_degrees(&mut self, value: f32) {
        self.yaw_deg = wrap_degrees(value);
    }

    /// Absolute model pitch in degrees, wrapped to [0, 360).
    /// Driven by the up/down rotation buttons; there is no message
    /// command for it.
    pub fn set_pitch_degrees(&mut self, value: f32) {
        self.pitch_deg = wrap_degrees(value);
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.auto_rotate = enabled;
    }

    /// Default distance and direction, zero yaw and pitch. The
    /// auto-rotate flag is left as-is.
    pub fn reset(&mut self) {
        self.distance = self.default_distance;
        self.direction = Vec3::Z;
        self.yaw_deg = 0.0;
        self.pitch_deg = 0.0;
    }

    /// Re-aim the camera at a point, preserving the current distance.
    /// A zero-length target is ignored.
    pub fn look_at(&mut self, point: Vec3) {
        let dir = point.normalize_or_zero();
        if dir != Vec3::ZERO {
            self.direction = dir;
        }
    }

    /// Advance the auto-rotate yaw animation by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.auto_rotate {
            self.yaw_deg = wrap_degrees(self.yaw_deg + self.auto_rotate_speed * dt);
        }
    }
}

fn wrap_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewState {
        ViewState::new(3.0, 10.0, 5.0, 12.0)
    }

    #[test]
    fn zoom_extremes_hit_bounds_exactly() {
        let mut v = view();
        v.set_zoom_percent(100.0);
        assert_eq!(v.distance(), 3.0);
        v.set_zoom_percent(0.0);
        assert_eq!(v.distance(), 10.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut v = view();
        v.set_zoom_percent(250.0);
        assert_eq!(v.distance(), 3.0);
        v.set_zoom_percent(-40.0);
        assert_eq!(v.distance(), 10.0);
    }

    #[test]
    fn zoom_preserves_direction() {
        let mut v = view();
        v.look_at(Vec3::new(1.0, 1.0, 0.0));
        let dir = v.direction();
        v.set_zoom_percent(75.0);
        assert_eq!(v.direction(), dir);
        assert!((v.camera_position().length() - v.distance()).abs() < 1e-5);
    }

    #[test]
    fn yaw_wraps_to_positive_range() {
        let mut v = view();
        v.set_yaw_degrees(370.0);
        assert!((v.yaw_degrees() - 10.0).abs() < 1e-4);
        v.set_yaw_degrees(-90.0);
        assert!((v.yaw_degrees() - 270.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_wraps_like_yaw() {
        let mut v = view();
        v.set_pitch_degrees(400.0);
        assert!((v.pitch_degrees() - 40.0).abs() < 1e-4);
        v.set_pitch_degrees(-15.0);
        assert!((v.pitch_degrees() - 345.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_and_yaw_are_independent() {
        let mut v = view();
        v.set_yaw_degrees(90.0);
        v.set_pitch_degrees(30.0);
        assert!((v.yaw_degrees() - 90.0).abs() < 1e-4);
        assert!((v.pitch_degrees() - 30.0).abs() < 1e-4);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_auto_rotate() {
        let mut v = view();
        v.set_zoom_percent(100.0);
        v.set_yaw_degrees(123.0);
        v.set_pitch_degrees(45.0);
        v.look_at(Vec3::new(1.0, 0.0, 0.0));
        v.set_auto_rotate(true);

        v.reset();
        assert_eq!(v.distance(), 5.0);
        assert_eq!(v.direction(), Vec3::Z);
        assert_eq!(v.yaw_degrees(), 0.0);
        assert_eq!(v.pitch_degrees(), 0.0);
        assert!(v.auto_rotate());
    }

    #[test]
    fn look_at_keeps_distance() {
        let mut v = view();
        v.set_zoom_percent(50.0);
        let d = v.distance();
        v.look_at(Vec3::new(0.0, 3.0, 4.0));
        assert_eq!(v.distance(), d);
        assert!((v.direction().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn look_at_ignores_zero_target() {
        let mut v = view();
        v.look_at(Vec3::ZERO);
        assert_eq!(v.direction(), Vec3::Z);
    }

    #[test]
    fn tick_advances_yaw_only_when_enabled() {
        let mut v = view();
        v.tick(1.0);
        assert_eq!(v.yaw_degrees(), 0.0);

        v.set_auto_rotate(true);
        v.tick(0.5);
        assert!((v.yaw_degrees() - 6.0).abs() < 1e-4);
    }
}
