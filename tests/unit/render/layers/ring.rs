use super::*;

#[test]
fn default_scale_gives_radius_150() {
    let cfg = RingConfig::default();
    assert_eq!(cfg.r_value(), 300.0);
    assert_eq!(cfg.r_scale(), 150.0);
    assert_eq!(cfg.center(), Point::new(150.0, 150.0));
}

#[test]
fn non_positive_radius_value_clamps_to_one() {
    let cfg = RingConfig {
        scale_x: -400,
        radius: 0,
        ..RingConfig::default()
    };
    assert_eq!(cfg.r_value(), 1.0);
    assert_eq!(cfg.r_scale(), 0.5);

    let zero = RingConfig {
        scale_x: 70,
        radius: -10,
        ..RingConfig::default()
    };
    assert_eq!(zero.r_value(), 1.0);
}

#[test]
fn nudges_move_center_and_radius() {
    let cfg = RingConfig {
        x: 2,
        y: -2,
        radius: 4,
        scale_x: 1080,
        scale_y: 1920,
        ..RingConfig::default()
    };
    assert_eq!(cfg.center(), Point::new(565.0, 935.0));
    assert_eq!(cfg.r_scale(), (1080.0 + 28.0) / 2.0);
}

#[test]
fn shine_rotates_seam_by_quarter_radians() {
    let cfg = RingConfig {
        shine: 2,
        ..RingConfig::default()
    };
    let GradientGeometry::Conical { start_angle, .. } = cfg.gradient_geometry() else {
        panic!("expected conical geometry");
    };
    assert!((start_angle - (-std::f64::consts::PI + 0.5)).abs() < 1e-12);
}

#[test]
fn from_scene_copies_ring_subtree() {
    let mut scene = SceneState::default();
    scene.ring.stroke_width = 12.0;
    scene.ring.shine = 3;
    let cfg = RingConfig::from_scene(&scene);
    assert_eq!(cfg.stroke_width, 12.0);
    assert_eq!(cfg.shine, 3);
    assert_eq!(cfg.scale_x, 1080);
    assert_eq!(cfg.scale_y, 1920);
}
