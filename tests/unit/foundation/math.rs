use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 0), 0);
    assert_eq!(mul_div255_u16(100, 128), 50);
}

#[test]
fn wrap_angle_lands_in_half_open_turn() {
    assert_eq!(wrap_angle(0.0), 0.0);
    assert!((wrap_angle(-PI) - PI).abs() < 1e-12);
    assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-12);
    assert!(wrap_angle(-1e-20) < TAU);
}

#[test]
fn canvas_angle_is_clockwise_with_y_down() {
    assert_eq!(canvas_angle(1.0, 0.0), 0.0);
    assert!((canvas_angle(0.0, 1.0) - PI / 2.0).abs() < 1e-12);
    assert!((canvas_angle(-1.0, 0.0) - PI).abs() < 1e-12);
    assert!((canvas_angle(-1.0, -0.0) - PI).abs() < 1e-12);
}

#[test]
fn lerp_u8_hits_endpoints() {
    assert_eq!(lerp_u8(0, 255, 0.0), 0);
    assert_eq!(lerp_u8(0, 255, 1.0), 255);
    assert_eq!(lerp_u8(0, 200, 0.5), 100);
}

#[test]
fn unpremultiply_restores_straight_color() {
    let mut px = [64u8, 32, 0, 128, 9, 9, 9, 0, 1, 2, 3, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[1, 2, 3, 255]);
}
