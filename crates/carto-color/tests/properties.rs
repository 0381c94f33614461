use carto_color::{Color, Op, Rgb};
use carto_color_space::parse_rgb;
use proptest::prelude::*;

fn rgb_color(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb(Rgb::from((r, g, b)))
}

fn rendered_channels(color: &Color) -> [u8; 3] {
    parse_rgb(&color.to_string()).unwrap().rounded()
}

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

/// Fractions in `[0, 1]`, with the endpoints drawn often.
fn unit_interval() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), 0.0f64..=1.0]
}

proptest! {
    #[test]
    fn construction_clamps_components(
        h in -1000.0f64..1000.0,
        s in -5.0f64..5.0,
        l in -5.0f64..5.0,
    ) {
        let c = Color::new(Some(&[h, s, l]), None, None).get_components().unwrap();
        prop_assert!((0.0..=360.0).contains(&c.h));
        prop_assert!((0.0..=1.0).contains(&c.s));
        prop_assert!((0.0..=1.0).contains(&c.l));
    }

    #[test]
    fn perceptual_round_trip_is_close(
        h in 0.0f64..360.0,
        s in unit_interval(),
        l in unit_interval(),
    ) {
        let original = Color::hsl(h, s, l);
        let back = original.to_perceptual().to_standard();
        prop_assert!(!back.is_perceptual());

        let c = back.get_components().unwrap();
        prop_assert!((c.l - l).abs() <= 1e-3, "lightness {} vs {}", c.l, l);
        // Saturation is undefined at black and white, hue for any gray.
        if l > 1e-4 && l < 1.0 - 1e-4 {
            prop_assert!((c.s - s).abs() <= 1e-3, "saturation {} vs {}", c.s, s);
        }
        if s * (1.0 - (2.0 * l - 1.0).abs()) >= 1e-4 {
            prop_assert!(hue_distance(c.h, h) <= 1e-3, "hue {} vs {}", c.h, h);
        }
    }

    #[test]
    fn conversions_are_idempotent(h in 0.0f64..360.0, s in 0.0f64..=1.0, l in 0.0f64..=1.0) {
        let perceptual = Color::hsl(h, s, l).to_perceptual();
        prop_assert_eq!(perceptual.to_perceptual(), perceptual);

        let standard = Color::hsl(h, s, l);
        prop_assert_eq!(standard.to_standard(), standard);
    }

    #[test]
    fn operate_keeps_receiver_alpha(
        a1 in 0.0f64..=1.0,
        a2 in 0.0f64..=1.0,
        perceptual in any::<bool>(),
    ) {
        let lhs = Color::hsl(30.0, 0.5, 0.5).with_alpha(a1);
        let lhs = if perceptual { lhs.to_perceptual() } else { lhs };
        let rhs = Color::hsl(200.0, 0.7, 0.3).with_alpha(a2);

        let result = lhs.operate(Op::Mul, rhs).unwrap();
        prop_assert_eq!(result.alpha(), a1);
        prop_assert_eq!(result.is_perceptual(), perceptual);
    }

    #[test]
    fn addition_is_channel_wise(
        r1 in 0u8..=255, g1 in 0u8..=255, b1 in 0u8..=255,
        r2 in 0u8..=255, g2 in 0u8..=255, b2 in 0u8..=255,
    ) {
        let result = rgb_color(r1, g1, b1).operate(Op::Add, rgb_color(r2, g2, b2)).unwrap();
        let expected = [
            (r1 as u16 + r2 as u16).min(255) as u8,
            (g1 as u16 + g2 as u16).min(255) as u8,
            (b1 as u16 + b2 as u16).min(255) as u8,
        ];
        prop_assert_eq!(rendered_channels(&result), expected);
    }

    #[test]
    fn changing_one_channel_only_changes_that_channel(
        base in (0u8..=255, 0u8..=255, 0u8..=255),
        other in (0u8..=255, 0u8..=255, 0u8..=255),
        red in 0u8..=255,
    ) {
        let lhs = rgb_color(base.0, base.1, base.2);
        let first = lhs.operate(Op::Mul, rgb_color(other.0, other.1, other.2)).unwrap();
        let second = lhs.operate(Op::Mul, rgb_color(red, other.1, other.2)).unwrap();

        let first = rendered_channels(&first);
        let second = rendered_channels(&second);
        prop_assert_eq!(first[1], second[1]);
        prop_assert_eq!(first[2], second[2]);

        let expected_red = (base.0 as f64 / 255.0) * (red as f64 / 255.0) * 255.0;
        prop_assert_eq!(second[0], (expected_red + 0.5).floor() as u8);
    }
}
