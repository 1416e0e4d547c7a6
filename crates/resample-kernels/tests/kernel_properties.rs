//! Structural properties every kernel must satisfy

use approx::assert_abs_diff_eq;
use resample_kernels::prelude::*;

/// Every default family plus a spread of shape parameters
fn all_kernels() -> Vec<KernelVariant<f64>> {
    let mut kernels: Vec<KernelVariant<f64>> = KernelKind::ALL
        .into_iter()
        .map(KernelVariant::default_of)
        .collect();
    for a in [-0.75, -1.0, -0.25, 0.5] {
        kernels.push(KernelVariant::keys(a));
    }
    for (b, c) in [(0.0, 0.5), (1.0, 0.0), (0.0, 1.0), (0.5, 0.25), (0.2, 0.7)] {
        kernels.push(KernelVariant::mitchell_netravali(b, c));
    }
    kernels
}

/// Sample points on a grid fine enough to land between and on breakpoints
fn sample_points(radius: f64) -> Vec<f64> {
    let n = (radius * 64.0) as i64 + 64;
    (-n..=n).map(|i| i as f64 / 32.0).collect()
}

#[test]
fn test_zero_outside_support() {
    for k in all_kernels() {
        let r = k.support_length() as f64 / 2.0;
        assert_eq!(k.support_radius(), r);
        for x in [r, r + 1e-9, r + 0.5, r * 10.0, 1e300, f64::INFINITY] {
            assert_eq!(k.evaluate(x), 0.0, "{} at {x}", k.name());
            if x > r {
                assert_eq!(k.evaluate(-x), 0.0, "{} at {}", k.name(), -x);
            }
        }
        // Box includes its left edge, every other kernel is zero at -r
        if k.kind() != KernelKind::Box {
            assert_eq!(k.evaluate(-r), 0.0, "{} at {}", k.name(), -r);
        }
    }
}

#[test]
fn test_symmetry() {
    for k in all_kernels() {
        for x in sample_points(k.support_radius()) {
            // The box kernel is only symmetric away from its half-open edge
            if k.kind() == KernelKind::Box && x.abs() == 0.5 {
                continue;
            }
            assert_eq!(k.evaluate(x), k.evaluate(-x), "{} at {x}", k.name());
        }
    }
}

#[test]
fn test_cardinal_kernels_interpolate() {
    for k in all_kernels().into_iter().filter(|k| k.is_cardinal()) {
        assert_eq!(k.evaluate(0), 1.0, "{}", k.name());
        for n in [-5, -3, -2, -1, 1, 2, 3, 5] {
            assert_abs_diff_eq!(k.evaluate(n), 0.0, epsilon = 1e-14);
        }
    }
}

#[test]
fn test_non_cardinal_kernels_do_not_interpolate() {
    for kind in [KernelKind::Quadratic, KernelKind::Cubic, KernelKind::MitchellNetravali] {
        let k = KernelVariant::<f64>::default_of(kind);
        assert!(!k.is_cardinal());
        assert!(k.evaluate(0) < 1.0);
    }
}

#[test]
fn test_partition_of_unity() {
    for k in all_kernels().into_iter().filter(|k| k.is_normalized()) {
        let reach = k.support_length() as i64 + 1;
        for i in 0..64 {
            let x = i as f64 / 64.0;
            let total: f64 = (-reach..=reach).map(|n| k.evaluate(x - n as f64)).sum();
            assert_abs_diff_eq!(total, 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_box_partition_of_unity_is_exact_at_edges() {
    let k = BoxKernel::<f64>::new();
    for x in [0.5, -0.5, 1.5, 0.0, 0.999_999] {
        let total: f64 = (-3..=3).map(|n| k.evaluate(x - n as f64)).sum();
        assert_eq!(total, 1.0, "x = {x}");
    }
}

#[test]
fn test_continuity_at_breakpoints() {
    let eps = 1e-9;
    for k in all_kernels() {
        // The box kernel jumps at its edges
        if k.kind() == KernelKind::Box {
            continue;
        }
        let r = k.support_radius();
        let mut breakpoints = vec![r];
        match k.support_length() {
            3 => breakpoints.push(0.5),
            4 => breakpoints.push(1.0),
            _ => {}
        }
        for t in breakpoints {
            assert_abs_diff_eq!(k.evaluate(t - eps), k.evaluate(t + eps), epsilon = 1e-7);
        }
    }
}

#[test]
fn test_two_piece_cubics_join_exactly() {
    for a in [-0.5, -0.75, -1.0, 0.25] {
        let c = *Keys::new(a).coefficients();
        assert_abs_diff_eq!(c.inner(1.0), c.outer(1.0), epsilon = 1e-14);
    }
    for (b, c) in [(1.0 / 3.0, 1.0 / 3.0), (1.0, 0.0), (0.0, 0.5), (0.8, 0.1)] {
        let k = *MitchellNetravali::new(b, c).coefficients();
        assert_abs_diff_eq!(k.inner(1.0), k.outer(1.0), epsilon = 1e-14);
    }
}

#[test]
fn test_single_precision_properties() {
    let kernels: Vec<KernelVariant<f32>> = KernelKind::ALL
        .into_iter()
        .map(KernelVariant::default_of)
        .collect();
    for k in kernels {
        assert_eq!(k.evaluate(k.support_radius() + 0.25), 0.0f32);
        if k.is_cardinal() {
            assert_eq!(k.evaluate(0), 1.0f32);
        }
        let total: f32 = (-3..=3).map(|n| k.evaluate(0.3f32 - n as f32)).sum();
        assert!((total - 1.0).abs() < 1e-6, "{}: {total}", k.name());
    }
}
