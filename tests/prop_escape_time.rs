use proptest::prelude::*;
use kernel_bench::{
    escape_iterations, Complex, FractalFieldRenderer, NoDelayPacer, NullSink, PlaneRegion,
    RenderOptions,
};

fn orbit(c: Complex, updates: u32) -> Vec<Complex> {
    let mut z = Complex::ZERO;
    let mut points = vec![z];
    for _ in 0..updates {
        z = z * z + c;
        points.push(z);
    }
    points
}

proptest! {
    /// An escape count `k` means `|z_k| > 2` while no earlier iterate exceeded 2.
    #[test]
    fn prop_escape_is_first_crossing(
        real in -2.5f64..1.5,
        imag in -1.5f64..1.5,
        max_iterations in 1u32..200,
    ) {
        let c = Complex { real, imag };
        let k = escape_iterations(c, max_iterations);
        prop_assert!(k <= max_iterations);

        let points = orbit(c, k);
        for z in &points[..k as usize] {
            prop_assert!(z.magnitude_squared() <= 4.0);
        }
        if k < max_iterations {
            prop_assert!(points[k as usize].magnitude_squared() > 4.0);
        }
    }

    /// Render time never feeds back into the field.
    #[test]
    fn prop_field_is_repeatable(
        width in 1usize..24,
        height in 1usize..24,
        max_iterations in 1u32..64,
    ) {
        let renderer = FractalFieldRenderer::new(width, height, max_iterations).unwrap();
        let region = PlaneRegion::new(-2.5, 1.0, -1.25, 1.25).unwrap();

        let first = renderer.iteration_field(region);
        let report = renderer.run(region, RenderOptions::HEADLESS, &mut NullSink, &mut NoDelayPacer);
        let second = renderer.iteration_field(region);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), width * height);
        prop_assert_eq!(
            report.in_set_pixels,
            first.iter().filter(|&&it| it == max_iterations).count()
        );
    }
}

#[test]
fn centre_pixel_of_full_view_is_in_set() {
    let renderer = FractalFieldRenderer::new(50, 50, 50).unwrap();
    let region = PlaneRegion::new(-2.5, 1.0, -1.25, 1.25).unwrap();

    let field = renderer.iteration_field(region);

    // x = -2.5 + col * 3.5 / 50 hits 0.0 at col 35.71.., so col 36 sits at 0.02
    assert_eq!(field[25 * 50 + 36], 50);
    assert!(field[0] < 5);
}
