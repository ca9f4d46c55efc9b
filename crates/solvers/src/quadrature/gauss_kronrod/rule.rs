//! The 15-point Kronrod rule with its embedded 7-point Gauss rule.

use super::{Error, Segment};

/// Kronrod abscissae on `[-1, 1]`, descending, ending at the center.
///
/// Odd indices are the Gauss abscissae.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// Gauss weights for `XGK[1]`, `XGK[3]`, `XGK[5]`, and the center.
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Estimates the integral over `[lower, upper]` and its error.
///
/// The error estimate follows QUADPACK's `qk15`: the raw Gauss/Kronrod
/// difference is scaled against the integrand's variation on the segment
/// and floored at a multiple of machine precision.
pub(super) fn kronrod15<F>(mut f: F, lower: f64, upper: f64) -> Result<Segment, Error>
where
    F: FnMut(f64) -> Result<f64, Error>,
{
    let center = 0.5 * (lower + upper);
    let half_width = 0.5 * (upper - lower);

    let f_center = f(center)?;
    let mut gauss = WG[3] * f_center;
    let mut kronrod = WGK[7] * f_center;
    let mut abs_sum = kronrod.abs();

    let mut f_left = [0.0; 7];
    let mut f_right = [0.0; 7];
    for j in 0..7 {
        let dx = half_width * XGK[j];
        let f1 = f(center - dx)?;
        let f2 = f(center + dx)?;
        f_left[j] = f1;
        f_right[j] = f2;

        kronrod += WGK[j] * (f1 + f2);
        abs_sum += WGK[j] * (f1.abs() + f2.abs());
        if j % 2 == 1 {
            gauss += WG[j / 2] * (f1 + f2);
        }
    }

    let mean = 0.5 * kronrod;
    let mut variation = WGK[7] * (f_center - mean).abs();
    for j in 0..7 {
        variation += WGK[j] * ((f_left[j] - mean).abs() + (f_right[j] - mean).abs());
    }

    let scale = half_width.abs();
    let abs_sum = abs_sum * scale;
    let variation = variation * scale;

    let mut abs_error = ((kronrod - gauss) * half_width).abs();
    if variation != 0.0 && abs_error != 0.0 {
        abs_error = variation * (200.0 * abs_error / variation).powf(1.5).min(1.0);
    }
    if abs_sum > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        abs_error = abs_error.max(50.0 * f64::EPSILON * abs_sum);
    }

    Ok(Segment {
        lower,
        upper,
        value: kronrod * half_width,
        abs_error,
    })
}
