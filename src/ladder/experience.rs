/// Cumulative experience required to reach each character level.
/// Index 0 is level 1. The 99 -> 100 gap really is that big.
#[rustfmt::skip]
pub const LEVEL_EXPERIENCE: [u64; 100] = [
    0,          525,        1_760,      3_781,      7_184,
    12_186,     19_324,     29_377,     43_181,     61_693,
    85_990,     117_506,    157_384,    207_736,    269_997,
    346_462,    439_268,    551_295,    685_171,    843_709,
    1_030_734,  1_249_629,  1_504_995,  1_800_847,  2_142_652,
    2_535_122,  2_984_677,  3_496_798,  4_080_655,  4_742_836,
    5_490_247,  6_334_393,  7_283_446,  8_384_398,  9_541_110,
    10_874_351, 12_361_842, 14_018_289, 15_859_432, 17_905_634,
    19_645_200, 21_544_800, 23_618_700, 25_886_400, 28_367_700,
    31_082_400, 34_052_100, 37_300_200, 40_851_900, 44_735_700,
    48_981_300, 53_621_400, 58_691_700, 64_231_200, 70_282_800,
    76_893_300, 84_113_700, 91_999_800, 100_612_500, 110_017_800,
    120_287_700, 131_500_200, 143_739_900, 157_098_600, 171_675_900,
    187_579_800, 204_926_700, 223_843_200, 244_466_100, 266_943_600,
    291_436_200, 318_118_500, 347_180_400, 378_828_300, 413_286_900,
    450_800_100, 491_631_300, 536_067_000, 584_417_700, 637_020_300,
    694_240_500, 756_475_200, 824_154_600, 897_744_900, 977_750_700,
    1_064_718_300, 1_159_239_600, 1_261_955_400, 1_373_560_200, 1_494_806_700,
    1_626_511_500, 1_769_561_400, 1_924_917_600, 2_093_622_000, 2_276_806_500,
    2_475_699_300, 2_691_632_100, 2_926_051_200, 3_180_527_700, 4_250_334_444,
];

/// Experience still needed to hit the next level, plus how far into the
/// current level the character is (percent). None at the cap or for a
/// level the table doesn't know.
pub fn progress_to_next(level: u32, experience: u64) -> Option<(u64, f64)> {
    if level < 1 || level as usize >= LEVEL_EXPERIENCE.len() {
        return None;
    }

    let floor = LEVEL_EXPERIENCE[(level - 1) as usize];
    let ceil = LEVEL_EXPERIENCE[level as usize];

    let remaining = ceil.saturating_sub(experience);
    let into = experience.saturating_sub(floor) as f64;
    let span = (ceil - floor) as f64;
    let pct = (into / span * 100.0).clamp(0.0, 100.0);

    Some((remaining, pct))
}
